//! Customer orders: checkout, payment and fulfilment.

use crate::builder::{LifecycleBuilder, TransitionBuilder};
use crate::core::{StateHistory, StateTransition};
use crate::engine::{Lifecycle, Stateful};
use crate::table::ConfigurationError;
use crate::{event_enum, state_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

state_enum! {
    pub enum OrderState {
        Initial,
        Payment,
        Fulfillment,
        Complete,
    }
    final: [Complete]
}

event_enum! {
    pub enum OrderEvent {
        Checkout,
        Pay,
        Fulfill,
    }
}

pub type OrderLifecycle = Lifecycle<OrderState, OrderEvent, Order>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub surname: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    pub cost_cents: i64,
}

#[derive(Clone, Debug)]
pub struct Order {
    customer: Customer,
    line_items: Vec<LineItem>,
    paid_cents: i64,
    fulfilled_at: Option<DateTime<Utc>>,
    state: OrderState,
    history: StateHistory<OrderState, OrderEvent>,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            line_items: Vec::new(),
            paid_cents: 0,
            fulfilled_at: None,
            state: OrderState::Initial,
            history: StateHistory::new(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Sum of line item costs, saturating at `i64` bounds.
    pub fn total_cents(&self) -> i64 {
        self.line_items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.cost_cents))
    }

    pub fn record_payment(&mut self, amount_cents: i64) {
        self.paid_cents = self.paid_cents.saturating_add(amount_cents);
    }

    pub fn paid_cents(&self) -> i64 {
        self.paid_cents
    }

    pub fn fulfilled_at(&self) -> Option<DateTime<Utc>> {
        self.fulfilled_at
    }

    pub fn history(&self) -> &StateHistory<OrderState, OrderEvent> {
        &self.history
    }
}

impl Stateful<OrderState, OrderEvent> for Order {
    fn current_state(&self) -> &OrderState {
        &self.state
    }

    fn set_current_state(&mut self, state: OrderState) {
        self.state = state;
    }

    fn record_transition(&mut self, transition: StateTransition<OrderState, OrderEvent>) {
        self.history = self.history.record(transition);
    }
}

/// Declare the order lifecycle.
pub fn lifecycle() -> Result<OrderLifecycle, ConfigurationError> {
    let lifecycle = LifecycleBuilder::new()
        .states([
            OrderState::Initial,
            OrderState::Payment,
            OrderState::Fulfillment,
            OrderState::Complete,
        ])
        .initial(OrderState::Initial)
        .transition(
            TransitionBuilder::new()
                .on(OrderEvent::Checkout)
                .from(OrderState::Initial)
                .to(OrderState::Payment)
                .when(|order: &Order, _| !order.line_items.is_empty()),
        )?
        .transition(
            TransitionBuilder::new()
                .on(OrderEvent::Pay)
                .from(OrderState::Payment)
                .to(OrderState::Fulfillment)
                .when(|order: &Order, _| order.paid_cents >= order.total_cents()),
        )?
        .transition(
            TransitionBuilder::new()
                .on(OrderEvent::Fulfill)
                .from(OrderState::Fulfillment)
                .to(OrderState::Complete)
                .on_success(|order: &mut Order, _| order.fulfilled_at = Some(Utc::now())),
        )?
        .build()?;

    Ok(lifecycle)
}
