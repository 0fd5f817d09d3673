//! Product moderation: every saved product version waits in a queue until a
//! moderator approves or rejects it. Approval publishes that version.

use crate::builder::{LifecycleBuilder, TransitionBuilder};
use crate::core::{StateHistory, StateTransition};
use crate::engine::{Lifecycle, Stateful};
use crate::table::ConfigurationError;
use crate::versioning::Versioned;
use crate::{event_enum, state_enum};
use serde::{Deserialize, Serialize};

state_enum! {
    pub enum ModerationState {
        Pending,
        Approved,
        Rejected,
    }
    final: [Approved, Rejected]
}

event_enum! {
    pub enum ModerationEvent {
        Approve,
        Reject,
    }
}

/// Moderation entries fire against the product they point at.
pub type ModerationLifecycle = Lifecycle<ModerationState, ModerationEvent, Moderation, Product>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub currency: String,
}

/// A catalogue entry. Only the approved version is ever displayed.
#[derive(Clone, Debug)]
pub struct Product {
    id: u64,
    details: Versioned<ProductDetails>,
    display_version: u64,
}

impl Product {
    pub fn create(id: u64, details: ProductDetails) -> Self {
        Self {
            id,
            details: Versioned::create(details),
            display_version: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.details.version()
    }

    pub fn details(&self) -> &Versioned<ProductDetails> {
        &self.details
    }

    /// Save an edited copy of the details as a new version.
    pub fn revise<F>(&mut self, edit: F) -> u64
    where
        F: FnOnce(&mut ProductDetails),
    {
        self.details.update(edit)
    }

    pub fn display_version(&self) -> u64 {
        self.display_version
    }

    /// The details to show, if any version has been approved.
    pub fn displayed(&self) -> Option<&ProductDetails> {
        self.details
            .revision(self.display_version)
            .ok()
            .map(|revision| &revision.record)
    }

    pub fn display(&self) -> bool {
        self.display_version > 0
    }
}

/// Review of one product version.
#[derive(Clone, Debug)]
pub struct Moderation {
    product_id: u64,
    version: u64,
    state: ModerationState,
    history: StateHistory<ModerationState, ModerationEvent>,
}

impl Moderation {
    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    /// Product version under review.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &StateHistory<ModerationState, ModerationEvent> {
        &self.history
    }
}

impl Stateful<ModerationState, ModerationEvent> for Moderation {
    fn current_state(&self) -> &ModerationState {
        &self.state
    }

    fn set_current_state(&mut self, state: ModerationState) {
        self.state = state;
    }

    fn record_transition(
        &mut self,
        transition: StateTransition<ModerationState, ModerationEvent>,
    ) {
        self.history = self.history.record(transition);
    }
}

/// All moderation entries, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ModerationQueue {
    entries: Vec<Moderation>,
}

impl ModerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a pending moderation for the product's current version.
    pub fn submit(&mut self, product: &Product) -> &mut Moderation {
        let index = self.entries.len();
        self.entries.push(Moderation {
            product_id: product.id(),
            version: product.version(),
            state: ModerationState::Pending,
            history: StateHistory::new(),
        });
        &mut self.entries[index]
    }

    /// Entries still waiting for a decision.
    pub fn pending(&self) -> impl Iterator<Item = &Moderation> {
        self.entries
            .iter()
            .filter(|m| m.state == ModerationState::Pending)
    }

    /// Most recent moderation for a product.
    pub fn current_for(&self, product_id: u64) -> Option<&Moderation> {
        self.entries.iter().rev().find(|m| m.product_id == product_id)
    }

    pub fn current_for_mut(&mut self, product_id: u64) -> Option<&mut Moderation> {
        self.entries
            .iter_mut()
            .rev()
            .find(|m| m.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declare the moderation lifecycle.
///
/// Approving copies the moderated version onto the product as its display
/// version. Both decisions must be fired with the product under review as
/// context; any other product is a guard failure.
pub fn lifecycle() -> Result<ModerationLifecycle, ConfigurationError> {
    let lifecycle = LifecycleBuilder::new()
        .states([
            ModerationState::Pending,
            ModerationState::Approved,
            ModerationState::Rejected,
        ])
        .initial(ModerationState::Pending)
        .transition(
            TransitionBuilder::new()
                .on(ModerationEvent::Approve)
                .from(ModerationState::Pending)
                .to(ModerationState::Approved)
                .when(reviews)
                .on_success(|moderation: &mut Moderation, product: &mut Product| {
                    product.display_version = moderation.version;
                }),
        )?
        .transition(
            TransitionBuilder::new()
                .on(ModerationEvent::Reject)
                .from(ModerationState::Pending)
                .to(ModerationState::Rejected)
                .when(reviews),
        )?
        .build()?;

    Ok(lifecycle)
}

fn reviews(moderation: &Moderation, product: &Product) -> bool {
    moderation.product_id == product.id
}
