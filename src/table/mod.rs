//! State registry and transition table.
//!
//! A table is assembled once per entity type and is immutable afterwards.
//! All checks happen at registration time, so an ambiguous or
//! out-of-domain declaration fails at startup rather than when an event
//! is fired.
//!
//! # Example
//!
//! ```rust
//! use lifecycle::table::{StateRegistry, Transition, TransitionTable};
//! use lifecycle::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Review {
//!         Pending,
//!         Approved,
//!         Rejected,
//!     }
//!     final: [Approved, Rejected]
//! }
//!
//! event_enum! {
//!     enum ReviewEvent {
//!         Approve,
//!         Reject,
//!     }
//! }
//!
//! struct Entry;
//!
//! let registry = StateRegistry::register(
//!     [Review::Pending, Review::Approved, Review::Rejected],
//!     Review::Pending,
//! )
//! .unwrap();
//!
//! let mut table: TransitionTable<Review, ReviewEvent, Entry> = TransitionTable::new(registry);
//! table
//!     .add_transition(Transition {
//!         event: ReviewEvent::Approve,
//!         from: vec![Review::Pending],
//!         to: Review::Approved,
//!         guard: None,
//!         on_success: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(table.resolve(&ReviewEvent::Approve, &Review::Pending).len(), 1);
//! assert!(table.resolve(&ReviewEvent::Reject, &Review::Pending).is_empty());
//! ```

pub mod error;
pub mod registry;
pub mod transition;
mod validation;

pub use error::ConfigurationError;
pub use registry::StateRegistry;
pub use transition::Transition;

use crate::core::{Event, State};
use tracing::debug;

/// Transitions of one entity type, in registration order.
pub struct TransitionTable<S: State, Ev: Event, En, C = ()> {
    registry: StateRegistry<S>,
    transitions: Vec<Transition<S, Ev, En, C>>,
}

impl<S: State, Ev: Event, En, C> TransitionTable<S, Ev, En, C> {
    /// Create an empty table over a registered state set.
    pub fn new(registry: StateRegistry<S>) -> Self {
        Self {
            registry,
            transitions: Vec::new(),
        }
    }

    /// Register a transition.
    ///
    /// Fails when a source or target state is not registered, when the
    /// source set is empty, or when the transition cannot be told apart
    /// from an earlier one for the same event. The table is unchanged on
    /// failure.
    pub fn add_transition(
        &mut self,
        transition: Transition<S, Ev, En, C>,
    ) -> Result<(), ConfigurationError> {
        validation::into_result(validation::validate_transition(
            &self.registry,
            &self.transitions,
            &transition,
        ))?;

        debug!(
            event = transition.event.name(),
            to = transition.to.name(),
            sources = transition.from.len(),
            guarded = transition.is_guarded(),
            "registered transition"
        );
        self.transitions.push(transition);
        Ok(())
    }

    /// Candidate transitions for `event` from `current`, in registration
    /// order. The engine selects the first one whose guard passes.
    pub fn resolve(&self, event: &Ev, current: &S) -> Vec<&Transition<S, Ev, En, C>> {
        self.transitions
            .iter()
            .filter(|t| t.applies_to(event, current))
            .collect()
    }

    /// Distinct events, in the order they were first registered.
    pub fn events(&self) -> Vec<&Ev> {
        let mut events: Vec<&Ev> = Vec::new();
        for transition in &self.transitions {
            if !events.contains(&&transition.event) {
                events.push(&transition.event);
            }
        }
        events
    }

    pub fn transitions(&self) -> &[Transition<S, Ev, En, C>] {
        &self.transitions
    }

    pub fn registry(&self) -> &StateRegistry<S> {
        &self.registry
    }

    pub fn initial_state(&self) -> &S {
        self.registry.initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Vetted,
        Fostered,
        Hospiced,
        Adopted,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Vetted => "vetted",
                Self::Fostered => "fostered",
                Self::Hospiced => "hospiced",
                Self::Adopted => "adopted",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Foster,
        Hospice,
        Adopt,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Foster => "foster",
                Self::Hospice => "hospice",
                Self::Adopt => "adopt",
            }
        }
    }

    struct Dog {
        terminal: bool,
    }

    fn table() -> TransitionTable<TestState, TestEvent, Dog> {
        let registry = StateRegistry::register(
            [
                TestState::Vetted,
                TestState::Fostered,
                TestState::Hospiced,
                TestState::Adopted,
            ],
            TestState::Vetted,
        )
        .unwrap();
        TransitionTable::new(registry)
    }

    fn transition(
        event: TestEvent,
        from: Vec<TestState>,
        to: TestState,
        guard: Option<Guard<Dog>>,
    ) -> Transition<TestState, TestEvent, Dog> {
        Transition {
            event,
            from,
            to,
            guard,
            on_success: None,
        }
    }

    #[test]
    fn resolve_preserves_registration_order() {
        let mut table = table();
        table
            .add_transition(transition(
                TestEvent::Adopt,
                vec![TestState::Fostered],
                TestState::Hospiced,
                Some(Guard::on_entity(|dog: &Dog| dog.terminal)),
            ))
            .unwrap();
        table
            .add_transition(transition(
                TestEvent::Adopt,
                vec![TestState::Vetted, TestState::Fostered],
                TestState::Adopted,
                None,
            ))
            .unwrap();

        let candidates = table.resolve(&TestEvent::Adopt, &TestState::Fostered);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].to, TestState::Hospiced);
        assert_eq!(candidates[1].to, TestState::Adopted);

        let candidates = table.resolve(&TestEvent::Adopt, &TestState::Vetted);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].to, TestState::Adopted);
    }

    #[test]
    fn resolve_is_empty_for_uncovered_pairs() {
        let mut table = table();
        table
            .add_transition(transition(
                TestEvent::Foster,
                vec![TestState::Vetted],
                TestState::Fostered,
                None,
            ))
            .unwrap();

        assert!(table.resolve(&TestEvent::Foster, &TestState::Adopted).is_empty());
        assert!(table.resolve(&TestEvent::Hospice, &TestState::Vetted).is_empty());
    }

    #[test]
    fn rejected_transition_leaves_table_unchanged() {
        let mut table = table();
        table
            .add_transition(transition(
                TestEvent::Foster,
                vec![TestState::Vetted],
                TestState::Fostered,
                None,
            ))
            .unwrap();

        let result = table.add_transition(transition(
            TestEvent::Foster,
            vec![TestState::Vetted],
            TestState::Hospiced,
            None,
        ));

        assert!(matches!(
            result,
            Err(ConfigurationError::AmbiguousTransition { .. })
        ));
        assert_eq!(table.transitions().len(), 1);
    }

    #[test]
    fn events_are_distinct_and_ordered() {
        let mut table = table();
        table
            .add_transition(transition(
                TestEvent::Hospice,
                vec![TestState::Vetted],
                TestState::Hospiced,
                None,
            ))
            .unwrap();
        table
            .add_transition(transition(
                TestEvent::Foster,
                vec![TestState::Vetted],
                TestState::Fostered,
                None,
            ))
            .unwrap();
        table
            .add_transition(transition(
                TestEvent::Hospice,
                vec![TestState::Fostered],
                TestState::Hospiced,
                None,
            ))
            .unwrap();

        assert_eq!(table.events(), vec![&TestEvent::Hospice, &TestEvent::Foster]);
        assert_eq!(table.initial_state(), &TestState::Vetted);
    }
}
