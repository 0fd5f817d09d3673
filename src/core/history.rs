//! Transition history tracking.
//!
//! Every committed transition can be recorded as an immutable value. The
//! history is append-only: `record` returns a new history and leaves the
//! original untouched.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use lifecycle::core::StateTransition;
/// use lifecycle::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Review {
///         Pending,
///         Approved,
///     }
/// }
///
/// event_enum! {
///     enum ReviewEvent {
///         Approve,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Review::Pending,
///     to: Review::Approved,
///     event: ReviewEvent::Approve,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Review::Approved);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, Ev: Event> {
    /// Source state
    pub from: S,
    /// Target state
    pub to: S,
    /// The event that caused the transition
    pub event: Ev,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// # Example
///
/// ```rust
/// use lifecycle::core::{StateHistory, StateTransition};
/// use lifecycle::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Dog {
///         Sheltered,
///         Rescued,
///         Vetted,
///     }
/// }
///
/// event_enum! {
///     enum DogEvent {
///         Rescue,
///         Vet,
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Dog::Sheltered,
///         to: Dog::Rescued,
///         event: DogEvent::Rescue,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Dog::Rescued,
///         to: Dog::Vetted,
///         event: DogEvent::Vet,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Dog::Sheltered, &Dog::Rescued, &Dog::Vetted]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, Ev: Event> {
    transitions: Vec<StateTransition<S, Ev>>,
}

impl<S: State, Ev: Event> Default for StateHistory<S, Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, Ev: Event> StateHistory<S, Ev> {
    /// An empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, leaving `self` untouched.
    pub fn record(&self, transition: StateTransition<S, Ev>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States the entity has passed through, oldest first.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Check that every transition starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.transitions
            .windows(2)
            .all(|pair| pair[0].to == pair[1].from)
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S, Ev>> {
        self.transitions.last()
    }

    /// Transitions in commit order.
    pub fn transitions(&self) -> &[StateTransition<S, Ev>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Pending,
        Approved,
        Rejected,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Pending => "pending",
                Self::Approved => "approved",
                Self::Rejected => "rejected",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Approved | Self::Rejected)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Approve,
        Reject,
        Reopen,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Approve => "approve",
                Self::Reject => "reject",
                Self::Reopen => "reopen",
            }
        }
    }

    fn transition(from: TestState, to: TestState, event: TestEvent) -> StateTransition<TestState, TestEvent> {
        StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, TestEvent> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_leaves_original_history_alone() {
        let history = StateHistory::new();
        let new_history = history.record(transition(
            TestState::Pending,
            TestState::Approved,
            TestEvent::Approve,
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_follows_reopened_review() {
        let history = StateHistory::new()
            .record(transition(TestState::Pending, TestState::Rejected, TestEvent::Reject))
            .record(transition(TestState::Rejected, TestState::Pending, TestEvent::Reopen))
            .record(transition(TestState::Pending, TestState::Approved, TestEvent::Approve));

        let path = history.get_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &TestState::Pending);
        assert_eq!(path[1], &TestState::Rejected);
        assert_eq!(path[2], &TestState::Pending);
        assert_eq!(path[3], &TestState::Approved);
        assert_eq!(history.last().map(|t| &t.event), Some(&TestEvent::Approve));
    }

    #[test]
    fn contiguity_detects_gaps() {
        let contiguous = StateHistory::new()
            .record(transition(TestState::Pending, TestState::Rejected, TestEvent::Reject))
            .record(transition(TestState::Rejected, TestState::Pending, TestEvent::Reopen));
        assert!(contiguous.is_contiguous());

        let broken = StateHistory::new()
            .record(transition(TestState::Pending, TestState::Approved, TestEvent::Approve))
            .record(transition(TestState::Rejected, TestState::Pending, TestEvent::Reopen));
        assert!(!broken.is_contiguous());
    }

    #[test]
    fn duration_spans_first_to_last_commit() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Pending,
                to: TestState::Rejected,
                event: TestEvent::Reject,
                timestamp: start,
            })
            .record(StateTransition {
                from: TestState::Rejected,
                to: TestState::Pending,
                event: TestEvent::Reopen,
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_round_trips_through_json() {
        let history = StateHistory::new().record(transition(
            TestState::Pending,
            TestState::Approved,
            TestEvent::Approve,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, TestEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].event, TestEvent::Approve);
    }
}
