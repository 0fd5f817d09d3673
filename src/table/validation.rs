//! Registration checks for incoming transitions.
//!
//! Every rule is evaluated and the failures are accumulated with
//! stillwater's `Validation`, so a badly declared transition reports all of
//! its problems at once instead of one per startup attempt.

use crate::core::{Event, State};
use crate::table::error::ConfigurationError;
use crate::table::registry::StateRegistry;
use crate::table::transition::Transition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigurationError>>;

/// Validate `candidate` against the registry and the transitions already
/// in the table.
pub(crate) fn validate_transition<S: State, Ev: Event, En, C>(
    registry: &StateRegistry<S>,
    existing: &[Transition<S, Ev, En, C>],
    candidate: &Transition<S, Ev, En, C>,
) -> Check {
    let event = candidate.event.name();
    let mut checks: Vec<Check> = Vec::new();

    if candidate.from.is_empty() {
        checks.push(Validation::fail(ConfigurationError::EmptySourceSet {
            event: event.to_string(),
        }));
    }

    for (index, state) in candidate.from.iter().enumerate() {
        if candidate.from[..index].contains(state) {
            checks.push(Validation::fail(ConfigurationError::DuplicateSource {
                event: event.to_string(),
                state: state.name().to_string(),
            }));
        } else {
            checks.push(registered(registry, event, state));
        }
    }
    checks.push(registered(registry, event, &candidate.to));

    for earlier in existing.iter().filter(|t| t.event == candidate.event) {
        for state in candidate.overlap(earlier) {
            checks.push(disambiguated(earlier, candidate, event, state));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn registered<S: State>(registry: &StateRegistry<S>, event: &str, state: &S) -> Check {
    if registry.contains(state) {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::UnknownState {
            event: event.to_string(),
            state: state.name().to_string(),
        })
    }
}

/// An unguarded transition is a catch-all for its overlap: a second
/// catch-all is ambiguous, and anything declared after one is unreachable.
fn disambiguated<S: State, Ev: Event, En, C>(
    earlier: &Transition<S, Ev, En, C>,
    candidate: &Transition<S, Ev, En, C>,
    event: &str,
    state: &S,
) -> Check {
    match (earlier.is_guarded(), candidate.is_guarded()) {
        (false, false) => Validation::fail(ConfigurationError::AmbiguousTransition {
            event: event.to_string(),
            state: state.name().to_string(),
        }),
        (false, true) => Validation::fail(ConfigurationError::UnreachableTransition {
            event: event.to_string(),
            state: state.name().to_string(),
        }),
        _ => Validation::success(()),
    }
}

/// Collapse accumulated violations into a single error.
pub(crate) fn into_result(validation: Check) -> Result<(), ConfigurationError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let mut violations: Vec<ConfigurationError> = errors.iter().cloned().collect();
            if violations.len() == 1 {
                Err(violations.remove(0))
            } else {
                Err(ConfigurationError::Violations(violations))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Pending,
        Approved,
        Rejected,
        Archived,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Pending => "pending",
                Self::Approved => "approved",
                Self::Rejected => "rejected",
                Self::Archived => "archived",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Approve,
        Reject,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Approve => "approve",
                Self::Reject => "reject",
            }
        }
    }

    struct Entry {
        flagged: bool,
    }

    type TestTransition = Transition<TestState, TestEvent, Entry>;

    fn registry() -> StateRegistry<TestState> {
        StateRegistry::register(
            [TestState::Pending, TestState::Approved, TestState::Rejected],
            TestState::Pending,
        )
        .unwrap()
    }

    fn transition(event: TestEvent, from: Vec<TestState>, to: TestState) -> TestTransition {
        Transition {
            event,
            from,
            to,
            guard: None,
            on_success: None,
        }
    }

    fn guarded(event: TestEvent, from: Vec<TestState>, to: TestState) -> TestTransition {
        Transition {
            guard: Some(Guard::on_entity(|entry: &Entry| !entry.flagged)),
            ..transition(event, from, to)
        }
    }

    #[test]
    fn well_formed_transition_passes() {
        let candidate = transition(TestEvent::Approve, vec![TestState::Pending], TestState::Approved);
        let result = validate_transition(&registry(), &[], &candidate);
        assert!(result.is_success());
    }

    #[test]
    fn unknown_states_are_accumulated() {
        let candidate = transition(TestEvent::Approve, vec![TestState::Archived], TestState::Archived);

        match validate_transition(&registry(), &[], &candidate) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| matches!(e, ConfigurationError::UnknownState { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_source_set_fails() {
        let candidate = transition(TestEvent::Approve, vec![], TestState::Approved);
        let result = into_result(validate_transition(&registry(), &[], &candidate));

        assert_eq!(
            result,
            Err(ConfigurationError::EmptySourceSet {
                event: "approve".to_string()
            })
        );
    }

    #[test]
    fn two_unguarded_overlapping_transitions_are_ambiguous() {
        let existing = vec![transition(
            TestEvent::Approve,
            vec![TestState::Pending, TestState::Rejected],
            TestState::Approved,
        )];
        let candidate = transition(TestEvent::Approve, vec![TestState::Rejected], TestState::Pending);

        let result = into_result(validate_transition(&registry(), &existing, &candidate));
        assert_eq!(
            result,
            Err(ConfigurationError::AmbiguousTransition {
                event: "approve".to_string(),
                state: "rejected".to_string(),
            })
        );
    }

    #[test]
    fn guarded_after_catch_all_is_unreachable() {
        let existing = vec![transition(TestEvent::Approve, vec![TestState::Pending], TestState::Approved)];
        let candidate = guarded(TestEvent::Approve, vec![TestState::Pending], TestState::Rejected);

        let result = into_result(validate_transition(&registry(), &existing, &candidate));
        assert!(matches!(
            result,
            Err(ConfigurationError::UnreachableTransition { .. })
        ));
    }

    #[test]
    fn catch_all_after_guarded_is_allowed() {
        let existing = vec![guarded(TestEvent::Approve, vec![TestState::Pending], TestState::Approved)];
        let candidate = transition(TestEvent::Approve, vec![TestState::Pending], TestState::Rejected);

        assert!(validate_transition(&registry(), &existing, &candidate).is_success());
    }

    #[test]
    fn overlap_only_matters_for_the_same_event() {
        let existing = vec![transition(TestEvent::Approve, vec![TestState::Pending], TestState::Approved)];
        let candidate = transition(TestEvent::Reject, vec![TestState::Pending], TestState::Rejected);

        assert!(validate_transition(&registry(), &existing, &candidate).is_success());
    }

    #[test]
    fn repeated_source_is_reported_once() {
        let candidate = transition(
            TestEvent::Approve,
            vec![TestState::Pending, TestState::Pending],
            TestState::Approved,
        );

        let result = into_result(validate_transition(&registry(), &[], &candidate));
        assert_eq!(
            result,
            Err(ConfigurationError::DuplicateSource {
                event: "approve".to_string(),
                state: "pending".to_string(),
            })
        );
    }

    #[test]
    fn repeated_source_does_not_double_count_conflicts() {
        let existing = vec![transition(TestEvent::Approve, vec![TestState::Pending], TestState::Approved)];
        let candidate = transition(
            TestEvent::Approve,
            vec![TestState::Pending, TestState::Pending],
            TestState::Rejected,
        );

        match into_result(validate_transition(&registry(), &existing, &candidate)) {
            Err(ConfigurationError::Violations(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        ConfigurationError::DuplicateSource {
                            event: "approve".to_string(),
                            state: "pending".to_string(),
                        },
                        ConfigurationError::AmbiguousTransition {
                            event: "approve".to_string(),
                            state: "pending".to_string(),
                        },
                    ]
                );
            }
            other => panic!("Expected grouped violations, got {:?}", other),
        }
    }

    #[test]
    fn multiple_violations_are_grouped() {
        let existing = vec![transition(TestEvent::Approve, vec![TestState::Pending], TestState::Approved)];
        let candidate = transition(TestEvent::Approve, vec![TestState::Pending], TestState::Archived);

        match into_result(validate_transition(&registry(), &existing, &candidate)) {
            Err(ConfigurationError::Violations(violations)) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("Expected grouped violations, got {:?}", other),
        }
    }
}
