//! Registration-time errors.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors raised while declaring states and transitions.
///
/// These are startup faults: a lifecycle that fails to build must never be
/// used to fire events.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("No states registered. A lifecycle needs at least one state")]
    EmptyStateSet,

    #[error("State '{state}' is registered more than once")]
    DuplicateState { state: String },

    #[error("Initial state '{state}' is not in the registered state set")]
    UnknownInitialState { state: String },

    #[error("Transition for event '{event}' has no source states")]
    EmptySourceSet { event: String },

    #[error("Transition for event '{event}' lists source state '{state}' more than once")]
    DuplicateSource { event: String, state: String },

    #[error("Transition for event '{event}' references unregistered state '{state}'")]
    UnknownState { event: String, state: String },

    #[error("Event '{event}' has two unguarded transitions from state '{state}'")]
    AmbiguousTransition { event: String, state: String },

    #[error(
        "Transition for event '{event}' from state '{state}' follows an unguarded transition and can never be selected"
    )]
    UnreachableTransition { event: String, state: String },

    #[error("Lifecycle definition incomplete: {0}")]
    Incomplete(#[from] BuildError),

    #[error("{} configuration violations: {}", .0.len(), list(.0))]
    Violations(Vec<ConfigurationError>),
}

fn list(violations: &[ConfigurationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_display_every_entry() {
        let error = ConfigurationError::Violations(vec![
            ConfigurationError::EmptySourceSet {
                event: "rescue".to_string(),
            },
            ConfigurationError::UnknownState {
                event: "rescue".to_string(),
                state: "lost".to_string(),
            },
        ]);

        let message = error.to_string();
        assert!(message.starts_with("2 configuration violations"));
        assert!(message.contains("no source states"));
        assert!(message.contains("'lost'"));
    }

    #[test]
    fn build_errors_convert() {
        let error: ConfigurationError = BuildError::MissingInitialState.into();
        assert!(matches!(
            error,
            ConfigurationError::Incomplete(BuildError::MissingInitialState)
        ));
    }
}
