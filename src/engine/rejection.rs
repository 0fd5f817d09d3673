//! Runtime rejections.

use thiserror::Error;

/// Why an event did not move an entity.
///
/// Rejections are ordinary outcomes: the entity is left exactly as it was,
/// and the caller decides whether to fix the precondition and fire again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Event '{event}' is not valid from state '{state}'")]
    NoSuchTransition { event: String, state: String },

    #[error("Guard blocked event '{event}' from state '{state}'")]
    GuardFailed { event: String, state: String },
}

impl Rejection {
    pub fn event(&self) -> &str {
        match self {
            Self::NoSuchTransition { event, .. } | Self::GuardFailed { event, .. } => event,
        }
    }

    /// State the entity was (and still is) in.
    pub fn state(&self) -> &str {
        match self {
            Self::NoSuchTransition { state, .. } | Self::GuardFailed { state, .. } => state,
        }
    }

    pub fn is_guard_failure(&self) -> bool {
        matches!(self, Self::GuardFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_event_and_state() {
        let rejection = Rejection::GuardFailed {
            event: "vet".to_string(),
            state: "rescued".to_string(),
        };

        assert_eq!(rejection.event(), "vet");
        assert_eq!(rejection.state(), "rescued");
        assert!(rejection.is_guard_failure());
    }

    #[test]
    fn display_names_event_and_state() {
        let rejection = Rejection::NoSuchTransition {
            event: "adopt".to_string(),
            state: "sheltered".to_string(),
        };

        assert_eq!(
            rejection.to_string(),
            "Event 'adopt' is not valid from state 'sheltered'"
        );
        assert!(!rejection.is_guard_failure());
    }
}
