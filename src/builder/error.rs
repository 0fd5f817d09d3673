//! Build errors for lifecycle and transition builders.

use thiserror::Error;

/// Required pieces missing from a builder.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition source state not specified. Call .from(state) or .from_any(states)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
