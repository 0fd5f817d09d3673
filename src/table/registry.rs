//! The fixed state set of an entity type.

use crate::core::State;
use crate::table::error::ConfigurationError;

/// Declares the valid states of an entity type and which one is initial.
///
/// # Example
///
/// ```rust
/// use lifecycle::state_enum;
/// use lifecycle::table::StateRegistry;
///
/// state_enum! {
///     enum Review {
///         Pending,
///         Approved,
///         Rejected,
///     }
///     final: [Approved, Rejected]
/// }
///
/// let registry = StateRegistry::register(
///     [Review::Pending, Review::Approved, Review::Rejected],
///     Review::Pending,
/// )
/// .unwrap();
///
/// assert_eq!(registry.initial(), &Review::Pending);
/// assert!(registry.contains(&Review::Rejected));
/// ```
#[derive(Clone, Debug)]
pub struct StateRegistry<S: State> {
    states: Vec<S>,
    initial: S,
}

impl<S: State> StateRegistry<S> {
    /// Register a state set with its initial state.
    pub fn register<I>(states: I, initial: S) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut registered: Vec<S> = Vec::new();
        for state in states {
            if registered.contains(&state) {
                return Err(ConfigurationError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
            registered.push(state);
        }

        if registered.is_empty() {
            return Err(ConfigurationError::EmptyStateSet);
        }

        if !registered.contains(&initial) {
            return Err(ConfigurationError::UnknownInitialState {
                state: initial.name().to_string(),
            });
        }

        Ok(Self {
            states: registered,
            initial,
        })
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Registered states in declaration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }
}
