//! Builder for constructing lifecycles.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::engine::{Lifecycle, Stateful};
use crate::table::{ConfigurationError, StateRegistry, Transition, TransitionTable};

/// Builder for declaring a lifecycle with a fluent API.
///
/// Nothing is validated until [`build`](Self::build), which registers the
/// states and then every transition in order, failing on the first
/// transition that does not fit.
pub struct LifecycleBuilder<S: State, Ev: Event, En, C = ()> {
    states: Vec<S>,
    initial: Option<S>,
    transitions: Vec<Transition<S, Ev, En, C>>,
}

impl<S: State, Ev: Event, En, C> LifecycleBuilder<S, Ev, En, C>
where
    En: Stateful<S, Ev>,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Declare the state set.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder is missing required fields.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, Ev, En, C>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, Ev, En, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, Ev, En, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the lifecycle.
    pub fn build(self) -> Result<Lifecycle<S, Ev, En, C>, ConfigurationError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions.into());
        }

        let registry = StateRegistry::register(self.states, initial)?;
        let mut table = TransitionTable::new(registry);
        for transition in self.transitions {
            table.add_transition(transition)?;
        }

        Ok(Lifecycle::new(table))
    }
}

impl<S: State, Ev: Event, En, C> Default for LifecycleBuilder<S, Ev, En, C>
where
    En: Stateful<S, Ev>,
{
    fn default() -> Self {
        Self::new()
    }
}
