//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, Hook, State};
use crate::table::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, Ev: Event, En, C = ()> {
    event: Option<Ev>,
    from: Vec<S>,
    to: Option<S>,
    guard: Option<Guard<En, C>>,
    on_success: Option<Hook<En, C>>,
}

impl<S: State, Ev: Event, En, C> TransitionBuilder<S, Ev, En, C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            from: Vec::new(),
            to: None,
            guard: None,
            on_success: None,
        }
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: Ev) -> Self {
        self.event = Some(event);
        self
    }

    /// Add a source state. May be called repeatedly.
    pub fn from(mut self, state: S) -> Self {
        self.from.push(state);
        self
    }

    /// Add several source states.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.from.extend(states);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<En, C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure over entity and context (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&En, &C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add a hook run once when the transition commits (optional).
    pub fn on_success<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut En, &mut C) + Send + Sync + 'static,
    {
        self.on_success = Some(Hook::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, Ev, En, C>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            event,
            from: self.from,
            to,
            guard: self.guard,
            on_success: self.on_success,
        })
    }
}

impl<S: State, Ev: Event, En, C> Default for TransitionBuilder<S, Ev, En, C> {
    fn default() -> Self {
        Self::new()
    }
}
