//! Declared transitions.

use crate::core::{Event, Guard, Hook, State};

/// A declared mapping from (event, source states) to a target state.
///
/// The guard gates eligibility; the hook runs once when the transition
/// commits. Both are optional.
pub struct Transition<S: State, Ev: Event, En, C = ()> {
    pub event: Ev,
    pub from: Vec<S>,
    pub to: S,
    pub guard: Option<Guard<En, C>>,
    pub on_success: Option<Hook<En, C>>,
}

impl<S: State, Ev: Event, En, C> Transition<S, Ev, En, C> {
    /// Check if this transition is declared for `event` from `current`.
    pub fn applies_to(&self, event: &Ev, current: &S) -> bool {
        self.event == *event && self.from.contains(current)
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Check the guard against the entity (pure). Unguarded transitions
    /// are always eligible.
    pub fn is_eligible(&self, entity: &En, context: &C) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| guard.check(entity, context))
    }

    /// Source states shared with another transition, each listed once.
    pub fn overlap<'a>(&'a self, other: &Transition<S, Ev, En, C>) -> Vec<&'a S> {
        let mut shared: Vec<&'a S> = Vec::new();
        for state in self.from.iter().filter(|state| other.from.contains(*state)) {
            if !shared.contains(&state) {
                shared.push(state);
            }
        }
        shared
    }
}

impl<S: State, Ev: Event, En, C> Clone for Transition<S, Ev, En, C> {
    fn clone(&self) -> Self {
        Self {
            event: self.event.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            on_success: self.on_success.clone(),
        }
    }
}
