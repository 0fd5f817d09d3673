//! Lifecycle engine that fires events at entities.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::engine::adapter::Stateful;
use crate::engine::rejection::Rejection;
use crate::table::{Transition, TransitionTable};
use chrono::Utc;
use tracing::debug;

/// Engine over the transition table of one entity type.
///
/// The lifecycle never owns entities. Callers hand in the entity (and any
/// related record as context) for the duration of a single `fire`; the
/// `&mut` borrow guarantees at most one `fire` in flight per entity.
pub struct Lifecycle<S: State, Ev: Event, En, C = ()> {
    table: TransitionTable<S, Ev, En, C>,
}

impl<S: State, Ev: Event, En, C> Lifecycle<S, Ev, En, C>
where
    En: Stateful<S, Ev>,
{
    pub fn new(table: TransitionTable<S, Ev, En, C>) -> Self {
        Self { table }
    }

    /// State every new entity must start in (pure)
    pub fn initial_state(&self) -> &S {
        self.table.initial_state()
    }

    pub fn table(&self) -> &TransitionTable<S, Ev, En, C> {
        &self.table
    }

    /// Select the transition `event` would take (pure).
    ///
    /// Candidates are tried in registration order and the first whose guard
    /// passes wins. Nothing is mutated, so this is safe to call repeatedly.
    pub fn select(
        &self,
        entity: &En,
        event: &Ev,
        context: &C,
    ) -> Result<&Transition<S, Ev, En, C>, Rejection> {
        let current = entity.current_state();
        let candidates = self.table.resolve(event, current);

        if candidates.is_empty() {
            return Err(Rejection::NoSuchTransition {
                event: event.name().to_string(),
                state: current.name().to_string(),
            });
        }

        candidates
            .into_iter()
            .find(|t| t.is_eligible(entity, context))
            .ok_or_else(|| Rejection::GuardFailed {
                event: event.name().to_string(),
                state: current.name().to_string(),
            })
    }

    /// Check whether `event` would currently succeed (pure)
    pub fn can_fire(&self, entity: &En, event: &Ev, context: &C) -> bool {
        self.select(entity, event, context).is_ok()
    }

    /// Events that would currently succeed, in registration order (pure)
    pub fn permitted_events(&self, entity: &En, context: &C) -> Vec<Ev> {
        self.table
            .events()
            .into_iter()
            .filter(|event| self.can_fire(entity, event, context))
            .cloned()
            .collect()
    }

    /// Fire `event` at `entity` with a context for guards and hooks.
    ///
    /// On success the transition's hook runs once, the new state is written
    /// through the adapter, the transition is recorded, and the new state is
    /// returned. On rejection neither the entity nor the context is touched.
    pub fn fire_with(&self, entity: &mut En, event: &Ev, context: &mut C) -> Result<S, Rejection> {
        let transition = match self.select(entity, event, context) {
            Ok(transition) => transition,
            Err(rejection) => {
                debug!(
                    event = rejection.event(),
                    state = rejection.state(),
                    guard_failed = rejection.is_guard_failure(),
                    "event rejected"
                );
                return Err(rejection);
            }
        };

        let from = entity.current_state().clone();
        if let Some(hook) = &transition.on_success {
            hook.run(entity, context);
        }
        entity.set_current_state(transition.to.clone());
        entity.record_transition(StateTransition {
            from: from.clone(),
            to: transition.to.clone(),
            event: event.clone(),
            timestamp: Utc::now(),
        });

        debug!(
            event = event.name(),
            from = from.name(),
            to = transition.to.name(),
            "transition committed"
        );
        Ok(transition.to.clone())
    }

    /// Capture an entity's position and history for later resumption.
    pub fn checkpoint(&self, entity: &En, history: &StateHistory<S, Ev>) -> Checkpoint<S, Ev> {
        Checkpoint::new(
            self.initial_state().clone(),
            entity.current_state().clone(),
            history.clone(),
        )
    }

    /// Validate a checkpoint against this lifecycle and return the state to
    /// resume from.
    ///
    /// Every recorded step must be a declared transition. Guards are not
    /// re-run; they held against the entity as it was at the time.
    pub fn restore(&self, checkpoint: &Checkpoint<S, Ev>) -> Result<S, CheckpointError> {
        checkpoint.validate()?;

        let registry = self.table.registry();
        if checkpoint.initial_state != *registry.initial() {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint starts in '{}' but the lifecycle starts in '{}'",
                checkpoint.initial_state.name(),
                registry.initial().name()
            )));
        }
        if !registry.contains(&checkpoint.current_state) {
            return Err(CheckpointError::ValidationFailed(format!(
                "state '{}' is not registered",
                checkpoint.current_state.name()
            )));
        }
        for step in checkpoint.history.transitions() {
            let declared = self
                .table
                .resolve(&step.event, &step.from)
                .iter()
                .any(|t| t.to == step.to);
            if !declared {
                return Err(CheckpointError::ValidationFailed(format!(
                    "no '{}' transition from '{}' to '{}'",
                    step.event.name(),
                    step.from.name(),
                    step.to.name()
                )));
            }
        }

        debug!(
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            "restored checkpoint"
        );
        Ok(checkpoint.current_state.clone())
    }
}

impl<S: State, Ev: Event, En> Lifecycle<S, Ev, En, ()>
where
    En: Stateful<S, Ev>,
{
    /// Fire `event` at `entity` for lifecycles that need no context.
    pub fn fire(&self, entity: &mut En, event: &Ev) -> Result<S, Rejection> {
        self.fire_with(entity, event, &mut ())
    }
}
