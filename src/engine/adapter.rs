//! Binding between a concrete record and the engine.

use crate::core::{Event, State, StateTransition};

/// Accessor layer over a record's current state.
///
/// Implementors expose where the state lives; they do not check whether a
/// change is legal. The engine only writes the state after a transition has
/// been selected and its hook has run.
///
/// # Example
///
/// ```rust
/// use lifecycle::engine::Stateful;
/// use lifecycle::{event_enum, state_enum};
///
/// state_enum! {
///     pub enum Review {
///         Pending,
///         Approved,
///     }
/// }
///
/// event_enum! {
///     pub enum ReviewEvent {
///         Approve,
///     }
/// }
///
/// struct Entry {
///     state: Review,
/// }
///
/// impl Stateful<Review, ReviewEvent> for Entry {
///     fn current_state(&self) -> &Review {
///         &self.state
///     }
///
///     fn set_current_state(&mut self, state: Review) {
///         self.state = state;
///     }
/// }
/// ```
pub trait Stateful<S: State, Ev: Event> {
    fn current_state(&self) -> &S;

    fn set_current_state(&mut self, state: S);

    /// Called once per committed transition, after the new state is set.
    ///
    /// Default implementation discards the record.
    fn record_transition(&mut self, _transition: StateTransition<S, Ev>) {}
}
