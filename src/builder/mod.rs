//! Builder API for declaring lifecycles.
//!
//! Fluent builders and macros for declaring states, events and transitions
//! with minimal boilerplate. All validation is deferred to
//! [`LifecycleBuilder::build`], which fails fast on the first bad
//! declaration.

pub mod error;
pub mod lifecycle;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use lifecycle::LifecycleBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, Guard, State};
use crate::table::Transition;

/// Create an unguarded transition with no hook.
///
/// # Example
///
/// ```
/// use lifecycle::builder::simple_transition;
/// use lifecycle::table::Transition;
/// use lifecycle::{event_enum, state_enum};
///
/// state_enum! {
///     enum Review {
///         Pending,
///         Approved,
///     }
///     final: [Approved]
/// }
///
/// event_enum! {
///     enum ReviewEvent {
///         Approve,
///     }
/// }
///
/// struct Entry;
///
/// let transition: Transition<Review, ReviewEvent, Entry> =
///     simple_transition(ReviewEvent::Approve, Review::Pending, Review::Approved);
/// assert!(!transition.is_guarded());
/// ```
pub fn simple_transition<S, Ev, En, C>(event: Ev, from: S, to: S) -> Transition<S, Ev, En, C>
where
    S: State,
    Ev: Event,
{
    Transition {
        event,
        from: vec![from],
        to,
        guard: None,
        on_success: None,
    }
}

/// Create a transition gated by a predicate over the entity.
pub fn guarded_transition<S, Ev, En, C, F>(
    event: Ev,
    from: S,
    to: S,
    guard: F,
) -> Transition<S, Ev, En, C>
where
    S: State,
    Ev: Event,
    F: Fn(&En) -> bool + Send + Sync + 'static,
{
    Transition {
        guard: Some(Guard::on_entity(guard)),
        ..simple_transition(event, from, to)
    }
}
