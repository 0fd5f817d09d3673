//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the entity and an explicit
//! context value. They never reach into a live data-store session: anything
//! a guard needs must be on the entity or handed in as context.

use std::sync::Arc;

/// Pure predicate that determines if a transition is eligible.
///
/// Guards are evaluated before a transition commits. A transition with no
/// guard is always eligible.
///
/// # Example
///
/// ```rust
/// use lifecycle::core::Guard;
///
/// struct Dog {
///     vettings: usize,
/// }
///
/// let has_been_vetted = Guard::<Dog>::on_entity(|dog| dog.vettings > 0);
///
/// assert!(!has_been_vetted.check(&Dog { vettings: 0 }, &()));
/// assert!(has_been_vetted.check(&Dog { vettings: 1 }, &()));
/// ```
pub struct Guard<En, C = ()> {
    predicate: Arc<dyn Fn(&En, &C) -> bool + Send + Sync>,
}

impl<En, C> Guard<En, C> {
    /// Create a guard from a predicate over the entity and context.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&En, &C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Create a guard that only looks at the entity.
    pub fn on_entity<F>(predicate: F) -> Self
    where
        F: Fn(&En) -> bool + Send + Sync + 'static,
    {
        Self::new(move |entity: &En, _context: &C| predicate(entity))
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, entity: &En, context: &C) -> bool {
        (self.predicate)(entity, context)
    }
}

impl<En, C> Clone for Guard<En, C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
