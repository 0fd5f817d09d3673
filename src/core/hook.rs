//! Side-effect hooks run on successful transitions.

use std::sync::Arc;

/// Side effect executed once when a transition succeeds.
///
/// The hook runs after the transition has been selected and before the new
/// state is written back, so it sees the entity still in its source state.
/// It may mutate the entity and the context (typically a related record).
pub struct Hook<En, C = ()> {
    action: Arc<dyn Fn(&mut En, &mut C) + Send + Sync>,
}

impl<En, C> Hook<En, C> {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut En, &mut C) + Send + Sync + 'static,
    {
        Hook {
            action: Arc::new(action),
        }
    }

    /// Run the hook against the entity and context.
    pub fn run(&self, entity: &mut En, context: &mut C) {
        (self.action)(entity, context)
    }
}

impl<En, C> Clone for Hook<En, C> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}
