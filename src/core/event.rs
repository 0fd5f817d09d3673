//! Event identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named trigger that may move an entity from one state to another.
///
/// Events carry no payload. Data a guard or hook needs travels in the
/// entity itself or in the context passed to [`Lifecycle::fire_with`].
///
/// [`Lifecycle::fire_with`]: crate::engine::Lifecycle::fire_with
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
