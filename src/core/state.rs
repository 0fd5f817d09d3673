//! Lifecycle stage identifiers.
//!
//! Every entity type declares a fixed, enumerated set of stages. The engine
//! only ever compares, clones and names them, so the trait stays small.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// States are plain values: comparing them, naming them and asking whether
/// they are terminal never touches the entity that carries them.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: source sets are matched by equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states are checkpointed alongside history
///
/// # Example
///
/// ```rust
/// use lifecycle::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ReviewState {
///     Pending,
///     Approved,
///     Rejected,
/// }
///
/// impl State for ReviewState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "pending",
///             Self::Approved => "approved",
///             Self::Rejected => "rejected",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Approved | Self::Rejected)
///     }
/// }
///
/// assert_eq!(ReviewState::Pending.name(), "pending");
/// assert!(ReviewState::Rejected.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Nothing stops a table from declaring transitions out of a final
    /// state; the flag is informational for callers.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
