//! Core lifecycle types.
//!
//! This module contains the value types every lifecycle is built from:
//! - State and event identifiers via the `State` and `Event` traits
//! - Guard predicates and side-effect hooks
//! - Immutable transition history

mod event;
mod guard;
mod history;
mod hook;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use hook::Hook;
pub use state::State;
