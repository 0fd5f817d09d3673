//! The lifecycle engine and its entity adapter.
//!
//! # Key Concepts
//!
//! - **Lifecycle**: owns an immutable transition table and fires events
//!   at entities it does not own
//! - **Stateful**: the accessor layer a record implements so the engine
//!   can read and write its current state
//! - **Rejection**: the structured, non-fatal outcome of an event that
//!   could not fire

mod adapter;
mod lifecycle;
mod rejection;

pub use adapter::Stateful;
pub use lifecycle::Lifecycle;
pub use rejection::Rejection;
