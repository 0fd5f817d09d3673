//! Reference entities wired to the engine.
//!
//! Each module declares its states and events, implements [`Stateful`] for
//! its record type, and exposes a `lifecycle()` constructor that validates
//! the transition table.
//!
//! [`Stateful`]: crate::engine::Stateful

pub mod moderation;
pub mod orders;
pub mod shelter;
