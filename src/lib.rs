//! Lifecycle: a finite-state lifecycle engine for domain records
//!
//! Records such as a moderated listing or a sheltered animal move through a
//! fixed set of stages. Lifecycle keeps the rules for those moves in an
//! explicit, inspectable transition table instead of mixing them into the
//! record type, and fires events at records it does not own.
//!
//! # Core Concepts
//!
//! - **State / Event**: enumerated identifiers via the `State` and `Event` traits
//! - **Guards**: pure predicates over the entity and an explicit context
//! - **Hooks**: side effects run exactly once when a transition commits
//! - **Transition table**: validated at registration, resolved in
//!   registration order (first eligible transition wins)
//! - **Rejections**: "not valid right now" is an ordinary `Err`, never a panic
//!
//! # Example
//!
//! ```rust
//! use lifecycle::builder::{LifecycleBuilder, TransitionBuilder};
//! use lifecycle::engine::{Rejection, Stateful};
//! use lifecycle::{event_enum, state_enum};
//!
//! state_enum! {
//!     pub enum DogState {
//!         Rescued,
//!         Vetted,
//!     }
//! }
//!
//! event_enum! {
//!     pub enum DogEvent {
//!         Vet,
//!     }
//! }
//!
//! struct Dog {
//!     state: DogState,
//!     vettings: usize,
//! }
//!
//! impl Stateful<DogState, DogEvent> for Dog {
//!     fn current_state(&self) -> &DogState {
//!         &self.state
//!     }
//!
//!     fn set_current_state(&mut self, state: DogState) {
//!         self.state = state;
//!     }
//! }
//!
//! let lifecycle = LifecycleBuilder::new()
//!     .states([DogState::Rescued, DogState::Vetted])
//!     .initial(DogState::Rescued)
//!     .transition(
//!         TransitionBuilder::new()
//!             .on(DogEvent::Vet)
//!             .from(DogState::Rescued)
//!             .to(DogState::Vetted)
//!             .when(|dog: &Dog, _: &()| dog.vettings > 0),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut dog = Dog { state: DogState::Rescued, vettings: 0 };
//! assert!(matches!(
//!     lifecycle.fire(&mut dog, &DogEvent::Vet),
//!     Err(Rejection::GuardFailed { .. })
//! ));
//!
//! dog.vettings += 1;
//! assert_eq!(lifecycle.fire(&mut dog, &DogEvent::Vet), Ok(DogState::Vetted));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod scenarios;
pub mod table;
pub mod versioning;

// Re-export commonly used types
pub use builder::{BuildError, LifecycleBuilder, TransitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Event, Guard, Hook, State, StateHistory, StateTransition};
pub use engine::{Lifecycle, Rejection, Stateful};
pub use table::{ConfigurationError, StateRegistry, Transition, TransitionTable};
pub use versioning::{Revision, VersionError, Versioned};
