//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or resuming an entity's lifecycle position.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint as {format}: {reason}")]
    Encode {
        format: &'static str,
        reason: String,
    },

    #[error("Could not decode {format} checkpoint: {reason}")]
    Decode {
        format: &'static str,
        reason: String,
    },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint decoded but does not describe a reachable position
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
