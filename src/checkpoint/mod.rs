//! Checkpoint and resume for entity lifecycles.
//!
//! A checkpoint is the durable form of an entity's lifecycle position: the
//! state it is in, the state it started from, and every transition that got
//! it there. Guards and hooks are code and are never serialized; restoring
//! goes through [`Lifecycle::restore`](crate::engine::Lifecycle::restore),
//! which checks the checkpoint against the live table.

use crate::core::{Event, State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Summary counters derived from the history at capture time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckpointMetadata {
    /// Number of committed transitions
    pub transition_count: usize,

    /// Committed transitions per event name
    pub event_counts: HashMap<String, usize>,

    /// When the first transition committed, if any
    pub first_transition_at: Option<DateTime<Utc>>,
}

/// Serializable snapshot of an entity's lifecycle position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, Ev: Event> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub initial_state: S,

    pub current_state: S,

    /// Complete transition history
    pub history: StateHistory<S, Ev>,

    pub metadata: CheckpointMetadata,
}

impl<S: State, Ev: Event> Checkpoint<S, Ev> {
    pub fn new(initial_state: S, current_state: S, history: StateHistory<S, Ev>) -> Self {
        let mut event_counts = HashMap::new();
        for transition in history.transitions() {
            *event_counts
                .entry(transition.event.name().to_string())
                .or_insert(0) += 1;
        }

        let metadata = CheckpointMetadata {
            transition_count: history.len(),
            event_counts,
            first_transition_at: history.transitions().first().map(|t| t.timestamp),
        };

        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state,
            current_state,
            history,
            metadata,
        }
    }

    /// Check the format version and that the history actually leads from
    /// `initial_state` to `current_state`.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let path = self.history.get_path();
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            if self.current_state != self.initial_state {
                return Err(CheckpointError::ValidationFailed(format!(
                    "no transitions recorded but state moved from '{}' to '{}'",
                    self.initial_state.name(),
                    self.current_state.name()
                )));
            }
            return Ok(());
        };

        if **first != self.initial_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history starts in '{}', expected '{}'",
                first.name(),
                self.initial_state.name()
            )));
        }
        if !self.history.is_contiguous() {
            return Err(CheckpointError::ValidationFailed(
                "history has a gap between consecutive transitions".to_string(),
            ));
        }
        if **last != self.current_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends in '{}', expected '{}'",
                last.name(),
                self.current_state.name()
            )));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode {
            format: "json",
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
            format: "json",
            reason: e.to_string(),
        })
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: "bincode",
            reason: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
            format: "bincode",
            reason: e.to_string(),
        })
    }
}
