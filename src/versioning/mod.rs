//! Versioned records.
//!
//! Every save snapshots the record under a monotonically increasing version
//! number. Revisions are append-only: reverting to an older version saves
//! its content as a new revision rather than discarding the later ones.
//! There are no lifecycle semantics here; a versioned record is typically
//! the context a lifecycle hook writes to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when addressing revisions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version {requested} does not exist (latest is {latest})")]
    UnknownVersion { requested: u64, latest: u64 },
}

/// Snapshot of a record as it was saved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Revision<T> {
    pub version: u64,
    pub record: T,
    pub saved_at: DateTime<Utc>,
}

/// A record together with its full revision history.
///
/// # Example
///
/// ```rust
/// use lifecycle::versioning::Versioned;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Address {
///     street: String,
/// }
///
/// let mut account = Versioned::create(Address { street: "123 Main".to_string() });
/// assert_eq!(account.version(), 1);
///
/// account.update(|a| a.street = "321 Elm".to_string());
/// assert_eq!(account.versions().len(), 2);
/// assert_eq!(account.previous().unwrap().record.street, "123 Main");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Versioned<T> {
    current: T,
    version: u64,
    revisions: Vec<Revision<T>>,
}

impl<T: Clone> Versioned<T> {
    /// Create a record and save it as version 1.
    pub fn create(record: T) -> Self {
        let revision = Revision {
            version: 1,
            record: record.clone(),
            saved_at: Utc::now(),
        };
        Self {
            current: record,
            version: 1,
            revisions: vec![revision],
        }
    }

    /// Replace the record and save it as the next version.
    pub fn save(&mut self, record: T) -> u64 {
        self.version += 1;
        self.revisions.push(Revision {
            version: self.version,
            record: record.clone(),
            saved_at: Utc::now(),
        });
        self.current = record;
        self.version
    }

    /// Edit a copy of the current record and save it as the next version.
    pub fn update<F>(&mut self, edit: F) -> u64
    where
        F: FnOnce(&mut T),
    {
        let mut record = self.current.clone();
        edit(&mut record);
        self.save(record)
    }

    /// Save the content of an earlier version as a new version.
    pub fn revert_to(&mut self, version: u64) -> Result<u64, VersionError> {
        let record = self.revision(version)?.record.clone();
        Ok(self.save(record))
    }

    pub fn revision(&self, version: u64) -> Result<&Revision<T>, VersionError> {
        self.revisions
            .iter()
            .find(|r| r.version == version)
            .ok_or(VersionError::UnknownVersion {
                requested: version,
                latest: self.version,
            })
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn versions(&self) -> &[Revision<T>] {
        &self.revisions
    }

    pub fn latest(&self) -> Option<&Revision<T>> {
        self.revisions.last()
    }

    /// The revision saved before the latest one.
    pub fn previous(&self) -> Option<&Revision<T>> {
        self.revisions.iter().rev().nth(1)
    }
}
