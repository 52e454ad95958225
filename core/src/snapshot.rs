//! Snapshot - save/resume generator state
//!
//! Captures the random stream state so a fixture build can pause and
//! resume, or record the exact point a failing sequence started from.
//! A restored faker continues the snapshotted stream draw for draw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during snapshot serialization
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serializable capture of a faker's stream state
///
/// # Example
/// ```
/// use fakegen_core_rs::Faker;
///
/// let mut f = Faker::with_seed(42);
/// let _ = f.uuid().v4();
///
/// let snapshot = f.snapshot();
/// let mut resumed = Faker::restore(&snapshot);
/// assert_eq!(f.uuid().v4(), resumed.uuid().v4());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakerSnapshot {
    /// Random source state word (CRITICAL for determinism)
    pub rng_state: u64,
}

impl FakerSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
