//! Snapshot encoding for the persistence collaborator.
//!
//! The exact storage layout belongs to the host; the engine only promises
//! that a decoded snapshot behaves identically to the state it came from,
//! including the tiles the bag will draw next.

use thiserror::Error;

use super::state::GameState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("binary snapshot could not be encoded or decoded: {0}")]
    Binary(#[from] bincode::Error),
    #[error("JSON snapshot could not be encoded or decoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot decodes to an inconsistent game: {0}")]
    Inconsistent(String),
}

impl GameState {
    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.checked()
    }

    /// Human-readable snapshot.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let state: GameState = serde_json::from_str(json)?;
        state.checked()
    }

    fn checked(self) -> Result<Self, SnapshotError> {
        match self.invariant_violation() {
            Some(violation) => Err(SnapshotError::Inconsistent(violation)),
            None => Ok(self),
        }
    }
}
