//! Error types for the hunt engine and its storage port.

use thiserror::Error;

use crate::core::PuzzleId;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) or the
/// session codec layered on top of it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium failed (disk, permissions).
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted value could not be parsed or violates a session invariant.
    #[error("stored value for {key:?} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// The store has no room left for the value being written.
    #[error("storage quota exceeded: need {needed} bytes, {available} available")]
    QuotaExceeded { needed: usize, available: usize },
}

impl StoreError {
    /// Build a `Corrupt` error for the given key.
    pub fn corrupt(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised by engine operations.
///
/// Every variant leaves the session unchanged.
#[derive(Debug, Error)]
pub enum HuntError {
    /// The letter is not one of the unique letters of the final phrase.
    #[error("{0:?} is not a letter of the final phrase")]
    InvalidLetter(char),

    /// No puzzle with this id exists in the configured set.
    #[error("no puzzle with id {0}")]
    UnknownPuzzle(PuzzleId),

    /// Puzzle set, phrase or guess limit failed validation.
    #[error("invalid hunt configuration: {0}")]
    InvalidConfig(String),

    /// A server-provided status does not fit the local puzzles or phrase.
    #[error("remote game status rejected: {0}")]
    InvalidRemoteState(String),

    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
