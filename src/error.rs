//! Error types shared by the activities and the persistence port.

use thiserror::Error;

/// Configuration problems detected before a round can be played.
///
/// User-input mistakes (tapping a matched tile, placing into a full answer row)
/// are never errors; they are silently ignored by the state machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("level '{0}' has no vocabulary entries")]
    EmptyLevel(String),
    #[error("level '{0}' is locked")]
    LevelLocked(String),
    #[error("unknown level '{0}'")]
    UnknownLevel(String),
    #[error("word list has no well-formed words")]
    NoWords,
}

/// Failure reported by a [`crate::store::ScoreStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("score storage is unavailable")]
    Unavailable,
    #[error("score write rejected: {0}")]
    WriteFailed(String),
}
