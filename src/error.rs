//! Error taxonomy shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by entity construction, inventory handling, battles and saves.
///
/// None of these are fatal: every variant describes a condition the caller can
/// recover from (retry with corrected input, pick another item, start a new game).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid {field}: {reason}")]
    InvalidStat { field: &'static str, reason: String },

    #[error("item not found in inventory: {0}")]
    ItemNotFound(String),

    #[error("no save game found at {}", .0.display())]
    SaveNotFound(PathBuf),

    #[error("corrupt save data at line {line}: {reason}")]
    CorruptSaveData { line: usize, reason: String },

    #[error("battle is already over")]
    BattleFinished,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GameError::InvalidStat {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        GameError::CorruptSaveData {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
