//! Replay errors.

use dragkit_core::DragError;
use thiserror::Error;

/// Errors raised while loading or replaying a scenario.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown frame: {0}")]
    UnknownFrame(String),
    #[error("Duplicate frame name: {0}")]
    DuplicateFrame(String),
    #[error("Cannot attach {name}: {source}")]
    Attach { name: String, source: DragError },
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;
