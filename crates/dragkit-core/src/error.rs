//! Error taxonomy for the drag engine.

use crate::target::TargetId;
use thiserror::Error;

/// Errors produced by the drag engine.
///
/// Everything except [`DragError::MissingGeometry`] is a configuration error
/// and is only ever returned from [`crate::DragManager::attach`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DragError {
    #[error("Unknown movement strategy: {0}")]
    UnknownStrategy(String),
    #[error("Unknown resize handle: {0}")]
    UnknownHandle(String),
    #[error("Resize strategy requires a handle label")]
    MissingHandleLabel,
    #[error("Invalid drag threshold: {0}")]
    InvalidThreshold(f64),
    #[error("Minimum size exceeds maximum size")]
    InvertedSizeBounds,
    #[error("Invalid drag options: {0}")]
    Config(String),
    #[error("Unknown target: {0}")]
    UnknownTarget(TargetId),
    #[error("Target {target} has no {query} for this strategy")]
    MissingGeometry {
        target: TargetId,
        query: &'static str,
    },
}

/// Result type for drag engine operations.
pub type DragResult<T> = Result<T, DragError>;
