//! Observable drag and resize lifecycle events.

use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// An event raised on a target during a gesture.
///
/// Drag events carry the current pointer offset; resize events carry the
/// resolved size that was written to the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DragEvent {
    DragStart { offset: Vec2 },
    DragMove { offset: Vec2 },
    DragEnd { offset: Vec2 },
    DragCancel,
    ResizeStart { size: Size },
    ResizeMove { size: Size },
    ResizeEnd { size: Size },
    ResizeCancel,
}

impl DragEvent {
    /// The event name as hosts see it, e.g. `"drag-start"`.
    pub fn name(&self) -> &'static str {
        match self {
            DragEvent::DragStart { .. } => "drag-start",
            DragEvent::DragMove { .. } => "drag-move",
            DragEvent::DragEnd { .. } => "drag-end",
            DragEvent::DragCancel => "drag-cancel",
            DragEvent::ResizeStart { .. } => "resize-start",
            DragEvent::ResizeMove { .. } => "resize-move",
            DragEvent::ResizeEnd { .. } => "resize-end",
            DragEvent::ResizeCancel => "resize-cancel",
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, DragEvent::DragEnd { .. } | DragEvent::ResizeEnd { .. })
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, DragEvent::DragCancel | DragEvent::ResizeCancel)
    }
}
