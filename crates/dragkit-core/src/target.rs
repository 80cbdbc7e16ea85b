//! The capability contract the engine needs from draggable objects and
//! from the host that owns them.

use crate::events::DragEvent;
use kurbo::{Point, Rect, Size};
use uuid::Uuid;

/// Unique identifier for a target or a press surface.
pub type TargetId = Uuid;

/// An object the engine can move or resize.
///
/// Geometry queries return `Option` so that objects which cannot report a
/// position or size still work with strategies that do not need it.
pub trait Target {
    /// Top-left position, in the coordinate space of the logical parent.
    fn position(&self) -> Option<Point>;

    fn set_position(&mut self, position: Point);

    fn size(&self) -> Option<Size>;

    fn set_size(&mut self, size: Size);

    /// Absolute bounding rectangle. Only needed when this object is used as
    /// a bounds reference.
    fn bounding_rect(&self) -> Option<Rect> {
        None
    }

    /// Raise an observable lifecycle event on this object.
    fn raise(&mut self, event: &DragEvent);
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Press listener on a target or its grip element.
    Press(TargetId),
    /// The shared top-level move/release listener.
    Window,
}

/// The environment the engine runs in: owns the targets and the event
/// dispatch substrate.
pub trait TargetHost {
    fn target(&self, id: TargetId) -> Option<&dyn Target>;

    fn target_mut(&mut self, id: TargetId) -> Option<&mut dyn Target>;

    /// Logical parent of a target, used by the within-parent strategy.
    fn parent_of(&self, _id: TargetId) -> Option<TargetId> {
        None
    }

    /// Attach a listener. Called at most once per scope until the matching
    /// [`TargetHost::unlisten`].
    fn listen(&mut self, _scope: ListenerScope) {}

    /// Detach a listener previously attached with [`TargetHost::listen`].
    fn unlisten(&mut self, _scope: ListenerScope) {}
}
