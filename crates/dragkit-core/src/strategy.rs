//! Movement strategies: how a pointer offset maps onto target geometry.

use crate::error::{DragError, DragResult};
use crate::geometry::{
    Axis, SizeBound, add, anchored_position, apply_aspect_lock, clamp_position, clamp_size,
    dominant_axis, resize_from_handle,
};
use crate::handles::HandleLabel;
use crate::input::Modifiers;
use crate::session::DragSession;
use crate::target::TargetHost;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy names accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    #[default]
    Translate,
    XOnly,
    YOnly,
    WithinParent,
    Resize,
    Move,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Translate => "translate",
            StrategyKind::XOnly => "x-only",
            StrategyKind::YOnly => "y-only",
            StrategyKind::WithinParent => "within-parent",
            StrategyKind::Resize => "resize",
            StrategyKind::Move => "move",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = DragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "translate" => Ok(StrategyKind::Translate),
            "x-only" | "x" => Ok(StrategyKind::XOnly),
            "y-only" | "y" => Ok(StrategyKind::YOnly),
            "within-parent" | "parent" => Ok(StrategyKind::WithinParent),
            "resize" => Ok(StrategyKind::Resize),
            "move" => Ok(StrategyKind::Move),
            _ => Err(DragError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = DragError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Parameters of a multi-handle resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeParams {
    pub handle: HandleLabel,
    pub aspect_lock: bool,
    /// Holding Shift locks the aspect ratio for this move.
    pub shift_locks_aspect: bool,
    pub min_size: SizeBound,
    pub max_size: SizeBound,
}

/// A movement strategy, fixed for the lifetime of a registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Follow the pointer, optionally clamped to a bounds reference.
    Translate,
    /// Like translate, with y pinned to the initial value.
    XOnly,
    /// Like translate, with x pinned to the initial value.
    YOnly,
    /// Like translate, clamped to the parent's local space.
    WithinParent,
    /// Resize from one of the 8 compass handles.
    Resize(ResizeParams),
    /// Translate for the body of a resizable region.
    Move,
}

/// Where a strategy reads its containment rectangle from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsSpace {
    /// No containment.
    None,
    /// The bounds reference's absolute bounding rectangle.
    Absolute,
    /// The parent's size, anchored at the origin.
    ParentLocal,
}

/// Geometry a strategy wants written to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Resolved {
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Translate => StrategyKind::Translate,
            Strategy::XOnly => StrategyKind::XOnly,
            Strategy::YOnly => StrategyKind::YOnly,
            Strategy::WithinParent => StrategyKind::WithinParent,
            Strategy::Resize(_) => StrategyKind::Resize,
            Strategy::Move => StrategyKind::Move,
        }
    }

    /// Whether this strategy raises `resize-*` rather than `drag-*` events.
    pub fn is_resize(&self) -> bool {
        matches!(self, Strategy::Resize(_))
    }

    pub fn bounds_space(&self) -> BoundsSpace {
        match self {
            Strategy::Translate | Strategy::XOnly | Strategy::YOnly | Strategy::Move => {
                BoundsSpace::Absolute
            }
            Strategy::WithinParent => BoundsSpace::ParentLocal,
            Strategy::Resize(_) => BoundsSpace::None,
        }
    }

    /// Query the containment rectangle for this move.
    ///
    /// Bounds are read fresh on every call so a container that resizes
    /// mid-drag is respected. A bounds reference that cannot report the
    /// needed geometry yields `None` and the move goes unclamped.
    pub fn query_bounds(&self, host: &dyn TargetHost, session: &DragSession) -> Option<Rect> {
        match self.bounds_space() {
            BoundsSpace::None => None,
            BoundsSpace::Absolute => {
                let bounds_id = session.bounds_ref()?;
                let rect = host.target(bounds_id).and_then(|t| t.bounding_rect());
                if rect.is_none() {
                    log::debug!("Bounds reference {} has no bounding rect, skipping clamp", bounds_id);
                }
                rect
            }
            BoundsSpace::ParentLocal => {
                let parent_id = session
                    .bounds_ref()
                    .or_else(|| host.parent_of(session.target()))?;
                let size = host.target(parent_id).and_then(|t| t.size());
                if size.is_none() {
                    log::debug!("Parent {} has no size, skipping clamp", parent_id);
                }
                size.map(|size| Rect::from_origin_size(Point::ZERO, size))
            }
        }
    }

    /// Map the session's current offset to new target geometry.
    pub fn resolve(
        &self,
        session: &DragSession,
        offset: Vec2,
        bounds: Option<Rect>,
        modifiers: Modifiers,
    ) -> DragResult<Resolved> {
        match self {
            Strategy::Translate | Strategy::Move | Strategy::WithinParent => {
                translate(session, offset, bounds)
            }
            Strategy::XOnly => translate(session, Vec2::new(offset.x, 0.0), bounds),
            Strategy::YOnly => translate(session, Vec2::new(0.0, offset.y), bounds),
            Strategy::Resize(params) => resize(session, params, offset, modifiers),
        }
    }
}

fn missing(session: &DragSession, query: &'static str) -> DragError {
    DragError::MissingGeometry {
        target: session.target(),
        query,
    }
}

fn translate(session: &DragSession, offset: Vec2, bounds: Option<Rect>) -> DragResult<Resolved> {
    let initial = session
        .initial_position()
        .ok_or_else(|| missing(session, "position"))?;
    let position = add(initial, offset);
    let position = match session.initial_size() {
        Some(size) => clamp_position(position, size, bounds),
        None => position,
    };
    Ok(Resolved {
        position: Some(position),
        size: None,
    })
}

fn resize(
    session: &DragSession,
    params: &ResizeParams,
    offset: Vec2,
    modifiers: Modifiers,
) -> DragResult<Resolved> {
    let initial_size = session.initial_size().ok_or_else(|| missing(session, "size"))?;
    let initial_position = match session.initial_position() {
        Some(position) => position,
        None if params.handle.moves_origin() => return Err(missing(session, "position")),
        None => Point::ZERO,
    };

    let placement = resize_from_handle(params.handle, initial_position, initial_size, offset);
    let mut size = placement.size;
    if params.aspect_lock || (params.shift_locks_aspect && modifiers.shift) {
        size = apply_aspect_lock(size, initial_size, lock_axis(params.handle, offset));
    }
    let size = clamp_size(size, &params.min_size, &params.max_size);

    let position = if params.handle.moves_origin() {
        Some(anchored_position(params.handle, initial_position, initial_size, size))
    } else {
        None
    };

    Ok(Resolved {
        position,
        size: Some(size),
    })
}

/// Edge handles only ever drive their own axis; corners follow the
/// larger offset component.
fn lock_axis(handle: HandleLabel, offset: Vec2) -> Axis {
    match handle {
        HandleLabel::E | HandleLabel::W => Axis::Horizontal,
        HandleLabel::N | HandleLabel::S => Axis::Vertical,
        _ => dominant_axis(offset),
    }
}
