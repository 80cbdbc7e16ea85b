//! Pure geometry helpers used by the movement strategies.
//!
//! All functions here are total: they never panic (no `f64::clamp`, which
//! panics on inverted ranges) and have no side effects.

use crate::handles::HandleLabel;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// The two screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Per-axis size bound. `None` leaves that axis unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBound {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl SizeBound {
    /// Bound both axes.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// A bound with no constraint on either axis.
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Result of a handle resize: the new top-left and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

/// Translate a point by an offset.
pub fn add(a: Point, b: Vec2) -> Point {
    Point::new(a.x + b.x, a.y + b.y)
}

/// Offset from `b` to `a`.
pub fn subtract(a: Point, b: Point) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Adjust `pos` so that `[pos, pos + size]` lies within `bounds`.
///
/// When the target is larger than the bounds on an axis, the leading edge
/// (left/top) is aligned with the bounds.
pub fn clamp_position(pos: Point, size: Size, bounds: Option<Rect>) -> Point {
    let Some(bounds) = bounds else {
        return pos;
    };
    let x = pos.x.min(bounds.x1 - size.width).max(bounds.x0);
    let y = pos.y.min(bounds.y1 - size.height).max(bounds.y0);
    Point::new(x, y)
}

/// Clamp each axis of `size` into `[min, max]`; missing bounds are ignored.
/// If a minimum exceeds its maximum, the minimum wins.
pub fn clamp_size(size: Size, min: &SizeBound, max: &SizeBound) -> Size {
    let clamp_axis = |value: f64, lo: Option<f64>, hi: Option<f64>| {
        let value = match hi {
            Some(hi) => value.min(hi),
            None => value,
        };
        match lo {
            Some(lo) => value.max(lo),
            None => value,
        }
    };
    Size::new(
        clamp_axis(size.width, min.width, max.width),
        clamp_axis(size.height, min.height, max.height),
    )
}

/// Grow or shrink a rectangle along the edges implied by `handle`.
///
/// South/east handles only change the size; north/west handles move the
/// position and change the size by the opposite amount. No clamping happens
/// here, so the size may come out zero or negative.
pub fn resize_from_handle(
    handle: HandleLabel,
    initial_pos: Point,
    initial_size: Size,
    offset: Vec2,
) -> Placement {
    let mut position = initial_pos;
    let mut size = initial_size;

    if handle.moves_right() {
        size.width += offset.x;
    } else if handle.moves_left() {
        position.x += offset.x;
        size.width -= offset.x;
    }

    if handle.moves_bottom() {
        size.height += offset.y;
    } else if handle.moves_top() {
        position.y += offset.y;
        size.height -= offset.y;
    }

    Placement { position, size }
}

/// The axis with the larger absolute offset component. Ties go horizontal.
pub fn dominant_axis(offset: Vec2) -> Axis {
    if offset.y.abs() > offset.x.abs() {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Recompute the non-dominant axis of `size` from the aspect ratio of
/// `initial_size`. A degenerate initial size leaves `size` untouched.
pub fn apply_aspect_lock(size: Size, initial_size: Size, dominant: Axis) -> Size {
    if initial_size.width == 0.0 || initial_size.height == 0.0 {
        return size;
    }
    let ratio = initial_size.width / initial_size.height;
    if !ratio.is_finite() {
        return size;
    }
    match dominant {
        Axis::Horizontal => Size::new(size.width, size.width / ratio),
        Axis::Vertical => Size::new(size.height * ratio, size.height),
    }
}

/// Position for a resized rectangle that keeps the edges opposite to
/// `handle` where they were at the start of the gesture.
pub fn anchored_position(
    handle: HandleLabel,
    initial_pos: Point,
    initial_size: Size,
    size: Size,
) -> Point {
    let x = if handle.moves_left() {
        initial_pos.x + initial_size.width - size.width
    } else {
        initial_pos.x
    };
    let y = if handle.moves_top() {
        initial_pos.y + initial_size.height - size.height
    } else {
        initial_pos.y
    };
    Point::new(x, y)
}
