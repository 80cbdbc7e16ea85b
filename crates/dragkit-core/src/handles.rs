//! Resize handle definitions.

use crate::error::DragError;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handle hit tolerance in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 12.0;

/// One of the 8 compass-point resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HandleLabel {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl HandleLabel {
    /// All handles, in the order they are laid out around a rectangle.
    pub const ALL: [HandleLabel; 8] = [
        HandleLabel::NW,
        HandleLabel::N,
        HandleLabel::NE,
        HandleLabel::E,
        HandleLabel::SE,
        HandleLabel::S,
        HandleLabel::SW,
        HandleLabel::W,
    ];

    /// Lowercase compass label.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleLabel::N => "n",
            HandleLabel::S => "s",
            HandleLabel::E => "e",
            HandleLabel::W => "w",
            HandleLabel::NE => "ne",
            HandleLabel::NW => "nw",
            HandleLabel::SE => "se",
            HandleLabel::SW => "sw",
        }
    }

    /// Whether dragging this handle moves the top edge.
    pub fn moves_top(&self) -> bool {
        matches!(self, HandleLabel::N | HandleLabel::NE | HandleLabel::NW)
    }

    /// Whether dragging this handle moves the bottom edge.
    pub fn moves_bottom(&self) -> bool {
        matches!(self, HandleLabel::S | HandleLabel::SE | HandleLabel::SW)
    }

    /// Whether dragging this handle moves the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(self, HandleLabel::W | HandleLabel::NW | HandleLabel::SW)
    }

    /// Whether dragging this handle moves the right edge.
    pub fn moves_right(&self) -> bool {
        matches!(self, HandleLabel::E | HandleLabel::NE | HandleLabel::SE)
    }

    /// Whether this is a corner handle (moves two edges).
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HandleLabel::NE | HandleLabel::NW | HandleLabel::SE | HandleLabel::SW
        )
    }

    /// Whether the handle changes the position of the target (north or west edges).
    pub fn moves_origin(&self) -> bool {
        self.moves_top() || self.moves_left()
    }

    /// Anchor point of this handle on the given rectangle.
    pub fn anchor(&self, rect: Rect) -> Point {
        let x = if self.moves_left() {
            rect.x0
        } else if self.moves_right() {
            rect.x1
        } else {
            rect.center().x
        };
        let y = if self.moves_top() {
            rect.y0
        } else if self.moves_bottom() {
            rect.y1
        } else {
            rect.center().y
        };
        Point::new(x, y)
    }
}

impl fmt::Display for HandleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandleLabel {
    type Err = DragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(HandleLabel::N),
            "s" => Ok(HandleLabel::S),
            "e" => Ok(HandleLabel::E),
            "w" => Ok(HandleLabel::W),
            "ne" => Ok(HandleLabel::NE),
            "nw" => Ok(HandleLabel::NW),
            "se" => Ok(HandleLabel::SE),
            "sw" => Ok(HandleLabel::SW),
            _ => Err(DragError::UnknownHandle(s.to_string())),
        }
    }
}

impl TryFrom<String> for HandleLabel {
    type Error = DragError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HandleLabel> for String {
    fn from(label: HandleLabel) -> Self {
        label.as_str().to_string()
    }
}

/// A resize handle with its position.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in the same space as the rectangle it was placed on.
    pub position: Point,
    /// Compass label.
    pub label: HandleLabel,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, label: HandleLabel) -> Self {
        Self { position, label }
    }

    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Place all 8 handles around a rectangle.
pub fn handles_for_rect(rect: Rect) -> Vec<Handle> {
    HandleLabel::ALL
        .iter()
        .map(|label| Handle::new(label.anchor(rect), *label))
        .collect()
}

/// Find which handle (if any) is hit at the given point.
/// Corners win over edges when both are within tolerance.
pub fn hit_test_handles(rect: Rect, point: Point, tolerance: f64) -> Option<HandleLabel> {
    let handles = handles_for_rect(rect);
    let corner = handles
        .iter()
        .filter(|h| h.label.is_corner())
        .find(|h| h.hit_test(point, tolerance));
    corner
        .or_else(|| handles.iter().find(|h| h.hit_test(point, tolerance)))
        .map(|h| h.label)
}
