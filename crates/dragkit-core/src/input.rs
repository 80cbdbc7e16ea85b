//! Pointer input normalization for mouse, pen and touch.
//!
//! Hosts feed raw device state into a [`PointerTracker`], which produces
//! [`PointerEvent`]s carrying a single normalized [`PointerInput`] shape
//! regardless of the device.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Identifies the pointer that produced an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerId {
    Mouse,
    Touch(u64),
    Pen(u64),
}

impl PointerId {
    pub fn is_touch(&self) -> bool {
        matches!(self, PointerId::Touch(_))
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Bit used for this button in [`PointerInput::buttons`].
    pub fn mask(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A single normalized pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Position in screen coordinates.
    pub position: Point,
    /// Which pointer produced this sample.
    pub pointer: PointerId,
    /// Bitmask of held mouse/pen buttons.
    #[serde(default)]
    pub buttons: u8,
    /// Number of touch contacts currently on the surface.
    #[serde(default)]
    pub contacts: usize,
    /// Position relative to the pressed element, if the host knows it.
    #[serde(default)]
    pub offset_in_target: Option<Vec2>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// A mouse sample with the given held buttons.
    pub fn mouse(position: Point, buttons: u8) -> Self {
        Self {
            position,
            pointer: PointerId::Mouse,
            buttons,
            contacts: 0,
            offset_in_target: None,
            modifiers: Modifiers::default(),
        }
    }

    /// A touch sample; `contacts` counts every finger currently down.
    pub fn touch(id: u64, position: Point, contacts: usize) -> Self {
        Self {
            position,
            pointer: PointerId::Touch(id),
            buttons: 0,
            contacts,
            offset_in_target: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_offset_in_target(mut self, offset: Vec2) -> Self {
        self.offset_in_target = Some(offset);
        self
    }

    /// Whether any button or touch contact is still held.
    pub fn is_pressed(&self) -> bool {
        if self.pointer.is_touch() {
            self.contacts > 0
        } else {
            self.buttons != 0
        }
    }

    /// Whether more than one finger is on the surface.
    pub fn is_multi_touch(&self) -> bool {
        self.contacts > 1
    }
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(PointerInput),
    Move(PointerInput),
    Up(PointerInput),
    /// The platform aborted pointer tracking (touch cancel, focus loss).
    Cancel,
}

/// Tracks raw device state and turns it into normalized pointer events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Point,
    buttons: u8,
    modifiers: Modifiers,
    touches: Vec<(u64, Point)>,
}

impl PointerTracker {
    /// Create a new tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known mouse position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Update modifier keys state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    fn mouse_input(&self) -> PointerInput {
        PointerInput::mouse(self.position, self.buttons).with_modifiers(self.modifiers)
    }

    pub fn mouse_moved(&mut self, position: Point) -> PointerEvent {
        self.position = position;
        PointerEvent::Move(self.mouse_input())
    }

    pub fn mouse_pressed(&mut self, button: MouseButton) -> PointerEvent {
        self.buttons |= button.mask();
        PointerEvent::Down(self.mouse_input())
    }

    /// A release only becomes an `Up` once no button is held any more.
    pub fn mouse_released(&mut self, button: MouseButton) -> PointerEvent {
        self.buttons &= !button.mask();
        if self.buttons == 0 {
            PointerEvent::Up(self.mouse_input())
        } else {
            PointerEvent::Move(self.mouse_input())
        }
    }

    pub fn touch_started(&mut self, id: u64, position: Point) -> PointerEvent {
        self.touches.retain(|(t, _)| *t != id);
        self.touches.push((id, position));
        PointerEvent::Down(self.touch_input(id, position))
    }

    pub fn touch_moved(&mut self, id: u64, position: Point) -> PointerEvent {
        if let Some(touch) = self.touches.iter_mut().find(|(t, _)| *t == id) {
            touch.1 = position;
        }
        PointerEvent::Move(self.touch_input(id, position))
    }

    pub fn touch_ended(&mut self, id: u64, position: Point) -> PointerEvent {
        self.touches.retain(|(t, _)| *t != id);
        PointerEvent::Up(self.touch_input(id, position))
    }

    pub fn touch_cancelled(&mut self, id: u64) -> PointerEvent {
        self.touches.retain(|(t, _)| *t != id);
        PointerEvent::Cancel
    }

    fn touch_input(&self, id: u64, position: Point) -> PointerInput {
        PointerInput::touch(id, position, self.touches.len()).with_modifiers(self.modifiers)
    }
}
