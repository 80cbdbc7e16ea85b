//! Threshold-based gesture recognition.
//!
//! A press only becomes a drag once the pointer has travelled at least
//! `threshold` pixels from the press point. A release before that is a
//! plain click and produces no drag signals at all.

use crate::input::{PointerId, PointerInput};
use kurbo::Point;

/// Default drag threshold in device-independent pixels.
pub const DEFAULT_THRESHOLD_PX: f64 = 6.0;

/// Recognizer phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No press is being tracked.
    Idle,
    /// Pressed, but the pointer has not crossed the threshold yet.
    Pending { press: Point, pointer: PointerId },
    /// Threshold crossed; every move is forwarded.
    Dragging { press: Point, pointer: PointerId },
}

/// What the recognizer wants the caller to do with an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSignal {
    /// Nothing to do (ignored input, or sub-threshold move).
    None,
    /// Tracking began at the press point.
    Pressed(Point),
    /// The threshold was crossed at this point; open the session here.
    Start(Point),
    /// The session should follow the pointer to this point.
    Move(Point),
    /// The drag completed at this point.
    End(Point),
    /// Released before the threshold: a plain click.
    Click(Point),
    /// The gesture was aborted; discard the session without ending it.
    Cancel,
}

/// Turns raw press/move/release input into drag signals.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    threshold: f64,
    phase: GesturePhase,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PX)
    }
}

impl GestureRecognizer {
    /// Create a recognizer with the given threshold in pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            phase: GesturePhase::Idle,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    fn tracked_pointer(&self) -> Option<PointerId> {
        match self.phase {
            GesturePhase::Idle => None,
            GesturePhase::Pending { pointer, .. } | GesturePhase::Dragging { pointer, .. } => {
                Some(pointer)
            }
        }
    }

    /// Handle a press. Multi-touch presses are rejected; a press while a
    /// gesture is already tracked is ignored unless it adds a second finger,
    /// which cancels the tracked gesture.
    pub fn press(&mut self, input: &PointerInput) -> GestureSignal {
        if !self.is_idle() {
            if input.is_multi_touch() {
                return self.cancel();
            }
            return GestureSignal::None;
        }
        if input.is_multi_touch() {
            return GestureSignal::None;
        }
        self.phase = GesturePhase::Pending {
            press: input.position,
            pointer: input.pointer,
        };
        GestureSignal::Pressed(input.position)
    }

    /// Handle a move. A move with nothing held is an implicit release.
    pub fn motion(&mut self, input: &PointerInput) -> GestureSignal {
        if self.is_idle() {
            return GestureSignal::None;
        }
        if input.is_multi_touch() {
            return self.cancel();
        }
        if self.tracked_pointer() != Some(input.pointer) {
            return GestureSignal::None;
        }
        if !input.is_pressed() {
            return self.release(input);
        }
        match self.phase {
            GesturePhase::Idle => GestureSignal::None,
            GesturePhase::Pending { press, pointer } => {
                if press.distance(input.position) >= self.threshold {
                    self.phase = GesturePhase::Dragging { press, pointer };
                    GestureSignal::Start(input.position)
                } else {
                    GestureSignal::None
                }
            }
            GesturePhase::Dragging { .. } => GestureSignal::Move(input.position),
        }
    }

    /// Handle a release of the tracked pointer.
    pub fn release(&mut self, input: &PointerInput) -> GestureSignal {
        if self.tracked_pointer() != Some(input.pointer) {
            return GestureSignal::None;
        }
        let phase = std::mem::replace(&mut self.phase, GesturePhase::Idle);
        match phase {
            GesturePhase::Idle => GestureSignal::None,
            GesturePhase::Pending { .. } => GestureSignal::Click(input.position),
            GesturePhase::Dragging { .. } => GestureSignal::End(input.position),
        }
    }

    /// Abort whatever is being tracked.
    pub fn cancel(&mut self) -> GestureSignal {
        let phase = std::mem::replace(&mut self.phase, GesturePhase::Idle);
        match phase {
            GesturePhase::Idle => GestureSignal::None,
            _ => GestureSignal::Cancel,
        }
    }
}
