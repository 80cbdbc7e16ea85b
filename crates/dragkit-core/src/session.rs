//! Live state of one in-progress gesture.

use crate::geometry::subtract;
use crate::strategy::Strategy;
use crate::target::{Target, TargetId};
use kurbo::{Point, Size, Vec2};

/// State of an active drag or resize.
///
/// The initial geometry is captured once when the session opens and never
/// changes; every resolved placement derives from it plus the current
/// offset, so intermediate moves cannot accumulate drift.
#[derive(Debug, Clone)]
pub struct DragSession {
    key: TargetId,
    target: TargetId,
    bounds_ref: Option<TargetId>,
    initial_position: Option<Point>,
    initial_size: Option<Size>,
    press_point: Point,
    start_point: Point,
    grab_offset: Option<Vec2>,
    movement_offset: Vec2,
    active: bool,
    strategy: Strategy,
}

impl DragSession {
    /// Open a session, snapshotting the target's current geometry.
    ///
    /// `key` is the press surface that owns the session; `start_point` is
    /// where the threshold was crossed and is the origin of all offsets.
    pub fn open(
        key: TargetId,
        target_id: TargetId,
        target: &dyn Target,
        bounds_ref: Option<TargetId>,
        strategy: Strategy,
        press_point: Point,
        start_point: Point,
    ) -> Self {
        Self {
            key,
            target: target_id,
            bounds_ref,
            initial_position: target.position(),
            initial_size: target.size(),
            press_point,
            start_point,
            grab_offset: None,
            movement_offset: Vec2::ZERO,
            active: true,
            strategy,
        }
    }

    /// Use the press offset the host reported within the target.
    pub fn with_grab_offset(mut self, grab_offset: Option<Vec2>) -> Self {
        if grab_offset.is_some() {
            self.grab_offset = grab_offset;
        }
        self
    }

    pub fn key(&self) -> TargetId {
        self.key
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn bounds_ref(&self) -> Option<TargetId> {
        self.bounds_ref
    }

    pub fn initial_position(&self) -> Option<Point> {
        self.initial_position
    }

    pub fn initial_size(&self) -> Option<Size> {
        self.initial_size
    }

    pub fn press_point(&self) -> Point {
        self.press_point
    }

    /// Where inside the target the press landed. Falls back to the press
    /// point relative to the initial position when the host reported none.
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.grab_offset
            .or_else(|| self.initial_position.map(|p| subtract(self.press_point, p)))
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn movement_offset(&self) -> Vec2 {
        self.movement_offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Recompute the offset for the pointer's current position.
    pub fn update(&mut self, point: Point) -> Vec2 {
        self.movement_offset = subtract(point, self.start_point);
        self.movement_offset
    }

    /// Mark the session finished.
    pub fn close(&mut self) {
        self.active = false;
    }
}
