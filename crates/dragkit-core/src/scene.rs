//! In-memory host for tests, replays and headless use.

use crate::events::DragEvent;
use crate::target::{ListenerScope, Target, TargetHost, TargetId};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A rectangular target that records every event raised on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub position: Option<Point>,
    pub size: Option<Size>,
    /// Whether this frame answers bounding-rect queries.
    #[serde(default = "default_true")]
    pub reports_bounds: bool,
    #[serde(default)]
    pub parent: Option<TargetId>,
    #[serde(skip)]
    pub events: Vec<DragEvent>,
}

fn default_true() -> bool {
    true
}

impl Frame {
    /// A frame with both position and size.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            reports_bounds: true,
            parent: None,
            events: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: TargetId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Stop answering bounding-rect queries.
    pub fn without_bounds(mut self) -> Self {
        self.reports_bounds = false;
        self
    }

    /// Count recorded events with the given name.
    pub fn count(&self, name: &str) -> usize {
        self.events.iter().filter(|e| e.name() == name).count()
    }

    pub fn last_event(&self) -> Option<&DragEvent> {
        self.events.last()
    }
}

impl Target for Frame {
    fn position(&self) -> Option<Point> {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }

    fn size(&self) -> Option<Size> {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        if !self.reports_bounds {
            return None;
        }
        match (self.position, self.size) {
            (Some(position), Some(size)) => Some(Rect::from_origin_size(position, size)),
            _ => None,
        }
    }

    fn raise(&mut self, event: &DragEvent) {
        self.events.push(*event);
    }
}

/// A flat collection of frames plus a record of attached listeners.
#[derive(Debug, Default)]
pub struct Scene {
    frames: HashMap<TargetId, Frame>,
    listeners: HashSet<ListenerScope>,
    listen_calls: usize,
    unlisten_calls: usize,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame under a fresh id.
    pub fn add(&mut self, frame: Frame) -> TargetId {
        let id = Uuid::new_v4();
        self.frames.insert(id, frame);
        id
    }

    /// Add a frame under a chosen id, replacing any existing one.
    pub fn insert(&mut self, id: TargetId, frame: Frame) {
        self.frames.insert(id, frame);
    }

    pub fn remove(&mut self, id: TargetId) -> Option<Frame> {
        self.frames.remove(&id)
    }

    pub fn frame(&self, id: TargetId) -> Option<&Frame> {
        self.frames.get(&id)
    }

    pub fn frame_mut(&mut self, id: TargetId) -> Option<&mut Frame> {
        self.frames.get_mut(&id)
    }

    /// Listeners currently attached.
    pub fn listeners(&self) -> &HashSet<ListenerScope> {
        &self.listeners
    }

    pub fn is_listening(&self, scope: ListenerScope) -> bool {
        self.listeners.contains(&scope)
    }

    /// Total attach and detach calls received, in that order.
    pub fn listener_calls(&self) -> (usize, usize) {
        (self.listen_calls, self.unlisten_calls)
    }
}

impl TargetHost for Scene {
    fn target(&self, id: TargetId) -> Option<&dyn Target> {
        self.frames.get(&id).map(|f| f as &dyn Target)
    }

    fn target_mut(&mut self, id: TargetId) -> Option<&mut dyn Target> {
        self.frames.get_mut(&id).map(|f| f as &mut dyn Target)
    }

    fn parent_of(&self, id: TargetId) -> Option<TargetId> {
        self.frames.get(&id).and_then(|f| f.parent)
    }

    fn listen(&mut self, scope: ListenerScope) {
        self.listen_calls += 1;
        if !self.listeners.insert(scope) {
            log::warn!("Duplicate listener attached for {:?}", scope);
        }
    }

    fn unlisten(&mut self, scope: ListenerScope) {
        self.unlisten_calls += 1;
        if !self.listeners.remove(&scope) {
            log::warn!("Detached listener that was never attached: {:?}", scope);
        }
    }
}
