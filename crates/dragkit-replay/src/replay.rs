//! Drives a scenario through the drag engine.

use crate::error::{ReplayError, ReplayResult};
use crate::scenario::{Scenario, Step};
use dragkit_core::handles::HANDLE_HIT_TOLERANCE;
use dragkit_core::{
    DragEvent, DragManager, Frame, HandleLabel, MouseButton, PointerEvent, PointerTracker, Scene,
    StrategyKind, Target, TargetId, hit_test_handles,
};
use kurbo::{Point, Size};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Record {
    /// An event raised on `target` while running script step `step`.
    Event {
        step: usize,
        target: String,
        event: DragEvent,
    },
    /// Geometry of a frame once the script has finished.
    Final {
        target: String,
        position: Option<Point>,
        size: Option<Size>,
    },
}

/// A grip that resizes its target from one handle.
#[derive(Debug, Clone, Copy)]
struct HandleGrip {
    grip: TargetId,
    target: TargetId,
    label: HandleLabel,
}

/// A live replay: scene, manager and the name tables tying them together.
pub struct Replay {
    scene: Scene,
    manager: DragManager,
    tracker: PointerTracker,
    /// Frames in stacking order.
    frames: Vec<(String, TargetId)>,
    names: HashMap<String, TargetId>,
    handle_grips: Vec<HandleGrip>,
    reported: HashMap<TargetId, usize>,
}

impl Replay {
    /// Build the scene and wire every attachment.
    pub fn new(scenario: &Scenario) -> ReplayResult<Self> {
        let mut replay = Self {
            scene: Scene::new(),
            manager: DragManager::new(),
            tracker: PointerTracker::new(),
            frames: Vec::new(),
            names: HashMap::new(),
            handle_grips: Vec::new(),
            reported: HashMap::new(),
        };

        // Ids first so parents may be declared after their children.
        for spec in &scenario.frames {
            if replay.names.contains_key(&spec.name) {
                return Err(ReplayError::DuplicateFrame(spec.name.clone()));
            }
            let id = Uuid::new_v4();
            replay.names.insert(spec.name.clone(), id);
            replay.frames.push((spec.name.clone(), id));
        }

        for spec in &scenario.frames {
            let parent = spec
                .parent
                .as_ref()
                .map(|name| replay.frame_id(name))
                .transpose()?;
            let frame = Frame {
                position: spec.position,
                size: spec.size,
                reports_bounds: spec.reports_bounds,
                parent,
                events: Vec::new(),
            };
            let id = replay.frame_id(&spec.name)?;
            replay.scene.insert(id, frame);
        }

        for attachment in &scenario.attach {
            let target = replay.frame_id(&attachment.target)?;
            let mut options = attachment.options.clone();
            if let Some(grip) = &attachment.grip {
                options.grip = Some(replay.element_id(grip));
            }
            if let Some(bounds) = &attachment.bounds {
                options.bounds = Some(replay.frame_id(bounds)?);
            }

            replay
                .manager
                .attach(&mut replay.scene, target, &options)
                .map_err(|source| ReplayError::Attach {
                    name: attachment.target.clone(),
                    source,
                })?;

            if let (StrategyKind::Resize, Some(grip), Some(label)) =
                (options.strategy, options.grip, options.handle_label)
            {
                replay.handle_grips.push(HandleGrip {
                    grip,
                    target,
                    label,
                });
            }
        }

        Ok(replay)
    }

    fn frame_id(&self, name: &str) -> ReplayResult<TargetId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ReplayError::UnknownFrame(name.to_string()))
    }

    /// Id of a named element, minting one for grips that are not frames.
    fn element_id(&mut self, name: &str) -> TargetId {
        *self
            .names
            .entry(name.to_string())
            .or_insert_with(Uuid::new_v4)
    }

    /// Frame name for an id, or the raw id for grips and unknown elements.
    pub fn describe(&self, id: TargetId) -> String {
        self.frames
            .iter()
            .find(|(_, frame)| *frame == id)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Element under `point`: handle grips first, then the topmost frame.
    pub fn hit(&self, point: Point) -> Option<TargetId> {
        let grip = self.handle_grips.iter().rev().find(|handle| {
            self.scene
                .frame(handle.target)
                .and_then(|frame| frame.bounding_rect())
                .and_then(|rect| hit_test_handles(rect, point, HANDLE_HIT_TOLERANCE))
                == Some(handle.label)
        });
        if let Some(handle) = grip {
            return Some(handle.grip);
        }

        self.frames.iter().rev().map(|(_, id)| *id).find(|id| {
            self.scene
                .frame(*id)
                .and_then(|frame| frame.bounding_rect())
                .is_some_and(|rect| rect.contains(point))
        })
    }

    fn dispatch(&mut self, hit: Option<TargetId>, event: PointerEvent) {
        self.manager.handle_event(&mut self.scene, hit, &event);
    }

    /// Apply one script step.
    pub fn apply(&mut self, step: &Step) -> ReplayResult<()> {
        match step {
            Step::Press { at, on, touch } => {
                let hit = match on {
                    Some(name) => Some(self.element_id(name)),
                    None => self.hit(*at),
                };
                let event = match touch {
                    Some(id) => self.tracker.touch_started(*id, *at),
                    None => {
                        let moved = self.tracker.mouse_moved(*at);
                        self.dispatch(None, moved);
                        self.tracker.mouse_pressed(MouseButton::Left)
                    }
                };
                let origin = hit
                    .and_then(|id| self.scene.frame(id))
                    .and_then(|frame| frame.position);
                let event = match (event, origin) {
                    (PointerEvent::Down(input), Some(origin)) => {
                        PointerEvent::Down(input.with_offset_in_target(*at - origin))
                    }
                    (event, _) => event,
                };
                log::debug!("Press at {:?} on {:?}", at, hit.map(|id| self.describe(id)));
                self.dispatch(hit, event);
            }
            Step::Move { to, touch } => {
                let event = match touch {
                    Some(id) => self.tracker.touch_moved(*id, *to),
                    None => self.tracker.mouse_moved(*to),
                };
                self.dispatch(None, event);
            }
            Step::Release { at, touch } => {
                let event = match touch {
                    Some(id) => self.tracker.touch_ended(*id, *at),
                    None => {
                        let moved = self.tracker.mouse_moved(*at);
                        self.dispatch(None, moved);
                        self.tracker.mouse_released(MouseButton::Left)
                    }
                };
                self.dispatch(None, event);
            }
            Step::Modifiers(modifiers) => self.tracker.set_modifiers(*modifiers),
            Step::Blur => self.dispatch(None, PointerEvent::Cancel),
            Step::Detach { target } => {
                let id = self.frame_id(target)?;
                let removed = self.manager.detach(&mut self.scene, id);
                log::debug!("Detached {} ({} registrations)", target, removed);
            }
        }
        Ok(())
    }

    /// Events raised since the last drain, in frame stacking order.
    pub fn drain_events(&mut self, step: usize) -> Vec<Record> {
        let mut records = Vec::new();
        for (name, id) in &self.frames {
            let Some(frame) = self.scene.frame(*id) else {
                continue;
            };
            let seen = self.reported.entry(*id).or_insert(0);
            records.extend(frame.events[*seen..].iter().map(|event| Record::Event {
                step,
                target: name.clone(),
                event: *event,
            }));
            *seen = frame.events.len();
        }
        records
    }

    /// Final geometry of every frame.
    pub fn finals(&self) -> Vec<Record> {
        self.frames
            .iter()
            .filter_map(|(name, id)| {
                self.scene.frame(*id).map(|frame| Record::Final {
                    target: name.clone(),
                    position: frame.position,
                    size: frame.size,
                })
            })
            .collect()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn manager(&self) -> &DragManager {
        &self.manager
    }

    /// Look up a frame by name.
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.names.get(name).and_then(|id| self.scene.frame(*id))
    }
}

/// Run a whole scenario and collect its output.
pub fn replay(scenario: &Scenario) -> ReplayResult<Vec<Record>> {
    let mut replay = Replay::new(scenario)?;
    let mut records = Vec::new();
    for (index, step) in scenario.script.iter().enumerate() {
        replay.apply(step)?;
        records.extend(replay.drain_events(index));
    }
    records.extend(replay.finals());
    Ok(records)
}
