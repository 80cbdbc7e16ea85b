//! Listener lifecycle and session ownership.
//!
//! The manager is the single owner of every registration and every live
//! gesture. Registrations are keyed by the press surface (the grip element
//! when one is given, otherwise the target); at most one gesture runs per
//! press surface and at most one per geometry target.

use crate::config::DragOptions;
use crate::error::{DragError, DragResult};
use crate::events::DragEvent;
use crate::gesture::{GestureRecognizer, GestureSignal};
use crate::input::{Modifiers, PointerEvent, PointerInput};
use crate::session::DragSession;
use crate::strategy::Strategy;
use crate::target::{ListenerScope, TargetHost, TargetId};
use kurbo::{Point, Size, Vec2};
use std::collections::{HashMap, HashSet};

/// Outcome of [`DragManager::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attached {
    /// A press listener was installed.
    Wired,
    /// The press surface was already wired; nothing changed.
    AlreadyWired,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    target: TargetId,
    bounds: Option<TargetId>,
    strategy: Strategy,
    threshold: f64,
}

#[derive(Debug, Clone)]
struct LiveGesture {
    target: TargetId,
    recognizer: GestureRecognizer,
    press_point: Point,
    grab_offset: Option<Vec2>,
    session: Option<DragSession>,
    last_point: Point,
    last_size: Option<Size>,
}

/// Wires targets for dragging and drives their sessions.
#[derive(Debug, Default)]
pub struct DragManager {
    registrations: HashMap<TargetId, Registration>,
    live: HashMap<TargetId, LiveGesture>,
    listeners: HashSet<ListenerScope>,
}

impl DragManager {
    /// Create a new drag manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target` for dragging with the given options.
    ///
    /// Options are validated before anything else, so configuration errors
    /// are always reported here and never mid-gesture. Attaching a press
    /// surface that is already wired is a no-op.
    pub fn attach(
        &mut self,
        host: &mut dyn TargetHost,
        target: TargetId,
        options: &DragOptions,
    ) -> DragResult<Attached> {
        let strategy = options.build_strategy()?;
        if host.target(target).is_none() {
            return Err(DragError::UnknownTarget(target));
        }

        let key = options.grip.unwrap_or(target);
        if self.registrations.contains_key(&key) {
            log::debug!("Press surface {} already wired, ignoring attach", key);
            return Ok(Attached::AlreadyWired);
        }

        self.registrations.insert(
            key,
            Registration {
                target,
                bounds: options.bounds,
                strategy,
                threshold: options.threshold_px,
            },
        );
        self.listen(host, ListenerScope::Press(key));
        log::debug!("Wired {} for {} on target {}", key, strategy.kind(), target);
        Ok(Attached::Wired)
    }

    /// Deactivate `id`: removes every registration whose press surface or
    /// target is `id`, cancelling any gesture they were running. Returns the
    /// number of registrations removed.
    pub fn detach(&mut self, host: &mut dyn TargetHost, id: TargetId) -> usize {
        let keys: Vec<TargetId> = self
            .registrations
            .iter()
            .filter(|(key, reg)| **key == id || reg.target == id)
            .map(|(key, _)| *key)
            .collect();

        for key in &keys {
            if self.live.contains_key(key) {
                self.cancel_gesture(host, *key);
            }
            self.registrations.remove(key);
            self.unlisten(host, ListenerScope::Press(*key));
        }
        self.sync_window_listener(host);
        keys.len()
    }

    /// Whether a press surface is wired.
    pub fn is_wired(&self, key: TargetId) -> bool {
        self.registrations.contains_key(&key)
    }

    /// Whether a press surface has a pending or dragging gesture.
    pub fn has_live_gesture(&self, key: TargetId) -> bool {
        self.live.contains_key(&key)
    }

    /// The open session for a press surface, if the threshold was crossed.
    pub fn active_session(&self, key: TargetId) -> Option<&DragSession> {
        self.live.get(&key).and_then(|g| g.session.as_ref())
    }

    /// Whether the shared move/release listener is currently attached.
    pub fn is_window_listening(&self) -> bool {
        self.listeners.contains(&ListenerScope::Window)
    }

    /// Route a normalized pointer event. `hit` is the element under the
    /// pointer for presses; it is ignored for other events.
    pub fn handle_event(
        &mut self,
        host: &mut dyn TargetHost,
        hit: Option<TargetId>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(input) => match hit {
                Some(element) => self.press(host, element, input),
                None if input.is_multi_touch() => self.cancel_all(host),
                None => {}
            },
            PointerEvent::Move(input) => self.pointer_move(host, input),
            PointerEvent::Up(input) => self.release(host, input),
            PointerEvent::Cancel => self.cancel_all(host),
        }
    }

    /// Press on a wired element.
    pub fn press(&mut self, host: &mut dyn TargetHost, element: TargetId, input: &PointerInput) {
        if input.is_multi_touch() {
            log::debug!("Multi-touch press, cancelling live gestures");
            self.cancel_all(host);
            return;
        }
        let Some(reg) = self.registrations.get(&element).copied() else {
            return;
        };
        if self.live.contains_key(&element) {
            log::debug!("Press on {} ignored, gesture already live", element);
            return;
        }
        if self.live.values().any(|g| g.target == reg.target) {
            log::debug!("Press on {} ignored, target {} is busy", element, reg.target);
            return;
        }

        let mut recognizer = GestureRecognizer::new(reg.threshold);
        if let GestureSignal::Pressed(point) = recognizer.press(input) {
            self.live.insert(
                element,
                LiveGesture {
                    target: reg.target,
                    recognizer,
                    press_point: point,
                    grab_offset: input.offset_in_target,
                    session: None,
                    last_point: point,
                    last_size: None,
                },
            );
            self.sync_window_listener(host);
        }
    }

    /// Pointer moved anywhere in the window.
    pub fn pointer_move(&mut self, host: &mut dyn TargetHost, input: &PointerInput) {
        for key in self.live_keys() {
            let signal = match self.live.get_mut(&key) {
                Some(gesture) => gesture.recognizer.motion(input),
                None => continue,
            };
            self.apply_signal(host, key, signal, input.modifiers);
        }
    }

    /// Pointer released anywhere in the window.
    pub fn release(&mut self, host: &mut dyn TargetHost, input: &PointerInput) {
        for key in self.live_keys() {
            let signal = match self.live.get_mut(&key) {
                Some(gesture) => gesture.recognizer.release(input),
                None => continue,
            };
            self.apply_signal(host, key, signal, input.modifiers);
        }
    }

    /// Abort every live gesture (window blur, focus loss, touch cancel).
    /// No `*-end` event fires; open sessions raise `*-cancel` instead.
    pub fn cancel_all(&mut self, host: &mut dyn TargetHost) {
        for key in self.live_keys() {
            self.cancel_gesture(host, key);
        }
    }

    fn live_keys(&self) -> Vec<TargetId> {
        self.live.keys().copied().collect()
    }

    fn apply_signal(
        &mut self,
        host: &mut dyn TargetHost,
        key: TargetId,
        signal: GestureSignal,
        modifiers: Modifiers,
    ) {
        match signal {
            GestureSignal::None | GestureSignal::Pressed(_) => {}
            GestureSignal::Start(point) => self.open_session(host, key, point),
            GestureSignal::Move(point) => {
                if let Err(e) = self.step(host, key, point, modifiers) {
                    log::warn!("{}, cancelling gesture", e);
                    self.cancel_gesture(host, key);
                }
            }
            GestureSignal::End(point) => {
                let moved = self.live.get(&key).map(|g| g.last_point != point);
                if moved == Some(true) {
                    if let Err(e) = self.step(host, key, point, modifiers) {
                        log::warn!("{}, cancelling gesture", e);
                        self.cancel_gesture(host, key);
                        return;
                    }
                }
                self.end_session(host, key);
            }
            GestureSignal::Click(_) => {
                log::debug!("Press on {} released below threshold", key);
                self.live.remove(&key);
                self.sync_window_listener(host);
            }
            GestureSignal::Cancel => self.discard(host, key),
        }
    }

    fn open_session(&mut self, host: &mut dyn TargetHost, key: TargetId, point: Point) {
        let Some(reg) = self.registrations.get(&key).copied() else {
            self.discard(host, key);
            return;
        };
        let Some(gesture) = self.live.get_mut(&key) else {
            return;
        };
        let Some(target) = host.target_mut(reg.target) else {
            log::warn!("Target {} disappeared before drag start", reg.target);
            self.discard(host, key);
            return;
        };

        let session = DragSession::open(
            key,
            reg.target,
            &*target,
            reg.bounds,
            reg.strategy,
            gesture.press_point,
            point,
        )
        .with_grab_offset(gesture.grab_offset);
        let event = if reg.strategy.is_resize() {
            DragEvent::ResizeStart {
                size: session.initial_size().unwrap_or(Size::ZERO),
            }
        } else {
            DragEvent::DragStart { offset: Vec2::ZERO }
        };
        gesture.last_size = session.initial_size();
        gesture.last_point = point;
        gesture.session = Some(session);
        target.raise(&event);
        log::debug!("{} started on {}", event.name(), reg.target);
    }

    fn step(
        &mut self,
        host: &mut dyn TargetHost,
        key: TargetId,
        point: Point,
        modifiers: Modifiers,
    ) -> DragResult<()> {
        let Some(gesture) = self.live.get_mut(&key) else {
            return Ok(());
        };
        let Some(session) = gesture.session.as_mut() else {
            return Ok(());
        };
        gesture.last_point = point;

        let offset = session.update(point);
        let strategy = *session.strategy();
        let bounds = strategy.query_bounds(&*host, session);
        let resolved = strategy.resolve(session, offset, bounds, modifiers)?;

        let target_id = session.target();
        let target = host
            .target_mut(target_id)
            .ok_or(DragError::UnknownTarget(target_id))?;
        if let Some(position) = resolved.position {
            target.set_position(position);
        }
        if let Some(size) = resolved.size {
            target.set_size(size);
            gesture.last_size = Some(size);
        }
        let event = if strategy.is_resize() {
            DragEvent::ResizeMove {
                size: gesture.last_size.unwrap_or(Size::ZERO),
            }
        } else {
            DragEvent::DragMove { offset }
        };
        target.raise(&event);
        Ok(())
    }

    fn end_session(&mut self, host: &mut dyn TargetHost, key: TargetId) {
        if let Some(mut gesture) = self.live.remove(&key) {
            if let Some(session) = gesture.session.as_mut() {
                session.close();
                let event = if session.strategy().is_resize() {
                    DragEvent::ResizeEnd {
                        size: gesture.last_size.unwrap_or(Size::ZERO),
                    }
                } else {
                    DragEvent::DragEnd {
                        offset: session.movement_offset(),
                    }
                };
                if let Some(target) = host.target_mut(session.target()) {
                    target.raise(&event);
                }
                log::debug!("{} on {}", event.name(), session.target());
            }
        }
        self.sync_window_listener(host);
    }

    fn cancel_gesture(&mut self, host: &mut dyn TargetHost, key: TargetId) {
        if let Some(gesture) = self.live.get_mut(&key) {
            gesture.recognizer.cancel();
        }
        self.discard(host, key);
    }

    /// Drop a gesture through the cancel path.
    fn discard(&mut self, host: &mut dyn TargetHost, key: TargetId) {
        if let Some(mut gesture) = self.live.remove(&key) {
            if let Some(session) = gesture.session.as_mut() {
                session.close();
                let event = if session.strategy().is_resize() {
                    DragEvent::ResizeCancel
                } else {
                    DragEvent::DragCancel
                };
                if let Some(target) = host.target_mut(session.target()) {
                    target.raise(&event);
                }
                log::debug!("{} on {}", event.name(), session.target());
            }
        }
        self.sync_window_listener(host);
    }

    fn sync_window_listener(&mut self, host: &mut dyn TargetHost) {
        if self.live.is_empty() {
            self.unlisten(host, ListenerScope::Window);
        } else {
            self.listen(host, ListenerScope::Window);
        }
    }

    fn listen(&mut self, host: &mut dyn TargetHost, scope: ListenerScope) {
        if self.listeners.insert(scope) {
            host.listen(scope);
        }
    }

    fn unlisten(&mut self, host: &mut dyn TargetHost, scope: ListenerScope) {
        if self.listeners.remove(&scope) {
            host.unlisten(scope);
        }
    }
}
