//! Adapter from winit window events to normalized pointer events.

use crate::input::{Modifiers, MouseButton, PointerEvent, PointerTracker};
use kurbo::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, TouchPhase, WindowEvent};

fn logical_point(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f64>(scale_factor);
    Point::new(logical.x, logical.y)
}

fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Feed a winit `WindowEvent` through the tracker.
///
/// Positions are converted to logical pixels so the drag threshold means
/// the same thing on every display. Losing focus maps to
/// [`PointerEvent::Cancel`].
pub fn pointer_event(
    tracker: &mut PointerTracker,
    event: &WindowEvent,
    scale_factor: f64,
) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(tracker.mouse_moved(logical_point(*position, scale_factor)))
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_button(*button)?;
            Some(match state {
                ElementState::Pressed => tracker.mouse_pressed(button),
                ElementState::Released => tracker.mouse_released(button),
            })
        }
        WindowEvent::Touch(touch) => {
            let point = logical_point(touch.location, scale_factor);
            Some(match touch.phase {
                TouchPhase::Started => tracker.touch_started(touch.id, point),
                TouchPhase::Moved => tracker.touch_moved(touch.id, point),
                TouchPhase::Ended => tracker.touch_ended(touch.id, point),
                TouchPhase::Cancelled => tracker.touch_cancelled(touch.id),
            })
        }
        WindowEvent::ModifiersChanged(modifiers) => {
            let state = modifiers.state();
            tracker.set_modifiers(Modifiers {
                shift: state.shift_key(),
                ctrl: state.control_key(),
                alt: state.alt_key(),
                meta: state.super_key(),
            });
            None
        }
        WindowEvent::Focused(false) => Some(PointerEvent::Cancel),
        _ => None,
    }
}
