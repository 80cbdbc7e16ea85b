//! End-to-end gesture tests driving the manager through an in-memory scene.

use dragkit_core::{
    Attached, DragError, DragEvent, DragManager, DragOptions, Frame, HandleLabel, ListenerScope,
    Modifiers, PointerEvent, PointerInput, Scene, SizeBound, StrategyKind, TargetId,
};
use kurbo::{Point, Size, Vec2};
use uuid::Uuid;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn held(x: f64, y: f64) -> PointerInput {
    PointerInput::mouse(Point::new(x, y), 1)
}

fn released(x: f64, y: f64) -> PointerInput {
    PointerInput::mouse(Point::new(x, y), 0)
}

/// Press on `element`, move through `path`, release at the last point.
fn drag(manager: &mut DragManager, scene: &mut Scene, element: TargetId, path: &[(f64, f64)]) {
    let (x0, y0) = path[0];
    manager.press(scene, element, &held(x0, y0));
    for &(x, y) in &path[1..] {
        manager.pointer_move(scene, &held(x, y));
    }
    let (xn, yn) = path[path.len() - 1];
    manager.release(scene, &released(xn, yn));
}

fn frame(scene: &Scene, id: TargetId) -> &Frame {
    scene.frame(id).expect("frame exists")
}

#[test]
fn test_sub_threshold_press_is_a_click() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::new(10.0, 20.0), Size::new(30.0, 30.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (2.0, 2.0), (3.0, -3.0), (4.0, 0.0)]);

    let f = frame(&scene, id);
    assert!(f.events.is_empty());
    assert_eq!(f.position, Some(Point::new(10.0, 20.0)));
    assert!(!manager.has_live_gesture(id));
    assert!(!scene.is_listening(ListenerScope::Window));
}

#[test]
fn test_translate_offset_has_no_drift() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::new(10.0, 20.0), Size::new(30.0, 30.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(100.0, 100.0));
    // Crosses the 6px threshold here; offsets are measured from this point.
    manager.pointer_move(&mut scene, &held(106.0, 100.0));
    for i in 0..50 {
        let t = i as f64 * 0.37;
        manager.pointer_move(&mut scene, &held(106.0 + t, 100.0 - t * 0.1));
    }
    manager.pointer_move(&mut scene, &held(136.0, 95.0));
    manager.release(&mut scene, &released(136.0, 95.0));

    let f = frame(&scene, id);
    assert_eq!(f.position, Some(Point::new(40.0, 15.0)));
    assert_eq!(f.count("drag-start"), 1);
    assert_eq!(f.count("drag-end"), 1);
    assert_eq!(
        f.events.first(),
        Some(&DragEvent::DragStart { offset: Vec2::ZERO })
    );
    assert_eq!(
        f.last_event(),
        Some(&DragEvent::DragEnd {
            offset: Vec2::new(30.0, -5.0)
        })
    );
}

#[test]
fn test_translate_clamps_to_bounds() {
    init_logging();
    let mut scene = Scene::new();
    let bounds = scene.add(Frame::new(Point::ZERO, Size::new(100.0, 100.0)));
    let id = scene.add(Frame::new(Point::ZERO, Size::new(20.0, 20.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::default().with_bounds(bounds))
        .unwrap();

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (510.0, 500.0)]);

    assert_eq!(frame(&scene, id).position, Some(Point::new(80.0, 80.0)));
    // The bounds reference is never written.
    assert_eq!(frame(&scene, bounds).position, Some(Point::ZERO));
    assert!(frame(&scene, bounds).events.is_empty());
}

#[test]
fn test_bounds_are_requeried_every_move() {
    init_logging();
    let mut scene = Scene::new();
    let bounds = scene.add(Frame::new(Point::ZERO, Size::new(100.0, 100.0)));
    let id = scene.add(Frame::new(Point::ZERO, Size::new(20.0, 20.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::default().with_bounds(bounds))
        .unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    manager.pointer_move(&mut scene, &held(510.0, 500.0));
    assert_eq!(frame(&scene, id).position, Some(Point::new(80.0, 80.0)));

    // The container grows mid-drag.
    scene.frame_mut(bounds).unwrap().size = Some(Size::new(200.0, 200.0));
    manager.pointer_move(&mut scene, &held(511.0, 500.0));
    assert_eq!(frame(&scene, id).position, Some(Point::new(180.0, 180.0)));
    manager.release(&mut scene, &released(511.0, 500.0));
}

#[test]
fn test_bounds_without_rect_query_are_skipped() {
    init_logging();
    let mut scene = Scene::new();
    let bounds = scene.add(Frame::new(Point::ZERO, Size::new(100.0, 100.0)).without_bounds());
    let id = scene.add(Frame::new(Point::ZERO, Size::new(20.0, 20.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::default().with_bounds(bounds))
        .unwrap();

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (510.0, 500.0)]);

    assert_eq!(frame(&scene, id).position, Some(Point::new(500.0, 500.0)));
    assert_eq!(frame(&scene, id).count("drag-end"), 1);
}

#[test]
fn test_x_only_pins_y_on_every_move() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::new(10.0, 20.0), Size::new(5.0, 5.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::new(StrategyKind::XOnly))
        .unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(0.0, 10.0));
    for (x, y) in [(3.0, 40.0), (-8.0, -70.0), (25.0, 13.0)] {
        manager.pointer_move(&mut scene, &held(x, y));
        let position = frame(&scene, id).position.unwrap();
        assert_eq!(position.y, 20.0);
        assert_eq!(position.x, 10.0 + x);
    }
    manager.release(&mut scene, &released(25.0, 13.0));
}

#[test]
fn test_within_parent_uses_local_space() {
    init_logging();
    let mut scene = Scene::new();
    let parent = scene.add(Frame::new(Point::new(500.0, 500.0), Size::new(100.0, 100.0)));
    let child =
        scene.add(Frame::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0)).with_parent(parent));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, child, &DragOptions::new(StrategyKind::WithinParent))
        .unwrap();

    drag(&mut manager, &mut scene, child, &[(0.0, 0.0), (10.0, 0.0), (1010.0, 1000.0)]);
    assert_eq!(frame(&scene, child).position, Some(Point::new(80.0, 80.0)));

    drag(&mut manager, &mut scene, child, &[(0.0, 0.0), (-10.0, 0.0), (-1010.0, -1000.0)]);
    assert_eq!(frame(&scene, child).position, Some(Point::new(0.0, 0.0)));
}

fn resize_box(options: DragOptions) -> (Scene, DragManager, TargetId, TargetId) {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0)));
    let grip = Uuid::new_v4();
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &options.with_grip(grip))
        .unwrap();
    (scene, manager, id, grip)
}

#[test]
fn test_resize_se_handle() {
    let (mut scene, mut manager, id, grip) = resize_box(DragOptions::resize(HandleLabel::SE));

    drag(&mut manager, &mut scene, grip, &[(100.0, 50.0), (106.0, 50.0), (126.0, 40.0)]);

    let f = frame(&scene, id);
    assert_eq!(f.size, Some(Size::new(120.0, 40.0)));
    assert_eq!(f.position, Some(Point::new(0.0, 0.0)));
    assert_eq!(
        f.events,
        vec![
            DragEvent::ResizeStart {
                size: Size::new(100.0, 50.0)
            },
            DragEvent::ResizeMove {
                size: Size::new(120.0, 40.0)
            },
            DragEvent::ResizeEnd {
                size: Size::new(120.0, 40.0)
            },
        ]
    );
}

#[test]
fn test_resize_nw_handle() {
    let (mut scene, mut manager, id, grip) = resize_box(DragOptions::resize(HandleLabel::NW));

    drag(&mut manager, &mut scene, grip, &[(0.0, 0.0), (6.0, 0.0), (26.0, -10.0)]);

    let f = frame(&scene, id);
    assert_eq!(f.size, Some(Size::new(80.0, 60.0)));
    assert_eq!(f.position, Some(Point::new(20.0, -10.0)));
}

#[test]
fn test_resize_aspect_lock() {
    let (mut scene, mut manager, id, grip) =
        resize_box(DragOptions::resize(HandleLabel::SE).with_aspect_lock(true));

    drag(&mut manager, &mut scene, grip, &[(100.0, 50.0), (106.0, 50.0), (146.0, 55.0)]);

    assert_eq!(frame(&scene, id).size, Some(Size::new(140.0, 70.0)));
}

#[test]
fn test_resize_min_size() {
    let (mut scene, mut manager, id, grip) = resize_box(
        DragOptions::resize(HandleLabel::SE)
            .with_size_limits(SizeBound::new(40.0, 20.0), SizeBound::unbounded()),
    );

    drag(&mut manager, &mut scene, grip, &[(100.0, 50.0), (106.0, 50.0), (-200.0, -200.0)]);

    assert_eq!(frame(&scene, id).size, Some(Size::new(40.0, 20.0)));
}

#[test]
fn test_shift_held_locks_aspect() {
    let mut options = DragOptions::resize(HandleLabel::SE);
    options.shift_locks_aspect = true;
    let (mut scene, mut manager, id, grip) = resize_box(options);
    let shift = Modifiers {
        shift: true,
        ..Default::default()
    };

    manager.press(&mut scene, grip, &held(100.0, 50.0));
    manager.pointer_move(&mut scene, &held(106.0, 50.0));
    manager.pointer_move(&mut scene, &held(146.0, 55.0).with_modifiers(shift));
    assert_eq!(frame(&scene, id).size, Some(Size::new(140.0, 70.0)));
    manager.pointer_move(&mut scene, &held(146.0, 55.0));
    assert_eq!(frame(&scene, id).size, Some(Size::new(140.0, 55.0)));
    manager.release(&mut scene, &released(146.0, 55.0));
}

#[test]
fn test_attach_is_idempotent() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();

    let options = DragOptions::default();
    assert_eq!(manager.attach(&mut scene, id, &options).unwrap(), Attached::Wired);
    assert_eq!(manager.attach(&mut scene, id, &options).unwrap(), Attached::AlreadyWired);

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);

    assert_eq!(frame(&scene, id).count("drag-start"), 1);
    assert_eq!(frame(&scene, id).count("drag-end"), 1);
}

#[test]
fn test_second_touch_cancels_instead_of_ending() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &PointerInput::touch(1, Point::ZERO, 1));
    manager.pointer_move(&mut scene, &PointerInput::touch(1, Point::new(10.0, 0.0), 1));
    manager.pointer_move(&mut scene, &PointerInput::touch(1, Point::new(20.0, 0.0), 1));
    manager.handle_event(
        &mut scene,
        None,
        &PointerEvent::Down(PointerInput::touch(2, Point::new(80.0, 80.0), 2)),
    );
    manager.release(&mut scene, &PointerInput::touch(1, Point::new(20.0, 0.0), 1));

    let f = frame(&scene, id);
    assert_eq!(f.count("drag-end"), 0);
    assert_eq!(f.count("drag-cancel"), 1);
    assert!(!scene.is_listening(ListenerScope::Window));

    // A clean gesture afterwards ends normally.
    manager.press(&mut scene, id, &PointerInput::touch(3, Point::ZERO, 1));
    manager.pointer_move(&mut scene, &PointerInput::touch(3, Point::new(10.0, 0.0), 1));
    manager.pointer_move(&mut scene, &PointerInput::touch(3, Point::new(15.0, 4.0), 1));
    manager.release(&mut scene, &PointerInput::touch(3, Point::new(15.0, 4.0), 0));

    let f = frame(&scene, id);
    assert_eq!(f.count("drag-end"), 1);
    assert_eq!(
        f.last_event(),
        Some(&DragEvent::DragEnd {
            offset: Vec2::new(5.0, 4.0)
        })
    );
}

#[test]
fn test_window_listener_only_while_live() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();
    assert!(scene.is_listening(ListenerScope::Press(id)));
    assert!(!scene.is_listening(ListenerScope::Window));

    manager.press(&mut scene, id, &held(0.0, 0.0));
    assert!(scene.is_listening(ListenerScope::Window));
    manager.release(&mut scene, &released(0.0, 0.0));
    assert!(!scene.is_listening(ListenerScope::Window));

    for _ in 0..3 {
        drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (30.0, 0.0)]);
    }

    // One press listener plus four window attach/detach pairs.
    assert_eq!(scene.listener_calls(), (5, 4));
    assert_eq!(scene.listeners().len(), 1);
}

#[test]
fn test_zero_buttons_move_ends_and_detaches() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    manager.pointer_move(&mut scene, &held(20.0, 0.0));
    // Released outside the window: the next move arrives with no buttons.
    manager.pointer_move(&mut scene, &released(20.0, 0.0));

    let f = frame(&scene, id);
    assert_eq!(f.count("drag-end"), 1);
    assert!(!manager.has_live_gesture(id));
    assert!(!scene.is_listening(ListenerScope::Window));
}

#[test]
fn test_release_at_new_point_applies_final_move() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    manager.release(&mut scene, &released(17.0, 3.0));

    let f = frame(&scene, id);
    assert_eq!(f.position, Some(Point::new(7.0, 3.0)));
    assert_eq!(
        f.events,
        vec![
            DragEvent::DragStart { offset: Vec2::ZERO },
            DragEvent::DragMove {
                offset: Vec2::new(7.0, 3.0)
            },
            DragEvent::DragEnd {
                offset: Vec2::new(7.0, 3.0)
            },
        ]
    );
}

#[test]
fn test_second_press_while_live_is_ignored() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    manager.press(&mut scene, id, &held(300.0, 300.0));
    let session = manager.active_session(id).expect("session open");
    assert_eq!(session.press_point(), Point::new(0.0, 0.0));
    assert_eq!(session.start_point(), Point::new(10.0, 0.0));
    assert_eq!(session.grab_offset(), Some(Vec2::ZERO));
    manager.release(&mut scene, &released(10.0, 0.0));

    assert_eq!(frame(&scene, id).count("drag-start"), 1);
}

#[test]
fn test_handle_and_body_share_one_writer() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(100.0, 100.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::new(StrategyKind::Move))
        .unwrap();
    let grips: Vec<(HandleLabel, TargetId)> = HandleLabel::ALL
        .iter()
        .map(|label| (*label, Uuid::new_v4()))
        .collect();
    for (label, grip) in &grips {
        let options = DragOptions::resize(*label).with_grip(*grip);
        assert_eq!(manager.attach(&mut scene, id, &options).unwrap(), Attached::Wired);
    }

    manager.press(&mut scene, id, &held(50.0, 50.0));
    manager.pointer_move(&mut scene, &held(60.0, 50.0));
    // A handle press on the same box is ignored while the body is moving.
    manager.press(&mut scene, grips[0].1, &held(0.0, 0.0));
    assert!(!manager.has_live_gesture(grips[0].1));
    manager.pointer_move(&mut scene, &held(70.0, 60.0));
    manager.release(&mut scene, &released(70.0, 60.0));

    let f = frame(&scene, id);
    assert_eq!(f.position, Some(Point::new(10.0, 10.0)));
    assert_eq!(f.size, Some(Size::new(100.0, 100.0)));
    assert_eq!(f.count("resize-start"), 0);

    // Once idle, the handle drives a resize.
    let (_, se) = grips
        .iter()
        .find(|(label, _)| *label == HandleLabel::SE)
        .copied()
        .unwrap();
    drag(&mut manager, &mut scene, se, &[(110.0, 110.0), (120.0, 110.0), (140.0, 130.0)]);
    assert_eq!(frame(&scene, id).size, Some(Size::new(120.0, 120.0)));
}

#[test]
fn test_detach_mid_drag_cancels_and_cleans_up() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    assert_eq!(manager.detach(&mut scene, id), 1);

    assert!(!manager.is_wired(id));
    assert!(scene.listeners().is_empty());
    assert_eq!(frame(&scene, id).count("drag-cancel"), 1);
    assert_eq!(frame(&scene, id).count("drag-end"), 0);

    // Presses on a detached target do nothing.
    manager.press(&mut scene, id, &held(0.0, 0.0));
    assert!(!manager.has_live_gesture(id));

    // Re-activation is a fresh registration.
    assert_eq!(
        manager.attach(&mut scene, id, &DragOptions::default()).unwrap(),
        Attached::Wired
    );
    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (12.0, 0.0)]);
    assert_eq!(frame(&scene, id).count("drag-end"), 1);
}

#[test]
fn test_detach_target_removes_grips() {
    let (mut scene, mut manager, id, grip) = resize_box(DragOptions::resize(HandleLabel::E));
    assert!(manager.is_wired(grip));
    assert_eq!(manager.detach(&mut scene, id), 1);
    assert!(!manager.is_wired(grip));
    assert!(scene.listeners().is_empty());
}

#[test]
fn test_blur_cancels_without_end() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.pointer_move(&mut scene, &held(10.0, 0.0));
    manager.handle_event(&mut scene, None, &PointerEvent::Cancel);
    manager.release(&mut scene, &released(10.0, 0.0));

    let f = frame(&scene, id);
    assert_eq!(f.count("drag-cancel"), 1);
    assert_eq!(f.count("drag-end"), 0);
    assert!(!scene.is_listening(ListenerScope::Window));
}

#[test]
fn test_blur_while_pending_is_silent() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    manager.press(&mut scene, id, &held(0.0, 0.0));
    manager.cancel_all(&mut scene);

    assert!(frame(&scene, id).events.is_empty());
    assert!(!scene.is_listening(ListenerScope::Window));
}

#[test]
fn test_missing_position_fails_on_first_move() {
    init_logging();
    let mut scene = Scene::new();
    let mut f = Frame::new(Point::ZERO, Size::new(10.0, 10.0));
    f.position = None;
    let id = scene.add(f);
    let mut manager = DragManager::new();
    // Registration succeeds; the missing query only matters once moving.
    manager.attach(&mut scene, id, &DragOptions::default()).unwrap();

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);

    let f = frame(&scene, id);
    assert_eq!(f.count("drag-start"), 1);
    assert_eq!(f.count("drag-cancel"), 1);
    assert_eq!(f.count("drag-end"), 0);
    assert_eq!(f.position, None);
    assert!(!scene.is_listening(ListenerScope::Window));
}

#[test]
fn test_configuration_errors_at_attach() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();

    let err = manager
        .attach(&mut scene, id, &DragOptions::new(StrategyKind::Resize))
        .unwrap_err();
    assert_eq!(err, DragError::MissingHandleLabel);
    assert!(!manager.is_wired(id));

    let err = manager
        .attach(&mut scene, id, &DragOptions::default().with_threshold(-2.0))
        .unwrap_err();
    assert!(matches!(err, DragError::InvalidThreshold(_)));

    let stranger = Uuid::new_v4();
    let err = manager
        .attach(&mut scene, stranger, &DragOptions::default())
        .unwrap_err();
    assert_eq!(err, DragError::UnknownTarget(stranger));

    assert!(matches!(
        DragOptions::from_json(r#"{"strategy": "sideways"}"#),
        Err(DragError::UnknownStrategy(_))
    ));
    assert!(scene.listeners().is_empty());
}

#[test]
fn test_custom_threshold() {
    init_logging();
    let mut scene = Scene::new();
    let id = scene.add(Frame::new(Point::ZERO, Size::new(10.0, 10.0)));
    let mut manager = DragManager::new();
    manager
        .attach(&mut scene, id, &DragOptions::default().with_threshold(20.0))
        .unwrap();

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (12.0, 0.0), (19.0, 0.0)]);
    assert!(frame(&scene, id).events.is_empty());

    drag(&mut manager, &mut scene, id, &[(0.0, 0.0), (20.0, 0.0), (25.0, 0.0)]);
    assert_eq!(frame(&scene, id).position, Some(Point::new(5.0, 0.0)));
}
