use mapnav_app_shell::GestureOptions;
use mapnav_core::{Clock, GestureError};
use mapnav_foundation::gesture_constants::ESCAPE_KEY_CODE;
use mapnav_foundation::gestures::wheel_classifier::WHEEL_DELTA_QUANTUM;
use mapnav_foundation::{
    DragRotateOptions, EventData, MapEventKind, Modifiers, PlatformQuirks, PointerButton,
    RotateButton,
};
use mapnav_graphics::Point;
use mapnav_testing::{CameraCall, GestureTestRule, MockCamera};
use MapEventKind::*;

#[test]
fn wheel_tick_zooms_and_ends_after_quiet_period() {
    let mut rule = GestureTestRule::new();

    let event = rule.wheel(-WHEEL_DELTA_QUANTUM);
    assert!(event.is_default_prevented());
    assert_eq!(rule.events().count(Wheel), 1);

    rule.advance_by(400.0);
    let zoom = rule.camera().zoom;
    assert!((zoom - 0.0285).abs() < 0.001, "zoom {zoom}");
    assert!(rule.gestures().is_zooming());

    rule.advance_by(300.0);
    assert!(!rule.gestures().is_zooming());
    let kinds = rule.events().gesture_kinds();
    assert_eq!(&kinds[..2], &[MoveStart, ZoomStart]);
    assert_eq!(&kinds[kinds.len() - 2..], &[ZoomEnd, MoveEnd]);
}

#[test]
fn vetoed_wheel_does_not_zoom() {
    let mut rule = GestureTestRule::new();
    rule.events().prevent(Wheel);

    let event = rule.wheel(-WHEEL_DELTA_QUANTUM);
    rule.advance_by(100.0);

    assert!(!event.is_default_prevented());
    assert_eq!(rule.camera().zoom, 0.0);
    assert_eq!(rule.events().count(ZoomStart), 0);
}

#[test]
fn shift_press_is_claimed_by_box_zoom() {
    let mut rule = GestureTestRule::with_camera(MockCamera::new().with_zoom(3.0));

    rule.mouse_down_with(10.0, 10.0, PointerButton::Primary, Modifiers::SHIFT);
    rule.mouse_move(60.0, 80.0);
    rule.flush_frame();
    rule.mouse_up(60.0, 80.0);

    assert_eq!(rule.events().gesture_kinds(), vec![BoxZoomStart, BoxZoomEnd]);
    assert!(!rule.gestures().drag_pan().is_active());
    assert_eq!(
        rule.camera()
            .count(|call| matches!(call, CameraCall::FitBounds { .. })),
        1
    );
}

#[test]
fn escape_cancels_box_zoom() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down_with(10.0, 10.0, PointerButton::Primary, Modifiers::SHIFT);
    rule.mouse_move(60.0, 80.0);
    rule.key_down(ESCAPE_KEY_CODE);
    rule.mouse_up(60.0, 80.0);

    assert_eq!(rule.events().gesture_kinds(), vec![BoxZoomStart, BoxZoomCancel]);
    assert!(rule.gestures().box_zoom().listeners().is_empty());
}

#[test]
fn press_stops_camera_animation() {
    let mut rule = GestureTestRule::new();
    rule.mouse_down(10.0, 10.0);
    assert_eq!(rule.camera().calls(), &[CameraCall::Stop]);
}

#[test]
fn vetoed_press_starts_nothing() {
    let mut rule = GestureTestRule::new();
    rule.events().prevent(MouseDown);

    rule.mouse_down(10.0, 10.0);
    rule.mouse_move(50.0, 10.0);
    rule.flush_frame();

    assert!(rule.events().gesture_kinds().is_empty());
    assert!(rule.camera().calls().is_empty());
    assert!(!rule.gestures().is_moving());
}

#[test]
fn moves_between_frames_yield_one_drag() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(10.0, 10.0);
    for x in [12.0, 15.0, 20.0, 28.0, 40.0] {
        rule.mouse_move(x, 10.0);
    }
    assert!(rule.flush_frame());
    assert!(!rule.flush_frame());

    assert_eq!(
        rule.events().gesture_kinds(),
        vec![DragStart, MoveStart, Drag, Move]
    );
    // Raw moves are not forwarded while dragging.
    assert_eq!(rule.events().count(MouseMove), 0);
}

#[test]
fn click_after_drag_is_swallowed() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.mouse_move(20.0, 0.0);
    rule.flush_frame();
    rule.mouse_up(20.0, 0.0);
    let swallowed = rule.click(20.0, 0.0);

    assert!(swallowed.is_default_prevented());
    assert_eq!(rule.events().count(Click), 0);

    rule.mouse_down(20.0, 0.0);
    rule.mouse_up(20.0, 0.0);
    rule.click(20.0, 0.0);
    assert_eq!(rule.events().count(Click), 1);
}

#[test]
fn click_suppression_expires_with_the_next_timer_tick() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.mouse_move(20.0, 0.0);
    rule.mouse_up(20.0, 0.0);
    rule.advance_by(16.0);

    rule.mouse_down(20.0, 0.0);
    rule.mouse_up(20.0, 0.0);
    rule.click(20.0, 0.0);
    assert_eq!(rule.events().count(Click), 1);
}

#[test]
fn unclaimed_click_suppression_is_due_immediately() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(100.0, 100.0);
    rule.mouse_move(150.0, 100.0);
    rule.flush_frame();
    rule.mouse_up(150.0, 100.0);
    assert_eq!(rule.gestures().next_deadline(), Some(rule.clock().now()));

    // Released off the map: no click arrives, only the host's timer poll.
    assert!(rule.run_due_timers());
    assert_eq!(rule.gestures().next_deadline(), None);

    rule.advance_clock(5_000.0);
    rule.mouse_down(10.0, 10.0);
    rule.mouse_up(10.0, 10.0);
    rule.click(10.0, 10.0);
    assert_eq!(rule.events().count(Click), 1);
}

#[test]
fn click_needs_press_within_tolerance() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.mouse_up(5.0, 0.0);
    rule.click(5.0, 0.0);
    assert_eq!(rule.events().count(Click), 0);

    rule.mouse_down(0.0, 0.0);
    rule.mouse_up(2.0, 0.0);
    rule.click(2.0, 0.0);
    assert_eq!(rule.events().count(Click), 1);
    let click = rule.events().last(Click).expect("click");
    assert_eq!(click.point(), Some(Point::new(2.0, 0.0)));
}

#[test]
fn context_menu_during_press_waits_for_release() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down_with(50.0, 50.0, PointerButton::Secondary, Modifiers::NONE);
    let menu = rule.context_menu(50.0, 50.0);
    assert!(menu.is_default_prevented());
    assert_eq!(rule.events().count(ContextMenu), 0);

    rule.mouse_up_with(50.0, 50.0, PointerButton::Secondary, Modifiers::NONE);
    let kinds = rule.events().kinds();
    let menu_at = kinds.iter().position(|kind| *kind == ContextMenu);
    let up_at = kinds.iter().position(|kind| *kind == MouseUp);
    assert!(menu_at.is_some());
    assert!(menu_at < up_at);
}

#[test]
fn context_menu_is_dropped_after_rotation() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down_with(50.0, 50.0, PointerButton::Secondary, Modifiers::NONE);
    rule.context_menu(50.0, 50.0);
    rule.mouse_move_with(80.0, 50.0, PointerButton::Secondary, Modifiers::NONE);
    rule.flush_frame();
    assert!(rule.gestures().is_rotating());
    rule.mouse_up_with(80.0, 50.0, PointerButton::Secondary, Modifiers::NONE);

    assert_eq!(rule.events().count(ContextMenu), 0);
    assert_eq!(rule.events().count(RotateEnd), 1);
}

#[test]
fn context_menu_after_release_is_immediate() {
    let mut rule = GestureTestRule::new();
    rule.context_menu(50.0, 50.0);
    assert_eq!(rule.events().count(ContextMenu), 1);
}

#[test]
fn ctrl_click_rotates_instead_of_panning() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down_with(50.0, 50.0, PointerButton::Primary, Modifiers::CTRL);
    rule.mouse_move(70.0, 50.0);
    rule.flush_frame();

    assert!(rule.gestures().is_rotating());
    assert!(!rule.gestures().drag_pan().is_active());
    assert!((rule.camera().bearing - 16.0).abs() < 1e-9);
    assert_eq!(rule.user_select(), "none");

    rule.mouse_up(70.0, 50.0);
    assert_eq!(rule.user_select(), "auto");
}

#[test]
fn ctrl_secondary_rotates_with_platform_quirk() {
    let options = GestureOptions::default()
        .with_quirks(PlatformQuirks::default().with_ctrl_click_reports_secondary(true));
    let mut rule = GestureTestRule::with_options(options);

    rule.mouse_down_with(50.0, 50.0, PointerButton::Secondary, Modifiers::CTRL);
    rule.mouse_move(70.0, 50.0);
    rule.flush_frame();

    assert!(rule.gestures().is_rotating());
}

#[test]
fn left_button_rotation_excludes_pan() {
    let options = GestureOptions::default()
        .with_drag_rotate_options(DragRotateOptions::default().with_button(RotateButton::Left));
    let mut rule = GestureTestRule::with_options(options);

    rule.mouse_down(100.0, 100.0);
    assert!(rule.gestures().drag_rotate().is_engaged());
    assert!(!rule.gestures().drag_pan().is_engaged());

    rule.mouse_move(120.0, 110.0);
    rule.flush_frame();
    assert!(rule.gestures().drag_rotate().is_active());
    assert!(!rule.gestures().drag_pan().is_active());
    assert_eq!(rule.events().count(DragStart), 0);
    assert_eq!(rule.events().count(MoveStart), 1);
}

#[test]
fn second_button_during_pending_rotation_does_not_pan() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down_with(100.0, 100.0, PointerButton::Secondary, Modifiers::NONE);
    rule.mouse_down(100.0, 100.0);
    rule.mouse_move(120.0, 110.0);
    rule.flush_frame();

    assert!(rule.gestures().is_rotating());
    assert!(!rule.gestures().drag_pan().is_active());
    assert!(rule.gestures().drag_pan().listeners().is_empty());
    assert_eq!(rule.events().count(DragStart), 0);
}

#[test]
fn pending_pan_keeps_rotation_out() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(100.0, 100.0);
    rule.mouse_down_with(100.0, 100.0, PointerButton::Secondary, Modifiers::NONE);
    rule.mouse_move(120.0, 110.0);
    rule.flush_frame();

    assert!(rule.gestures().drag_pan().is_active());
    assert!(!rule.gestures().drag_rotate().is_engaged());
    assert_eq!(rule.events().count(RotateStart), 0);
}

#[test]
fn pan_and_wheel_zoom_overlap() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(100.0, 100.0);
    rule.mouse_move(120.0, 100.0);
    assert!(rule.gestures().is_moving());

    rule.wheel(-2.0);
    assert!(rule.gestures().is_zooming());
    rule.flush_frame();
    assert!(rule.camera().zoom > 0.0);

    rule.mouse_up(120.0, 100.0);
    assert!(!rule.gestures().is_moving());
    assert!(rule.gestures().is_zooming());

    rule.advance_by(300.0);
    assert!(!rule.gestures().is_zooming());
    assert_eq!(rule.events().count(DragEnd), 1);
    assert_eq!(rule.events().count(ZoomEnd), 1);
    assert_eq!(rule.events().count(MoveStart), 2);
}

#[test]
fn next_deadline_tracks_zoom_end() {
    let mut rule = GestureTestRule::new();
    assert_eq!(rule.gestures().next_deadline(), None);

    rule.wheel(-2.0);
    rule.flush_frame();
    assert_eq!(rule.gestures().next_deadline(), Some(10_200.0));
}

#[test]
fn blur_ends_drags_without_fling() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.advance_clock(20.0);
    rule.mouse_move(60.0, 0.0);
    rule.flush_frame();
    rule.blur();

    assert_eq!(
        rule.events().gesture_kinds(),
        vec![DragStart, MoveStart, Drag, Move, DragEnd, MoveEnd]
    );
    assert!(rule.camera().pan_by_calls().is_empty());
}

#[test]
fn fling_after_fast_drag() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.advance_clock(16.0);
    rule.mouse_move(30.0, 0.0);
    rule.flush_frame();
    rule.advance_clock(16.0);
    rule.mouse_move(60.0, 0.0);
    rule.flush_frame();
    rule.mouse_up(60.0, 0.0);

    let flings = rule.camera().pan_by_calls();
    assert_eq!(flings.len(), 1);
    assert!(flings[0].0.x < 0.0);
    assert_eq!(rule.events().count(MoveEnd), 0);
}

#[test]
fn disabling_a_handler_mid_drag_ends_it() {
    let mut rule = GestureTestRule::new();

    rule.mouse_down(0.0, 0.0);
    rule.mouse_move(30.0, 0.0);
    rule.gestures_mut().drag_pan_mut().disable();

    assert_eq!(
        rule.events().gesture_kinds(),
        vec![DragStart, MoveStart, DragEnd, MoveEnd]
    );
    rule.mouse_move(60.0, 0.0);
    rule.flush_frame();
    assert_eq!(rule.events().count(Drag), 0);
}

#[test]
fn single_finger_pans() {
    let mut rule = GestureTestRule::new();

    rule.touch_start(&[(10.0, 10.0)]);
    rule.touch_move(&[(40.0, 10.0)]);
    rule.flush_frame();
    rule.touch_end(&[(40.0, 10.0)]);

    assert_eq!(
        rule.events().gesture_kinds(),
        vec![DragStart, MoveStart, Drag, Move, DragEnd, MoveEnd]
    );
    assert_eq!(rule.events().count(TouchMove), 0);
    let end = rule.events().last(TouchEnd).expect("touchend");
    assert_eq!(end.point(), Some(Point::new(40.0, 10.0)));
}

#[test]
fn two_finger_touch_reports_centroid_without_panning() {
    let mut rule = GestureTestRule::new();

    rule.touch_start(&[(0.0, 0.0), (20.0, 40.0)]);
    rule.touch_move(&[(10.0, 0.0), (30.0, 40.0)]);

    assert!(rule.events().gesture_kinds().is_empty());
    let start = rule.events().last(TouchStart).expect("touchstart");
    match start.data {
        EventData::Touch { points, point, .. } => {
            assert_eq!(points.len(), 2);
            assert_eq!(point, Point::new(10.0, 20.0));
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert_eq!(rule.events().count(TouchMove), 1);
}

#[test]
fn vetoed_touch_start_does_not_pan() {
    let mut rule = GestureTestRule::new();
    rule.events().prevent(TouchStart);

    rule.touch_start(&[(10.0, 10.0)]);
    rule.touch_move(&[(40.0, 10.0)]);
    rule.flush_frame();

    assert!(rule.events().gesture_kinds().is_empty());
}

#[test]
fn non_interactive_map_ignores_gestures() {
    let mut rule = GestureTestRule::with_options(GestureOptions::default().with_interactive(false));

    rule.mouse_down(0.0, 0.0);
    rule.mouse_move(30.0, 0.0);
    rule.flush_frame();
    rule.mouse_up(30.0, 0.0);
    let wheel = rule.wheel(-WHEEL_DELTA_QUANTUM);
    rule.advance_by(100.0);

    assert!(rule.events().gesture_kinds().is_empty());
    assert!(rule.camera().calls().is_empty());
    assert!(!wheel.is_default_prevented());
    assert_eq!(rule.events().count(MouseDown), 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    let bad_tolerance = GestureTestRule::try_with(
        MockCamera::new(),
        GestureOptions::default().with_click_tolerance(-1.0),
    );
    assert_eq!(
        bad_tolerance.err(),
        Some(GestureError::InvalidClickTolerance { value: -1.0 })
    );

    let bad_range =
        GestureTestRule::try_with(MockCamera::new().with_zoom_range(5.0, 2.0), GestureOptions::default());
    assert_eq!(
        bad_range.err(),
        Some(GestureError::InvalidZoomRange { min: 5.0, max: 2.0 })
    );
}
