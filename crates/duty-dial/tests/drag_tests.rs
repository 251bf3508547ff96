//! Tests for gesture tracking: hotspot hit-testing and quantised dispatch.

use duty_dial::{
    DialGeometry, DragSession, DragState, EditConfig, EditMode, EditSession, Handle, Handles,
    Point, PointerEvent, PointerPhase, TickCounter,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn setup() -> (DragSession, EditSession, TickCounter) {
    let config = EditConfig::new(10, 15, EditMode::Split).with_limit(8, 20);
    let session = EditSession::new(&config).unwrap();
    (
        DragSession::new(config.geometry),
        session,
        TickCounter::default(),
    )
}

/// A point on the ring at the given hour.
fn on_ring(hour: u8) -> Point {
    DialGeometry::default().handle_center(hour)
}

/// A point on the ring at an arbitrary angle.
fn at_angle(degrees: f64) -> Point {
    let g = DialGeometry::default();
    let c = g.center();
    let r = g.track_radius();
    let rad = degrees.to_radians();
    Point::new(c.x + r * rad.cos(), c.y + r * rad.sin())
}

fn event(point: Point, phase: PointerPhase) -> PointerEvent {
    PointerEvent::new(point.x, point.y, phase)
}

// ── Geometry ────────────────────────────────────────────────────────────────

#[test]
fn default_geometry_matches_reference_dial() {
    let g = DialGeometry::default();
    assert_eq!(g.center(), Point::new(113.0, 113.0));
    assert!((g.track_radius() - 99.0).abs() < 1e-9);
    assert!((g.handle_size() - 28.0 / 2f64.sqrt()).abs() < 1e-9);
    assert!((g.hotspot(6).radius - g.handle_size()).abs() < 1e-9);
}

#[test]
fn handle_at_six_sits_on_positive_x_axis() {
    let p = on_ring(6);
    assert!((p.x - 212.0).abs() < 1e-9);
    assert!((p.y - 113.0).abs() < 1e-9);
}

#[test]
fn geometry_rejects_stroke_wider_than_dial() {
    let g = DialGeometry {
        size: 20.0,
        stroke: 30.0,
        tap_scale: 2.0,
    };
    assert!(g.validate().is_err());
    assert!(DialGeometry::default().validate().is_ok());
}

#[test]
fn hour_under_pointer_follows_dial_layout() {
    let (drag, _, _) = setup();
    assert_eq!(drag.hour_at(Point::new(200.0, 113.0)), 6);
    assert_eq!(drag.hour_at(Point::new(113.0, 200.0)), 12);
    assert_eq!(drag.hour_at(Point::new(20.0, 113.0)), 18);
    assert_eq!(drag.hour_at(Point::new(113.0, 20.0)), 24);
}

// ── Hit testing ─────────────────────────────────────────────────────────────

#[test]
fn press_on_start_handle_starts_tracking_it() {
    let (mut drag, session, _) = setup();
    assert_eq!(drag.press(on_ring(10), session.handles()), Some(Handle::Start));
    assert_eq!(
        drag.state(),
        DragState::Tracking {
            handle: Handle::Start,
            last_dispatched: 10
        }
    );
}

#[test]
fn press_near_end_handle_within_tolerance_hits() {
    let (mut drag, session, _) = setup();
    let near = on_ring(15);
    let offset = Point::new(near.x + 15.0, near.y);
    assert_eq!(drag.press(offset, session.handles()), Some(Handle::End));
}

#[test]
fn press_outside_both_hotspots_starts_nothing() {
    let (mut drag, mut session, mut ticks) = setup();
    assert_eq!(drag.press(Point::new(113.0, 113.0), session.handles()), None);
    assert_eq!(drag.state(), DragState::WaitingForPress);

    assert_eq!(drag.drag(on_ring(9), &mut session, &mut ticks), None);
    assert_eq!(session.handles(), Handles::new(10, 15));
    assert_eq!(ticks.ticks, 0);
}

#[test]
fn start_wins_when_hotspots_overlap() {
    let (drag, _, _) = setup();
    let handles = Handles::new(10, 11);
    let a = on_ring(10);
    let b = on_ring(11);
    let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    assert_eq!(drag.hit_test(mid, handles), Some(Handle::Start));
}

// ── Quantised dispatch ──────────────────────────────────────────────────────

#[test]
fn moves_dispatch_only_when_the_hour_changes() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.press(on_ring(10), session.handles());

    assert_eq!(
        drag.drag(on_ring(9), &mut session, &mut ticks),
        Some(Handles::new(9, 15))
    );
    assert_eq!(ticks.ticks, 1);

    // 48° still quantises to 9 o'clock.
    assert_eq!(drag.drag(at_angle(48.0), &mut session, &mut ticks), None);
    assert_eq!(ticks.ticks, 1);

    assert_eq!(
        drag.drag(on_ring(8), &mut session, &mut ticks),
        Some(Handles::new(8, 15))
    );
    assert_eq!(ticks.ticks, 2);
}

#[test]
fn rejected_hour_is_still_remembered_for_the_gesture() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.press(on_ring(10), session.handles());
    drag.drag(on_ring(8), &mut session, &mut ticks);

    // 7 is outside the limit: ignored, but it becomes the last dispatched hour.
    assert_eq!(drag.drag(on_ring(7), &mut session, &mut ticks), None);
    assert_eq!(
        drag.state(),
        DragState::Tracking {
            handle: Handle::Start,
            last_dispatched: 7
        }
    );
    assert_eq!(session.handles(), Handles::new(8, 15));
    assert_eq!(ticks.ticks, 1);
}

#[test]
fn dragging_the_end_handle() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.press(on_ring(15), session.handles());
    assert_eq!(
        drag.drag(on_ring(18), &mut session, &mut ticks),
        Some(Handles::new(10, 18))
    );
}

#[test]
fn release_ends_the_gesture() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.press(on_ring(10), session.handles());
    drag.release();
    assert_eq!(drag.state(), DragState::WaitingForPress);
    assert_eq!(drag.drag(on_ring(9), &mut session, &mut ticks), None);
}

#[test]
fn event_stream_drives_a_full_gesture() {
    let (mut drag, mut session, mut ticks) = setup();
    let events = [
        event(on_ring(15), PointerPhase::Down),
        event(on_ring(16), PointerPhase::Move),
        event(on_ring(16), PointerPhase::Move),
        event(on_ring(17), PointerPhase::Move),
        event(on_ring(17), PointerPhase::Up),
        event(on_ring(19), PointerPhase::Move),
    ];
    let updates: Vec<Handles> = events
        .iter()
        .filter_map(|e| drag.handle_event(*e, &mut session, &mut ticks))
        .collect();
    assert_eq!(updates, vec![Handles::new(10, 16), Handles::new(10, 17)]);
    assert_eq!(ticks.ticks, 2);
    assert_eq!(session.handles(), Handles::new(10, 17));
}

#[test]
fn cancelled_pointer_returns_to_waiting() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.handle_event(event(on_ring(10), PointerPhase::Down), &mut session, &mut ticks);
    drag.handle_event(event(on_ring(10), PointerPhase::Cancel), &mut session, &mut ticks);
    assert_eq!(drag.state(), DragState::WaitingForPress);
}

#[test]
fn new_press_rehit_tests_against_moved_handles() {
    let (mut drag, mut session, mut ticks) = setup();
    drag.press(on_ring(10), session.handles());
    drag.drag(on_ring(12), &mut session, &mut ticks);
    drag.release();

    assert_eq!(drag.press(on_ring(10), session.handles()), None);
    assert_eq!(drag.press(on_ring(12), session.handles()), Some(Handle::Start));
}
