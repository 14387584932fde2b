use pitchviz::models::{Event, EventKind, Location};
use pitchviz::viz::trajectory::{clip_to_marker_boundary, trajectory_for};
use pitchviz::viz::{Orientation, Point, RenderContext, VizError};

#[test]
fn start_moves_radius_plus_delta_toward_end() {
    let cases = [
        (Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0, 0.5),
        (Point::new(60.0, 40.0), Point::new(30.0, 10.0), 2.4, 0.5),
        (Point::new(5.0, 70.0), Point::new(5.0, 71.0), 0.8, 0.0),
    ];
    for (start, end, radius, delta) in cases {
        let p = clip_to_marker_boundary(start, end, radius, delta).unwrap();
        assert!((start.distance(p) - (radius + delta)).abs() < 1e-6);
        // Still on the start → end ray.
        let along = start.distance(p) + p.distance(end);
        assert!((along - start.distance(end)).abs() < 1e-6);
    }
}

#[test]
fn zero_length_is_degenerate() {
    let p = Point::new(60.0, 40.0);
    assert!(matches!(
        clip_to_marker_boundary(p, p, 1.0, 0.5),
        Err(VizError::DegenerateGeometry { .. })
    ));
}

#[test]
fn only_selected_events_with_end_get_a_line() {
    let ctx = RenderContext::default();
    let pass = Event::new(0, EventKind::Pass, Location::new(40.0, 40.0), "Complete")
        .with_end_location(Location::new(60.0, 40.0));
    let start = Point::new(40.0, 40.0);

    assert!(trajectory_for(&pass, start, 1.0, false, &ctx).is_none());

    let seg = trajectory_for(&pass, start, 1.0, true, &ctx).unwrap();
    assert!((seg.from.x - 41.5).abs() < 1e-9);
    assert_eq!(seg.to, Point::new(60.0, 40.0));
    assert!((seg.stroke_width - 0.4).abs() < 1e-9);

    let no_end = Event::new(1, EventKind::Pass, Location::new(40.0, 40.0), "Complete");
    assert!(trajectory_for(&no_end, start, 1.0, true, &ctx).is_none());

    let goal_ctx = RenderContext::new(Orientation::GoalView);
    assert!(trajectory_for(&pass, start, 0.2, true, &goal_ctx).is_none());
}

#[test]
fn vertical_lines_use_mapped_end() {
    let ctx = RenderContext::new(Orientation::Vertical);
    let pass = Event::new(0, EventKind::Pass, Location::new(30.0, 40.0), "Complete")
        .with_end_location(Location::new(50.0, 40.0));
    let start = Point::new(40.0, 90.0);
    let seg = trajectory_for(&pass, start, 1.0, true, &ctx).unwrap();
    assert_eq!(seg.to, Point::new(40.0, 70.0));
    assert!((seg.from.y - 88.5).abs() < 1e-9);
}
