use pitchviz::models::{Event, EventKey, EventKind, Location};
use pitchviz::viz::surface::{canvas_size, render_to_file, render_to_svg_string};
use pitchviz::viz::{self, Orientation, RenderContext};
use std::fs;
use tempfile::tempdir;

fn passes() -> Vec<Event> {
    vec![
        Event::new(0, EventKind::Pass, Location::new(30.0, 20.0), "Complete")
            .with_end_location(Location::new(55.0, 30.0)),
        Event::new(1, EventKind::Pass, Location::new(70.0, 60.0), "Out")
            .with_end_location(Location::new(72.0, 79.5)),
    ]
}

#[test]
fn every_orientation_renders_svg_and_png() {
    let dir = tempdir().unwrap();
    let events = passes();
    for o in Orientation::ALL {
        let ctx = RenderContext::new(o).with_labels(true);
        let markers = viz::render(&events, &ctx, Some(&EventKey::Index(0)));
        for ext in ["svg", "png"] {
            let path = dir.path().join(format!("{}.{ext}", o.as_str()));
            render_to_file(&markers, o, &path, 480).unwrap();
            let meta = fs::metadata(&path).expect("file created");
            assert!(meta.len() > 0, "{} has content", path.display());
        }
    }
}

#[test]
fn svg_contains_markers_and_labels() {
    let events = passes();
    let ctx = RenderContext::default().with_labels(true);
    let markers = viz::render(&events, &ctx, None);
    let svg = render_to_svg_string(&markers, Orientation::Horizontal, 600).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<circle"));
    assert_eq!(svg.matches("<text").count(), 2);
}

#[test]
fn canvas_follows_view_box_aspect() {
    assert_eq!(canvas_size(Orientation::Horizontal, 1240), (1240, 840));
    assert_eq!(canvas_size(Orientation::Vertical, 800), (800, 1240));
    assert_eq!(canvas_size(Orientation::GoalView, 1000), (1000, 500));
}

#[test]
fn zero_width_is_rejected() {
    let dir = tempdir().unwrap();
    let err = render_to_file(&[], Orientation::Horizontal, dir.path().join("x.svg"), 0);
    assert!(err.is_err());
}
