//! Visualization core: turn match events into drawable pitch markers.
//!
//! - Orientation-aware coordinate mapping (`Horizontal`, `Vertical`, `HalfVertical`, `GoalView`)
//! - Kind/outcome classification into colors, xG-bucketed marker radius
//! - Trajectory lines clipped to the marker boundary
//! - Single-selection state shared by the markers and the detail panel
//! - Host surface rendering to **SVG** or **PNG**

pub mod classify;
pub mod coords;
pub mod detail;
pub mod error;
pub mod pitch;
pub mod selection;
pub mod surface;
pub mod trajectory;
pub mod types;
pub mod util;

// Re-export types for public API
pub use error::VizError;
pub use selection::{SelectionController, SelectionState, toggle};
pub use types::{
    DrawableMarker, Label, Orientation, OutlineRing, Point, RenderContext, Rgba, Segment,
    StyleDescriptor, ViewBox,
};

use crate::models::{Event, EventKey};

const LABEL_GAP: f64 = 0.5;
const LABEL_FONT: f64 = 2.0;
const GOAL_VIEW_LABEL_FONT: f64 = 0.5;

/// Compose mapping, classification and trajectory geometry into a drawable list.
///
/// Events whose orientation lacks coordinates (goal view without a 3D end-location)
/// are skipped; the rest are still drawn. Label ordinals are positions in `events`,
/// so a skipped event still consumes its number. Pure: the same inputs always
/// produce the same output.
pub fn render(
    events: &[Event],
    ctx: &RenderContext,
    selection: Option<&EventKey>,
) -> Vec<DrawableMarker> {
    let mut out = Vec::with_capacity(events.len());
    for (i, event) in events.iter().enumerate() {
        let key = event.key();
        let position = match coords::marker_position(event, ctx.orientation) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("skipping event {key}: {e}");
                continue;
            }
        };

        let selected = selection == Some(&key);
        let style = classify::classify(event, selected, ctx.orientation);
        let outline = selected.then(|| classify::outline_ring(event, &style, ctx.orientation));
        let trajectory = trajectory::trajectory_for(event, position, style.radius, selected, ctx);

        let label = ctx.show_labels.then(|| Label {
            ordinal: i + 1,
            position: Point::new(position.x, position.y - style.radius - LABEL_GAP),
            color: style.stroke,
            font_size: match ctx.orientation {
                Orientation::GoalView => GOAL_VIEW_LABEL_FONT,
                _ => LABEL_FONT,
            },
        });

        out.push(DrawableMarker {
            key,
            kind: event.kind,
            position,
            style,
            selected,
            outline,
            trajectory,
            label,
        });
    }
    out
}

/// `render` driven by a selection controller.
pub fn render_with(
    events: &[Event],
    ctx: &RenderContext,
    selection: &SelectionController,
) -> Vec<DrawableMarker> {
    render(events, ctx, selection.selected())
}

/// Topmost marker under a view-space point. Later markers are painted on top,
/// so the search runs back to front.
pub fn hit_test(markers: &[DrawableMarker], p: Point) -> Option<&EventKey> {
    markers.iter().rev().find(|m| m.contains(p)).map(|m| &m.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, Location};

    #[test]
    fn hit_test_prefers_the_marker_on_top() {
        let events = vec![
            Event::new(0, EventKind::Touch, Location::new(50.0, 40.0), "Carry"),
            Event::new(1, EventKind::Touch, Location::new(50.5, 40.0), "Pass"),
        ];
        let markers = render(&events, &RenderContext::default(), None);
        assert_eq!(
            hit_test(&markers, Point::new(50.3, 40.0)),
            Some(&EventKey::Index(1))
        );
        assert_eq!(hit_test(&markers, Point::new(10.0, 10.0)), None);
    }
}
