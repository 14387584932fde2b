//! Trajectory lines that start on the marker boundary instead of its center.

use super::classify::HIGHLIGHT;
use super::coords::map_to_target;
use super::error::VizError;
use super::types::{Orientation, Point, RenderContext, Segment};
use crate::models::Event;

const TRAJECTORY_STROKE: f64 = 0.4;

/// Move `start` toward `end` by `radius + selection_outline_delta`.
///
/// A zero-length `start → end` vector has no direction; that case is reported
/// as `DegenerateGeometry` rather than dividing by zero.
pub fn clip_to_marker_boundary(
    start: Point,
    end: Point,
    radius: f64,
    selection_outline_delta: f64,
) -> Result<Point, VizError> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = dx.hypot(dy);
    if !length.is_finite() || length < f64::EPSILON {
        return Err(VizError::DegenerateGeometry {
            x: start.x,
            y: start.y,
        });
    }
    let reach = radius + selection_outline_delta;
    Ok(Point::new(
        start.x + dx / length * reach,
        start.y + dy / length * reach,
    ))
}

/// Trajectory segment for a marker at `position`, if one should be drawn.
///
/// Only selected events with a resolved end-location get a line, and never in
/// the goal view (the shot origin is off-diagram there).
pub fn trajectory_for(
    event: &Event,
    position: Point,
    radius: f64,
    is_selected: bool,
    ctx: &RenderContext,
) -> Option<Segment> {
    if !is_selected || ctx.orientation == Orientation::GoalView {
        return None;
    }
    let end = event.end_location.as_ref()?;
    let result = map_to_target(end, ctx.orientation, true).and_then(|to| {
        clip_to_marker_boundary(position, to, radius, ctx.selection_outline_delta)
            .map(|from| (from, to))
    });
    match result {
        Ok((from, to)) => Some(Segment {
            from,
            to,
            stroke: HIGHLIGHT,
            stroke_width: TRAJECTORY_STROKE,
        }),
        Err(e) => {
            log::trace!("no trajectory for {}: {e}", event.key());
            None
        }
    }
}
