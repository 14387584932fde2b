//! Coordinate mapping from pitch space (120 × 80, optional z) into view space.
//!
//! - `Horizontal`: identity
//! - `Vertical` / `HalfVertical`: rotate 90°, `(x, y) -> (y, 120 - x)`
//! - `GoalView`: end-locations with a height, `(x, y, z) -> (y, 5.34 - z)`
//!
//! Nothing is clamped here; cropping the half-vertical view is the host viewport's job.

use super::error::VizError;
use super::types::{Orientation, Point};
use super::util::map_range;
use crate::models::{Event, GOAL_HEIGHT, Location, PITCH_LENGTH};

/// Map a source location into target space for `orientation`.
///
/// `is_end_location` only matters for `GoalView`, which can only project shot
/// end-locations (the shot origin is off-diagram).
pub fn map_to_target(
    location: &Location,
    orientation: Orientation,
    is_end_location: bool,
) -> Result<Point, VizError> {
    match orientation {
        Orientation::Horizontal => Ok(Point::new(location.x, location.y)),
        Orientation::Vertical | Orientation::HalfVertical => {
            Ok(Point::new(location.y, PITCH_LENGTH - location.x))
        }
        Orientation::GoalView => {
            if !is_end_location {
                return Err(VizError::MissingCoordinateData {
                    orientation,
                    needed: "end-location",
                });
            }
            let z = location.z.ok_or(VizError::MissingCoordinateData {
                orientation,
                needed: "height (z)",
            })?;
            Ok(Point::new(
                location.y,
                map_range(z, 0.0, GOAL_HEIGHT, GOAL_HEIGHT, 0.0),
            ))
        }
    }
}

/// Inverse of `map_to_target` for the planar orientations.
///
/// Returns `None` for `GoalView`, where the pitch length coordinate is not recoverable.
pub fn map_from_target(point: Point, orientation: Orientation) -> Option<Location> {
    match orientation {
        Orientation::Horizontal => Some(Location::new(point.x, point.y)),
        Orientation::Vertical | Orientation::HalfVertical => {
            Some(Location::new(PITCH_LENGTH - point.y, point.x))
        }
        Orientation::GoalView => None,
    }
}

/// Where an event's marker sits: its end-location in `GoalView`, its origin otherwise.
pub fn marker_position(event: &Event, orientation: Orientation) -> Result<Point, VizError> {
    match orientation {
        Orientation::GoalView => {
            let end = event
                .end_location
                .as_ref()
                .ok_or(VizError::MissingCoordinateData {
                    orientation,
                    needed: "end-location",
                })?;
            map_to_target(end, orientation, true)
        }
        _ => map_to_target(&event.location, orientation, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    #[test]
    fn vertical_rotates_and_flips_length() {
        let p = map_to_target(&Location::new(30.0, 40.0), Orientation::Vertical, false).unwrap();
        assert_eq!(p, Point::new(40.0, 90.0));
        let p = map_to_target(&Location::new(30.0, 40.0), Orientation::HalfVertical, false)
            .unwrap();
        assert_eq!(p, Point::new(40.0, 90.0));
    }

    #[test]
    fn goal_view_needs_height() {
        let flat = Location::new(120.0, 38.0);
        let err = map_to_target(&flat, Orientation::GoalView, true).unwrap_err();
        assert!(matches!(err, VizError::MissingCoordinateData { .. }));

        let high = Location::with_height(120.0, 38.0, 1.34);
        let p = map_to_target(&high, Orientation::GoalView, true).unwrap();
        assert_eq!(p.x, 38.0);
        assert!((p.y - 4.0).abs() < 1e-9);

        // Start points never project onto the goal frame.
        assert!(map_to_target(&high, Orientation::GoalView, false).is_err());
    }

    #[test]
    fn marker_position_uses_end_location_in_goal_view() {
        let shot = Event::new(0, EventKind::Shot, Location::new(100.0, 40.0), "Saved")
            .with_end_location(Location::with_height(120.0, 41.0, 0.5));
        let p = marker_position(&shot, Orientation::GoalView).unwrap();
        assert_eq!(p.x, 41.0);
        let p = marker_position(&shot, Orientation::Horizontal).unwrap();
        assert_eq!(p, Point::new(100.0, 40.0));
    }
}
