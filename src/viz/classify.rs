//! Event classification: (kind, outcome) → colors, and magnitude → marker radius.
//!
//! Design:
//! - Color is keyed by a `StyleBucket`; every kind/outcome pair lands in exactly
//!   one bucket, unknown pairs in `Fallback`.
//! - Radius is a step function of expected goals for shots; everything else uses a
//!   fixed radius. The goal-mouth view uses a much smaller fixed radius.
//! - Selection only adds a stroke increment and an outline ring; the base colors
//!   and radius are shared with the unselected marker.

use super::types::{Orientation, OutlineRing, Rgba, StyleDescriptor};
use crate::models::{Event, EventKind};

/// Radius of unscored markers (touches, passes, defensive actions, shots without xG).
pub const DEFAULT_MARKER_RADIUS: f64 = 1.0;
/// Fixed radius in the goal-mouth view.
pub const GOAL_VIEW_RADIUS: f64 = 0.2;

/// Upper xG bound (inclusive) → radius. Above the last bound: `XG_TOP_RADIUS`.
const XG_BUCKETS: [(f64, f64); 4] = [(0.05, 0.8), (0.15, 1.2), (0.25, 1.6), (0.35, 2.0)];
const XG_TOP_RADIUS: f64 = 2.4;

const PITCH_STROKE: f64 = 0.2;
const GOAL_VIEW_STROKE: f64 = 0.05;
/// Added to the base stroke width of a selected marker.
const PITCH_SELECTED_INCREMENT: f64 = 0.2;
const GOAL_VIEW_SELECTED_INCREMENT: f64 = 0.05;

// Palette
const GOAL_FILL: Rgba = Rgba::rgba(244, 63, 94, 0.6); // rose
const SHOT_FILL: Rgba = Rgba::rgba(0, 0, 0, 0.1);
const SHOT_STROKE: Rgba = Rgba::rgb(0, 0, 0);
const WARM_FILL: Rgba = Rgba::rgba(234, 179, 8, 0.5); // amber
const WARM_STROKE: Rgba = Rgba::rgb(234, 179, 8);
const PASS_FILL: Rgba = Rgba::rgba(59, 130, 246, 0.5); // blue
const PASS_STROKE: Rgba = Rgba::rgb(59, 130, 246);
const MISS_FILL: Rgba = Rgba::rgba(148, 163, 184, 0.4); // slate
const MISS_STROKE: Rgba = Rgba::rgb(100, 116, 139);

pub const HIGHLIGHT: Rgba = Rgba::rgb(255, 0, 0);
const TOUCH_HIGHLIGHT: Rgba = Rgba::rgb(239, 68, 68);

/// Visual category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleBucket {
    Goal,
    Shot,
    Assist,
    Touch,
    PassComplete,
    PassIncomplete,
    /// No explicit rule for this kind/outcome.
    Fallback,
}

impl StyleBucket {
    /// (fill, stroke)
    pub fn colors(&self) -> (Rgba, Rgba) {
        match self {
            StyleBucket::Goal => (GOAL_FILL, SHOT_STROKE),
            StyleBucket::Shot => (SHOT_FILL, SHOT_STROKE),
            StyleBucket::Assist | StyleBucket::Touch => (WARM_FILL, WARM_STROKE),
            StyleBucket::PassComplete => (PASS_FILL, PASS_STROKE),
            StyleBucket::PassIncomplete => (MISS_FILL, MISS_STROKE),
            StyleBucket::Fallback => (WARM_FILL, WARM_STROKE),
        }
    }
}

/// Bucket an event by kind and outcome tag.
pub fn style_bucket(event: &Event) -> StyleBucket {
    match event.kind {
        EventKind::Shot if event.outcome == "Goal" => StyleBucket::Goal,
        EventKind::Shot => StyleBucket::Shot,
        EventKind::Touch if event.is_assist() => StyleBucket::Assist,
        EventKind::Touch => StyleBucket::Touch,
        EventKind::Pass if event.outcome == "Complete" => StyleBucket::PassComplete,
        EventKind::Pass if event.outcome.is_empty() => StyleBucket::Fallback,
        EventKind::Pass => StyleBucket::PassIncomplete,
        EventKind::DefensiveAction => StyleBucket::Fallback,
    }
}

/// Radius bucket for an expected-goals value. Missing or non-finite values get
/// the unscored default.
pub fn shot_radius(magnitude: Option<f64>) -> f64 {
    let Some(xg) = magnitude.filter(|v| v.is_finite()) else {
        return DEFAULT_MARKER_RADIUS;
    };
    XG_BUCKETS
        .iter()
        .find(|(upper, _)| xg <= *upper)
        .map(|(_, r)| *r)
        .unwrap_or(XG_TOP_RADIUS)
}

/// Marker radius; independent of selection.
pub fn marker_radius(event: &Event, orientation: Orientation) -> f64 {
    if orientation == Orientation::GoalView {
        return GOAL_VIEW_RADIUS;
    }
    match event.kind {
        EventKind::Shot => shot_radius(event.magnitude),
        EventKind::Touch | EventKind::Pass | EventKind::DefensiveAction => DEFAULT_MARKER_RADIUS,
    }
}

/// Full style for an event. Pure.
pub fn classify(event: &Event, is_selected: bool, orientation: Orientation) -> StyleDescriptor {
    let (fill, stroke) = style_bucket(event).colors();
    let (base, increment) = match orientation {
        Orientation::GoalView => (GOAL_VIEW_STROKE, GOAL_VIEW_SELECTED_INCREMENT),
        _ => (PITCH_STROKE, PITCH_SELECTED_INCREMENT),
    };
    StyleDescriptor {
        fill,
        stroke,
        stroke_width: if is_selected { base + increment } else { base },
        radius: marker_radius(event, orientation),
    }
}

/// Highlight ring for a selected marker.
///
/// Touches get a thin dashed ring, directional events a solid red one; the goal
/// view shrinks everything to the goal-frame scale.
pub fn outline_ring(
    event: &Event,
    style: &StyleDescriptor,
    orientation: Orientation,
) -> OutlineRing {
    match (orientation, event.kind) {
        (Orientation::GoalView, _) => OutlineRing {
            radius: style.radius + 0.14,
            stroke: HIGHLIGHT,
            stroke_width: 0.1,
            dash: None,
        },
        (_, EventKind::Touch | EventKind::DefensiveAction) => OutlineRing {
            radius: style.radius + 0.5,
            stroke: TOUCH_HIGHLIGHT,
            stroke_width: 0.2,
            dash: Some(0.5),
        },
        (_, EventKind::Shot | EventKind::Pass) => OutlineRing {
            radius: style.radius + 0.6,
            stroke: HIGHLIGHT,
            stroke_width: 0.4,
            dash: None,
        },
    }
}
