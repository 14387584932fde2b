//! Public types and constants for the visualization module.

use crate::models::{EventKey, EventKind};
use serde::{Deserialize, Serialize};

/// A point in target (view) space, in pitch units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Rendering rotation/cropping mode, chosen per visualization instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Full pitch, attack left to right.
    Horizontal,
    /// Full pitch rotated 90°, attack towards the top.
    Vertical,
    /// Vertical rotation with the host viewport cropped to the attacking half.
    HalfVertical,
    /// Goal-mouth projection of shot end-locations.
    GoalView,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::HalfVertical,
        Orientation::GoalView,
    ];

    /// Host view box for this orientation (pitch units, y grows downward).
    pub fn view_box(&self) -> ViewBox {
        match self {
            Orientation::Horizontal => ViewBox::new(-2.0, -2.0, 124.0, 84.0),
            Orientation::Vertical => ViewBox::new(0.0, -2.0, 80.0, 124.0),
            Orientation::HalfVertical => ViewBox::new(-2.0, -2.0, 84.0, 64.0),
            Orientation::GoalView => ViewBox::new(35.0, 1.0, 10.0, 5.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::HalfVertical => "half-vertical",
            Orientation::GoalView => "goalview",
        }
    }
}

/// SVG-style view box: `min_x min_y width height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x
            && p.x <= self.min_x + self.width
            && p.y >= self.min_y
            && p.y <= self.min_y + self.height
    }

    /// Height / width.
    pub fn aspect(&self) -> f64 {
        self.height / self.width
    }
}

/// Explicit rendering parameters passed to every pure visualization function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    pub orientation: Orientation,
    /// Extra distance added to the marker radius when clipping a selected trajectory.
    pub selection_outline_delta: f64,
    /// Attach 1-based ordinals to every marker.
    pub show_labels: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            selection_outline_delta: DEFAULT_SELECTION_OUTLINE_DELTA,
            show_labels: false,
        }
    }
}

impl RenderContext {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }
}

pub const DEFAULT_SELECTION_OUTLINE_DELTA: f64 = 0.5;

/// RGBA color with CSS-style alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// `rgb(..)` when opaque, `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Derived marker style; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub radius: f64,
}

/// Highlight ring drawn around a selected marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineRing {
    pub radius: f64,
    pub stroke: Rgba,
    pub stroke_width: f64,
    /// Dash length in pitch units; `None` for a solid ring.
    pub dash: Option<f64>,
}

/// Line segment from the marker boundary to the resolved end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

/// Ordinal text placed above a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// 1-based position in the supplied event list.
    pub ordinal: usize,
    pub position: Point,
    pub color: Rgba,
    pub font_size: f64,
}

/// One drawable primitive group handed to the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableMarker {
    pub key: EventKey,
    pub kind: EventKind,
    pub position: Point,
    pub style: StyleDescriptor,
    pub selected: bool,
    pub outline: Option<OutlineRing>,
    pub trajectory: Option<Segment>,
    pub label: Option<Label>,
}

impl DrawableMarker {
    /// Whether `p` falls inside the marker disc (including its outline ring).
    pub fn contains(&self, p: Point) -> bool {
        let r = self
            .outline
            .map(|o| o.radius)
            .unwrap_or(self.style.radius)
            .max(self.style.radius);
        self.position.distance(p) <= r
    }
}
