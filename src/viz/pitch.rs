//! Static pitch and goal-frame outlines per orientation, as primitive shapes in
//! view space. Constant geometry; the host surface strokes it before markers.

use super::types::{Orientation, Point, Rgba};

const LINE: Rgba = Rgba::rgb(203, 213, 225); // #CBD5E1
const LINE_WIDTH: f64 = 0.2;
const SPOT_RADIUS: f64 = 0.3;
const GOAL_FRAME: Rgba = Rgba::rgb(128, 128, 128);
const GROUND: Rgba = Rgba::rgb(0, 0, 0);

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Circle { center: Point, radius: f64 },
    /// Angles in degrees, measured clockwise on screen (y grows downward).
    Arc {
        center: Point,
        radius: f64,
        from_deg: f64,
        to_deg: f64,
    },
    Polyline(Vec<Point>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineElement {
    pub shape: Shape,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub filled: bool,
}

fn stroke(shape: Shape) -> OutlineElement {
    OutlineElement {
        shape,
        stroke: LINE,
        stroke_width: LINE_WIDTH,
        filled: false,
    }
}

fn fill(shape: Shape) -> OutlineElement {
    OutlineElement {
        filled: true,
        ..stroke(shape)
    }
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::Rect { x, y, w, h }
}

fn spot(x: f64, y: f64) -> OutlineElement {
    fill(Shape::Circle {
        center: Point::new(x, y),
        radius: SPOT_RADIUS,
    })
}

fn arc(cx: f64, cy: f64, from_deg: f64, to_deg: f64) -> OutlineElement {
    stroke(Shape::Arc {
        center: Point::new(cx, cy),
        radius: 10.0,
        from_deg,
        to_deg,
    })
}

/// Half-angle of the penalty arc outside the box (spot 6 units inside the box edge, radius 10).
fn penalty_arc_half_angle() -> f64 {
    (6.0f64 / 10.0).acos().to_degrees()
}

/// Outline elements for `orientation`, in drawing order.
pub fn outline(orientation: Orientation) -> Vec<OutlineElement> {
    let half = penalty_arc_half_angle();
    match orientation {
        Orientation::Horizontal => vec![
            stroke(rect(0.0, 0.0, 120.0, 80.0)),
            stroke(Shape::Polyline(vec![Point::new(60.0, 0.0), Point::new(60.0, 80.0)])),
            stroke(Shape::Circle {
                center: Point::new(60.0, 40.0),
                radius: 10.0,
            }),
            spot(60.0, 40.0),
            stroke(rect(0.0, 18.0, 18.0, 44.0)),
            stroke(rect(0.0, 30.0, 6.0, 20.0)),
            stroke(rect(102.0, 18.0, 18.0, 44.0)),
            stroke(rect(114.0, 30.0, 6.0, 20.0)),
            fill(rect(-0.5, 36.0, 0.5, 8.0)),
            fill(rect(120.0, 36.0, 0.5, 8.0)),
            spot(12.0, 40.0),
            spot(108.0, 40.0),
            arc(12.0, 40.0, -half, half),
            arc(108.0, 40.0, 180.0 - half, 180.0 + half),
        ],
        Orientation::Vertical => vec![
            stroke(rect(0.0, 0.0, 80.0, 120.0)),
            stroke(Shape::Polyline(vec![Point::new(0.0, 60.0), Point::new(80.0, 60.0)])),
            stroke(Shape::Circle {
                center: Point::new(40.0, 60.0),
                radius: 10.0,
            }),
            spot(40.0, 60.0),
            stroke(rect(18.0, 0.0, 44.0, 18.0)),
            stroke(rect(30.0, 0.0, 20.0, 6.0)),
            stroke(rect(18.0, 102.0, 44.0, 18.0)),
            stroke(rect(30.0, 114.0, 20.0, 6.0)),
            fill(rect(36.0, -0.5, 8.0, 0.5)),
            fill(rect(36.0, 120.0, 8.0, 0.5)),
            spot(40.0, 12.0),
            spot(40.0, 108.0),
            arc(40.0, 12.0, 90.0 - half, 90.0 + half),
            arc(40.0, 108.0, 270.0 - half, 270.0 + half),
        ],
        Orientation::HalfVertical => vec![
            stroke(rect(0.0, 0.0, 80.0, 60.0)),
            stroke(Shape::Polyline(vec![Point::new(0.0, 60.0), Point::new(80.0, 60.0)])),
            arc(40.0, 60.0, 180.0, 360.0),
            spot(40.0, 60.0),
            stroke(rect(18.0, 0.0, 44.0, 18.0)),
            stroke(rect(30.0, 0.0, 20.0, 6.0)),
            fill(rect(36.0, -0.5, 8.0, 0.5)),
            spot(40.0, 12.0),
            arc(40.0, 12.0, 90.0 - half, 90.0 + half),
        ],
        Orientation::GoalView => {
            let frame_width = 0.4;
            let ground_y = 2.67 + 2.67 + frame_width / 2.0;
            vec![
                OutlineElement {
                    shape: Shape::Polyline(vec![
                        Point::new(36.0, 5.34),
                        Point::new(36.0, 2.67),
                        Point::new(44.0, 2.67),
                        Point::new(44.0, 5.34),
                    ]),
                    stroke: GOAL_FRAME,
                    stroke_width: frame_width,
                    filled: false,
                },
                OutlineElement {
                    shape: Shape::Polyline(vec![
                        Point::new(32.0, ground_y),
                        Point::new(48.0, ground_y),
                    ]),
                    stroke: GROUND,
                    stroke_width: 0.1,
                    filled: false,
                },
            ]
        }
    }
}

/// Sample an arc (or full circle) into a polyline with roughly one point per 3°.
pub fn sample_arc(center: Point, radius: f64, from_deg: f64, to_deg: f64) -> Vec<Point> {
    let sweep = to_deg - from_deg;
    let steps = ((sweep.abs() / 3.0).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            let a = (from_deg + sweep * i as f64 / steps as f64).to_radians();
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}
