//! Utility functions for visualization: range remapping and pitch ↔ screen projection.

use super::types::{Point, ViewBox};

/// Linear remap of `value` from `[a, b]` onto `[c, d]`.
///
/// `map_range(v, a, b, c, d) = c + (v - a) * (d - c) / (b - a)`. A flipped target
/// (`c > d`) inverts the axis, which is how goal height becomes screen depth.
#[inline]
pub fn map_range(value: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    c + (value - a) * (d - c) / (b - a)
}

/// Uniform scale from a view box onto a pixel canvas, centered (like SVG `xMidYMid meet`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub view_box: ViewBox,
    /// Pixels per pitch unit.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Projection {
    pub fn fit(view_box: ViewBox, width_px: f64, height_px: f64) -> Self {
        let scale = (width_px / view_box.width).min(height_px / view_box.height);
        let offset_x = (width_px - view_box.width * scale) / 2.0;
        let offset_y = (height_px - view_box.height * scale) / 2.0;
        Self {
            view_box,
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Pitch units → screen pixels.
    pub fn to_screen(&self, p: Point) -> (f64, f64) {
        (
            self.offset_x + (p.x - self.view_box.min_x) * self.scale,
            self.offset_y + (p.y - self.view_box.min_y) * self.scale,
        )
    }

    /// Screen pixels → pitch units (inverse of `to_screen`).
    pub fn to_pitch(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.offset_x) / self.scale + self.view_box.min_x,
            (y - self.offset_y) / self.scale + self.view_box.min_y,
        )
    }

    pub fn length(&self, units: f64) -> f64 {
        units * self.scale
    }

    /// Integer pixel coordinate for raster-style backends.
    pub fn to_px(&self, p: Point) -> (i32, i32) {
        let (x, y) = self.to_screen(p);
        (x.round() as i32, y.round() as i32)
    }

    /// Stroke width in whole pixels, never below 1.
    pub fn stroke_px(&self, units: f64) -> u32 {
        (units * self.scale).round().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_inverts_goal_height() {
        assert_eq!(map_range(0.0, 0.0, 5.34, 5.34, 0.0), 5.34);
        assert!(map_range(5.34, 0.0, 5.34, 5.34, 0.0).abs() < 1e-12);
        assert!((map_range(2.67, 0.0, 5.34, 5.34, 0.0) - 2.67).abs() < 1e-12);
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn projection_round_trips_and_centers() {
        let vb = ViewBox::new(-2.0, -2.0, 124.0, 84.0);
        // Taller canvas than needed: horizontal fit, vertical letterbox.
        let p = Projection::fit(vb, 1240.0, 1000.0);
        assert!((p.scale - 10.0).abs() < 1e-12);
        assert!((p.offset_y - 80.0).abs() < 1e-12);
        let (sx, sy) = p.to_screen(Point::new(60.0, 40.0));
        let back = p.to_pitch(sx, sy);
        assert!((back.x - 60.0).abs() < 1e-9);
        assert!((back.y - 40.0).abs() < 1e-9);
        assert_eq!(p.stroke_px(0.01), 1);
    }
}
