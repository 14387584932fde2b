//! Host rendering surface: paint the pitch outline and a drawable list to **SVG** or **PNG**.
//!
//! The view box of the orientation is scaled uniformly into the canvas, so one
//! pitch unit is the same number of pixels on both axes.

use super::pitch::{self, OutlineElement, Shape};
use super::types::{DrawableMarker, Orientation, Point, Rgba};
use super::util::Projection;
use anyhow::{Result, anyhow, bail};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

/// Segments per dashed ring (every other one is drawn).
const DASH_SEGMENTS: usize = 24;

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

/// Canvas size for `orientation` at a given pixel width (height follows the view box aspect).
pub fn canvas_size(orientation: Orientation, width: u32) -> (u32, u32) {
    let h = (width as f64 * orientation.view_box().aspect()).round().max(1.0) as u32;
    (width, h)
}

/// Render `markers` to `out_path`. `.svg` selects the SVG backend, anything else PNG.
///
/// Labels are only written to SVG: the bitmap text path needs a registered font.
pub fn render_to_file<P: AsRef<Path>>(
    markers: &[DrawableMarker],
    orientation: Orientation,
    out_path: P,
    width: u32,
) -> Result<()> {
    if width == 0 {
        bail!("canvas width must be positive");
    }
    let size = canvas_size(orientation, width);
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_view(&root, markers, orientation, true)?;
    } else {
        if markers.iter().any(|m| m.label.is_some()) {
            log::warn!("labels are not drawn on bitmap output ({})", out_path.display());
        }
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_view(&root, markers, orientation, false)?;
    }
    log::info!(
        "rendered {} marker(s) to {} ({}x{})",
        markers.len(),
        out_path.display(),
        size.0,
        size.1
    );
    Ok(())
}

/// Render `markers` into an in-memory SVG document.
pub fn render_to_svg_string(
    markers: &[DrawableMarker],
    orientation: Orientation,
    width: u32,
) -> Result<String> {
    if width == 0 {
        bail!("canvas width must be positive");
    }
    let mut buf = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buf, canvas_size(orientation, width)).into_drawing_area();
        draw_view(&root, markers, orientation, true)?;
    }
    Ok(buf)
}

/// Draw outline + markers on any Plotters backend.
fn draw_view<DB>(
    root: &DrawingArea<DB, Shift>,
    markers: &[DrawableMarker],
    orientation: Orientation,
    labels: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    let (w, h) = root.dim_in_pixel();
    let proj = Projection::fit(orientation.view_box(), w as f64, h as f64);

    for el in pitch::outline(orientation) {
        draw_outline_element(root, &proj, &el)?;
    }
    // Selected marker last so its ring and line sit on top.
    let (selected, rest): (Vec<&DrawableMarker>, Vec<&DrawableMarker>) =
        markers.iter().partition(|m| m.selected);
    for m in rest.into_iter().chain(selected) {
        draw_marker(root, &proj, m, labels)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_outline_element<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    el: &OutlineElement,
) -> Result<()> {
    let style = ShapeStyle {
        color: color(el.stroke),
        filled: el.filled,
        stroke_width: proj.stroke_px(el.stroke_width),
    };
    match &el.shape {
        Shape::Rect { x, y, w, h } => root.draw(&Rectangle::new(
            [
                proj.to_px(Point::new(*x, *y)),
                proj.to_px(Point::new(x + w, y + h)),
            ],
            style,
        )),
        Shape::Circle { center, radius } => root.draw(&Circle::new(
            proj.to_px(*center),
            radius_px(proj, *radius),
            style,
        )),
        Shape::Arc {
            center,
            radius,
            from_deg,
            to_deg,
        } => {
            let pts = pitch::sample_arc(*center, *radius, *from_deg, *to_deg);
            root.draw(&PathElement::new(to_px_path(proj, &pts), style))
        }
        Shape::Polyline(pts) => root.draw(&PathElement::new(to_px_path(proj, pts), style)),
    }
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    m: &DrawableMarker,
    labels: bool,
) -> Result<()> {
    let center = proj.to_px(m.position);
    let r = radius_px(proj, m.style.radius);

    if let Some(ring) = &m.outline {
        let style = ShapeStyle {
            color: color(ring.stroke),
            filled: false,
            stroke_width: proj.stroke_px(ring.stroke_width),
        };
        match ring.dash {
            None => root
                .draw(&Circle::new(center, radius_px(proj, ring.radius), style))
                .map_err(|e| anyhow!("{:?}", e))?,
            Some(_) => {
                let pts = pitch::sample_arc(m.position, ring.radius, 0.0, 360.0);
                let per = (pts.len() / DASH_SEGMENTS).max(1);
                for (i, chunk) in pts.chunks(per).enumerate() {
                    if i % 2 == 0 && chunk.len() > 1 {
                        root.draw(&PathElement::new(to_px_path(proj, chunk), style))
                            .map_err(|e| anyhow!("{:?}", e))?;
                    }
                }
            }
        }
    }

    root.draw(&Circle::new(
        center,
        r,
        ShapeStyle {
            color: color(m.style.fill),
            filled: true,
            stroke_width: 0,
        },
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Circle::new(
        center,
        r,
        ShapeStyle {
            color: color(m.style.stroke),
            filled: false,
            stroke_width: proj.stroke_px(m.style.stroke_width),
        },
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    if let Some(seg) = &m.trajectory {
        let style = ShapeStyle {
            color: color(seg.stroke),
            filled: false,
            stroke_width: proj.stroke_px(seg.stroke_width),
        };
        root.draw(&PathElement::new(
            vec![proj.to_px(seg.from), proj.to_px(seg.to)],
            style,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    if labels && let Some(label) = &m.label {
        let font = FontDesc::new(
            FontFamily::SansSerif,
            proj.length(label.font_size),
            FontStyle::Normal,
        );
        let text_style = font
            .color(&color(label.color))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        root.draw(&Text::new(
            label.ordinal.to_string(),
            proj.to_px(label.position),
            text_style,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn radius_px(proj: &Projection, units: f64) -> i32 {
    proj.length(units).round().max(1.0) as i32
}

fn to_px_path(proj: &Projection, pts: &[Point]) -> Vec<(i32, i32)> {
    pts.iter().map(|p| proj.to_px(*p)).collect()
}
