use crate::models::{EventKind, EventSet};
use crate::viz::DrawableMarker;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Load events from a JSON file: either a saved `EventSet` or a raw API response body.
///
/// A saved set keeps its own category; a raw body is decoded as `kind`.
pub fn load_events_json<P: AsRef<Path>>(path: P, kind: EventKind) -> Result<EventSet> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let body: Value =
        serde_json::from_str(&text).with_context(|| format!("parse JSON in {}", path.display()))?;

    if let Ok(set) = serde_json::from_value::<EventSet>(body.clone()) {
        if set.kind != kind {
            log::warn!(
                "{} holds {} events, not {}",
                path.display(),
                set.kind.as_str(),
                kind.as_str()
            );
        }
        return Ok(EventSet::new(set.kind, set.events).with_origin(set.player, set.match_id));
    }
    EventSet::from_payload(kind, body)
        .with_context(|| format!("decode {} payload in {}", kind.as_str(), path.display()))
}

/// Save an event set as pretty JSON.
pub fn save_events_json<P: AsRef<Path>>(set: &EventSet, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(set)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save a drawable list as pretty JSON array.
pub fn save_markers_json<P: AsRef<Path>>(markers: &[DrawableMarker], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(markers)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save a drawable list as CSV with header (one row per marker).
pub fn save_markers_csv<P: AsRef<Path>>(markers: &[DrawableMarker], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record([
        "key",
        "kind",
        "x",
        "y",
        "radius",
        "fill",
        "stroke",
        "selected",
        "label",
        "end_x",
        "end_y",
    ])?;
    for m in markers {
        let (end_x, end_y) = match &m.trajectory {
            Some(seg) => (format!("{:.3}", seg.to.x), format!("{:.3}", seg.to.y)),
            None => (String::new(), String::new()),
        };
        wtr.write_record([
            sanitize_cell(&m.key.to_string()),
            m.kind.as_str().to_string(),
            format!("{:.3}", m.position.x),
            format!("{:.3}", m.position.y),
            format!("{:.3}", m.style.radius),
            m.style.fill.to_css(),
            m.style.stroke.to_css(),
            m.selected.to_string(),
            m.label
                .as_ref()
                .map(|l| l.ordinal.to_string())
                .unwrap_or_default(),
            end_x,
            end_y,
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn raw_touch_payload_loads() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("touches.json");
        std::fs::write(
            &p,
            r#"[{"type":"Pass","location":[10.0,20.0]},{"type":"Carry","location":null}]"#,
        )
        .unwrap();
        let set = load_events_json(&p, EventKind::Touch).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.events[0].outcome, "Pass");
    }

    #[test]
    fn formula_starters_are_quoted() {
        assert_eq!(sanitize_cell("=1+1"), "'=1+1");
        assert_eq!(sanitize_cell("-3"), "'-3");
        assert_eq!(sanitize_cell("#4"), "#4");
    }
}
