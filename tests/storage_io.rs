use pitchviz::models::{Event, EventKey, EventKind, EventSet, Location};
use pitchviz::storage;
use pitchviz::viz::{self, RenderContext};
use std::fs;
use tempfile::tempdir;

fn sample() -> EventSet {
    EventSet::new(
        EventKind::Pass,
        vec![
            Event::new(0, EventKind::Pass, Location::new(20.0, 30.0), "Complete")
                .with_end_location(Location::new(40.0, 30.0)),
            Event::new(0, EventKind::Pass, Location::new(80.0, 10.0), "Out")
                .with_end_location(Location::new(85.0, 0.0)),
        ],
    )
    .with_origin(Some("Player".into()), Some(42))
}

#[test]
fn event_set_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("passes.json");
    let set = sample();
    storage::save_events_json(&set, &path).unwrap();
    // The requested category does not override a saved set.
    let back = storage::load_events_json(&path, EventKind::Shot).unwrap();
    assert_eq!(back, set);
}

#[test]
fn raw_api_payload_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shots.json");
    fs::write(
        &path,
        r#"{"player":"P","match_id":9,"shots":[{"location":[100.0,40.0],"shot_outcome":"Saved","shot_statsbomb_xg":0.08}]}"#,
    )
    .unwrap();
    let set = storage::load_events_json(&path, EventKind::Shot).unwrap();
    assert_eq!(set.kind, EventKind::Shot);
    assert_eq!(set.match_id, Some(9));
    assert_eq!(set.events[0].magnitude, Some(0.08));
}

#[test]
fn missing_or_broken_files_are_errors() {
    let dir = tempdir().unwrap();
    assert!(storage::load_events_json(dir.path().join("nope.json"), EventKind::Touch).is_err());
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let err = storage::load_events_json(&bad, EventKind::Touch).unwrap_err();
    assert!(format!("{err:#}").contains("bad.json"));
}

#[test]
fn markers_export_to_csv_and_json() {
    let dir = tempdir().unwrap();
    let set = sample();
    let markers = viz::render(
        &set.events,
        &RenderContext::default().with_labels(true),
        Some(&EventKey::Index(0)),
    );

    let csv_path = dir.path().join("markers.csv");
    storage::save_markers_csv(&markers, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("key,kind,x,y,radius,"));
    assert_eq!(csv_txt.lines().count(), 1 + markers.len());
    let first = csv_txt.lines().nth(1).unwrap();
    assert!(first.starts_with("#1,pass,20.000,30.000,1.000,"));
    assert!(first.ends_with(",true,1,40.000,30.000"));

    let json_path = dir.path().join("markers.json");
    storage::save_markers_json(&markers, &json_path).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), markers.len());
}

//test if the CSV file is safe and won't include executable formulas
//event ids come from the API, so a crafted id must not turn into a formula
//when the export is opened in a spreadsheet; we prefix such cells with a single quote
#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let dir = tempdir().unwrap();
    let events = vec![
        Event::new(0, EventKind::Touch, Location::new(10.0, 10.0), "Carry")
            .with_id("=HYPERLINK(\"http://evil\")"),
        Event::new(1, EventKind::Touch, Location::new(12.0, 10.0), "Carry").with_id("@foo"),
        Event::new(2, EventKind::Touch, Location::new(14.0, 10.0), "Carry").with_id("plain"),
    ];
    let markers = viz::render(&events, &RenderContext::default(), None);
    let path = dir.path().join("inj.csv");
    storage::save_markers_csv(&markers, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let keys: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(keys[0], "'=HYPERLINK(\"http://evil\")");
    assert_eq!(keys[1], "'@foo");
    assert_eq!(keys[2], "plain");
}
