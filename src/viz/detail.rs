//! Field-by-field rows for the detail panel of the selected event.

use crate::models::{AssistKind, Event, EventKind};

/// Placeholder shown while nothing is selected.
pub fn empty_hint(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Touch => "Select a touch to see details",
        EventKind::Shot => "Select a shot to see details",
        EventKind::Pass => "Select a pass to see details",
        EventKind::DefensiveAction => "Select an action to see details",
    }
}

fn or_dash(v: Option<&str>) -> String {
    v.filter(|s| !s.is_empty()).unwrap_or("-").to_string()
}

fn clock(event: &Event) -> String {
    match (event.minute, event.second) {
        (Some(m), Some(s)) => format!("{m}:{s:02}"),
        (Some(m), None) => format!("{m}'"),
        _ => event
            .timestamp
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string()),
    }
}

/// (label, value) pairs for one event; the rows depend on the event's category.
pub fn detail_rows(event: &Event) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    match event.kind {
        EventKind::Shot => {
            rows.push(("Shot Outcome", event.outcome.clone()));
            rows.push((
                "Expected Goals (xG)",
                event
                    .magnitude
                    .map(|xg| format!("{xg:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
            ));
            rows.push(("Shot Type", or_dash(event.technique.as_deref())));
            rows.push(("Body Part", or_dash(event.body_part.as_deref())));
        }
        EventKind::Pass => {
            rows.push(("Pass Outcome", event.outcome.clone()));
            rows.push(("Recipient", or_dash(event.recipient.as_deref())));
            let assist = match event.assist {
                Some(AssistKind::Goal) => "Goal assist",
                Some(AssistKind::Shot) => "Key pass",
                None => "-",
            };
            rows.push(("Assist", assist.to_string()));
        }
        EventKind::Touch => {
            rows.push(("Type", event.outcome.clone()));
        }
        EventKind::DefensiveAction => {
            rows.push(("Action", event.outcome.clone()));
            rows.push((
                "Outcome",
                event
                    .action_outcome
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "Successful".to_string()),
            ));
            rows.push(("Duel Type", or_dash(event.duel_type.as_deref())));
            rows.push(("Recovery Type", or_dash(event.recovery_type.as_deref())));
        }
    }
    rows.push(("Time", clock(event)));
    rows.push((
        "Location",
        format!("{:.1}, {:.1}", event.location.x, event.location.y),
    ));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    #[test]
    fn shot_rows_format_xg() {
        let mut e = Event::new(0, EventKind::Shot, Location::new(105.0, 38.0), "Goal")
            .with_magnitude(0.4567);
        e.minute = Some(23);
        e.second = Some(5);
        let rows = detail_rows(&e);
        assert_eq!(rows[0], ("Shot Outcome", "Goal".to_string()));
        assert_eq!(rows[1].1, "0.46");
        assert!(rows.contains(&("Time", "23:05".to_string())));
    }

    #[test]
    fn defensive_outcome_defaults_to_successful() {
        let mut e = Event::new(0, EventKind::DefensiveAction, Location::new(30.0, 40.0), "Duel");
        e.duel_type = Some("Tackle".to_string());
        let rows = detail_rows(&e);
        assert!(rows.contains(&("Outcome", "Successful".to_string())));
        assert!(rows.contains(&("Duel Type", "Tackle".to_string())));
        assert!(rows.contains(&("Recovery Type", "-".to_string())));

        e.action_outcome = Some("Lost In Play".to_string());
        assert!(detail_rows(&e).contains(&("Outcome", "Lost In Play".to_string())));
    }
}
