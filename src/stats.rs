use crate::models::{AssistKind, Event, EventKind, EventSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ON_TARGET: [&str; 3] = ["Goal", "Saved", "Saved To Post"];
const OFF_TARGET: [&str; 4] = ["Off T", "Post", "Saved Off T", "Wayward"];
const BLOCKED: &str = "Blocked";

/// Shot totals and ratios for one player in one match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShootingSummary {
    pub total_shots: usize,
    pub goals: usize,
    pub shots_on_target: usize,
    pub shots_off_target: usize,
    pub shots_blocked: usize,
    /// Percent of shots on target, one decimal.
    pub shot_accuracy: f64,
    /// Percent of shots scored, one decimal.
    pub shot_conversion: f64,
    pub total_xg: f64,
    /// Goals divided by total xG, two decimals; 0 when no xG.
    pub goals_per_xg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassingSummary {
    pub total_passes: usize,
    pub completed_passes: usize,
    pub completion_rate: f64,
    pub assists: usize,
    pub key_passes: usize,
}

/// Count per type label (touch types, defensive action types).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActionCounts {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategorySummary {
    Touches(ActionCounts),
    Shooting(ShootingSummary),
    Passing(PassingSummary),
    Defending(ActionCounts),
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(part as f64 * 100.0 / total as f64, 1)
    }
}

pub fn shooting_summary(shots: &[Event]) -> ShootingSummary {
    let total_shots = shots.len();
    let count = |names: &[&str]| {
        shots
            .iter()
            .filter(|e| names.contains(&e.outcome.as_str()))
            .count()
    };
    let goals = shots.iter().filter(|e| e.is_goal()).count();
    let shots_on_target = count(&ON_TARGET);
    let shots_off_target = count(&OFF_TARGET);
    let shots_blocked = count(&[BLOCKED]);
    let total_xg: f64 = shots
        .iter()
        .filter_map(|e| e.magnitude)
        .filter(|x| x.is_finite())
        .sum();
    let goals_per_xg = if total_xg > 0.0 {
        round_to(goals as f64 / total_xg, 2)
    } else {
        0.0
    };
    ShootingSummary {
        total_shots,
        goals,
        shots_on_target,
        shots_off_target,
        shots_blocked,
        shot_accuracy: percent(shots_on_target, total_shots),
        shot_conversion: percent(goals, total_shots),
        total_xg: round_to(total_xg, 2),
        goals_per_xg,
    }
}

pub fn passing_summary(passes: &[Event]) -> PassingSummary {
    let total_passes = passes.len();
    let completed_passes = passes.iter().filter(|e| e.outcome == "Complete").count();
    PassingSummary {
        total_passes,
        completed_passes,
        completion_rate: percent(completed_passes, total_passes),
        assists: passes
            .iter()
            .filter(|e| e.assist == Some(AssistKind::Goal))
            .count(),
        key_passes: passes
            .iter()
            .filter(|e| e.assist == Some(AssistKind::Shot))
            .count(),
    }
}

/// Count events per outcome label (the type name for touches and defensive actions).
pub fn action_counts(events: &[Event]) -> ActionCounts {
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    for e in events {
        *by_type.entry(e.outcome.clone()).or_default() += 1;
    }
    ActionCounts {
        total: events.len(),
        by_type,
    }
}

/// Summary matching the category of `set`.
pub fn summarize(set: &EventSet) -> CategorySummary {
    match set.kind {
        EventKind::Touch => CategorySummary::Touches(action_counts(&set.events)),
        EventKind::Shot => CategorySummary::Shooting(shooting_summary(&set.events)),
        EventKind::Pass => CategorySummary::Passing(passing_summary(&set.events)),
        EventKind::DefensiveAction => CategorySummary::Defending(action_counts(&set.events)),
    }
}

impl CategorySummary {
    /// `(label, value)` lines for plain-text output.
    pub fn lines(&self) -> Vec<(String, String)> {
        fn counts(c: &ActionCounts, noun: &str) -> Vec<(String, String)> {
            let mut out = vec![(format!("Total {noun}"), c.total.to_string())];
            out.extend(c.by_type.iter().map(|(k, v)| (k.clone(), v.to_string())));
            out
        }
        match self {
            CategorySummary::Touches(c) => counts(c, "touches"),
            CategorySummary::Defending(c) => counts(c, "actions"),
            CategorySummary::Shooting(s) => vec![
                ("Total shots".into(), s.total_shots.to_string()),
                ("Goals".into(), s.goals.to_string()),
                ("On target".into(), s.shots_on_target.to_string()),
                ("Off target".into(), s.shots_off_target.to_string()),
                ("Blocked".into(), s.shots_blocked.to_string()),
                ("Accuracy".into(), format!("{:.1}%", s.shot_accuracy)),
                ("Conversion".into(), format!("{:.1}%", s.shot_conversion)),
                ("Total xG".into(), format!("{:.2}", s.total_xg)),
                ("Goals per xG".into(), format!("{:.2}", s.goals_per_xg)),
            ],
            CategorySummary::Passing(p) => vec![
                ("Total passes".into(), p.total_passes.to_string()),
                ("Completed".into(), p.completed_passes.to_string()),
                ("Completion".into(), format!("{:.1}%", p.completion_rate)),
                ("Assists".into(), p.assists.to_string()),
                ("Key passes".into(), p.key_passes.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn shot(outcome: &str, xg: f64) -> Event {
        Event::new(0, EventKind::Shot, Location::new(100.0, 40.0), outcome).with_magnitude(xg)
    }

    #[test]
    fn shooting_ratios() {
        let shots = vec![
            shot("Goal", 0.5),
            shot("Saved", 0.2),
            shot("Off T", 0.05),
            shot("Blocked", 0.25),
        ];
        let s = shooting_summary(&shots);
        assert_eq!(s.total_shots, 4);
        assert_eq!(s.goals, 1);
        assert_eq!(s.shots_on_target, 2);
        assert_eq!(s.shots_off_target, 1);
        assert_eq!(s.shots_blocked, 1);
        assert_eq!(s.shot_accuracy, 50.0);
        assert_eq!(s.shot_conversion, 25.0);
        assert_eq!(s.total_xg, 1.0);
        assert_eq!(s.goals_per_xg, 1.0);
    }

    #[test]
    fn empty_sets_do_not_divide_by_zero() {
        let s = shooting_summary(&[]);
        assert_eq!(s.shot_accuracy, 0.0);
        assert_eq!(s.goals_per_xg, 0.0);
        assert_eq!(passing_summary(&[]).completion_rate, 0.0);
    }

    #[test]
    fn passing_counts_assists_and_key_passes() {
        let loc = Location::new(50.0, 40.0);
        let passes = vec![
            Event::new(0, EventKind::Pass, loc, "Complete").with_assist(AssistKind::Goal),
            Event::new(1, EventKind::Pass, loc, "Complete").with_assist(AssistKind::Shot),
            Event::new(2, EventKind::Pass, loc, "Incomplete"),
        ];
        let p = passing_summary(&passes);
        assert_eq!(p.completed_passes, 2);
        assert_eq!(p.completion_rate, 66.7);
        assert_eq!(p.assists, 1);
        assert_eq!(p.key_passes, 1);
    }
}
