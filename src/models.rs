use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Length of the pitch in source units (x axis).
pub const PITCH_LENGTH: f64 = 120.0;
/// Vertical extent of the goal-mouth view in source units (z axis).
pub const GOAL_HEIGHT: f64 = 5.34;

/// A pitch-space location `(x, y[, z])`.
///
/// The API serializes locations as plain arrays (`[60.2, 41.0]` or
/// `[120.0, 38.4, 1.2]`); this type keeps that wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Location {
    pub x: f64,
    pub y: f64,
    /// Height, only present on aerial shot end-locations.
    pub z: Option<f64>,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub const fn with_height(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

impl TryFrom<Vec<f64>> for Location {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y] => Ok(Location::new(*x, *y)),
            [x, y, z] => Ok(Location::with_height(*x, *y, *z)),
            other => Err(format!(
                "location must have 2 or 3 components, got {}",
                other.len()
            )),
        }
    }
}

impl From<Location> for Vec<f64> {
    fn from(l: Location) -> Self {
        match l.z {
            Some(z) => vec![l.x, l.y, z],
            None => vec![l.x, l.y],
        }
    }
}

/// Event category. Also used as the "active category" of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Touch,
    Shot,
    Pass,
    DefensiveAction,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Touch,
        EventKind::Shot,
        EventKind::Pass,
        EventKind::DefensiveAction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Touch => "touch",
            EventKind::Shot => "shot",
            EventKind::Pass => "pass",
            EventKind::DefensiveAction => "defensive_action",
        }
    }

    /// Path segment of the player-match endpoint serving this category.
    pub fn endpoint(&self) -> &'static str {
        match self {
            EventKind::Touch => "player-match-touches",
            EventKind::Shot => "player-match-shooting",
            EventKind::Pass => "player-match-passing",
            EventKind::DefensiveAction => "player-match-def",
        }
    }
}

/// Stable identity of an event inside one supplied list.
///
/// Two events with identical fields are still distinct selections unless they
/// carry the same explicit id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKey {
    Id(String),
    Index(usize),
}

impl std::fmt::Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKey::Id(id) => write!(f, "{id}"),
            EventKey::Index(i) => write!(f, "#{}", i + 1),
        }
    }
}

/// Assist flag carried by passes (and touches tagged as assists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistKind {
    Goal,
    Shot,
}

/// Normalized match event handed to the visualization core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Position in the supplied list.
    pub index: usize,
    pub id: Option<String>,
    pub kind: EventKind,
    pub location: Location,
    pub end_location: Option<Location>,
    /// Result tag, e.g. "Goal", "Off T", "Complete", or the raw touch type.
    pub outcome: String,
    /// Expected-goals-like quality metric.
    pub magnitude: Option<f64>,
    pub assist: Option<AssistKind>,
    pub type_name: Option<String>,
    pub period: Option<u8>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub timestamp: Option<NaiveTime>,
    pub technique: Option<String>,
    pub body_part: Option<String>,
    pub recipient: Option<String>,
    /// Duel or interception result of a defensive action.
    pub action_outcome: Option<String>,
    pub duel_type: Option<String>,
    pub recovery_type: Option<String>,
}

impl Event {
    pub fn new(index: usize, kind: EventKind, location: Location, outcome: &str) -> Self {
        Self {
            index,
            id: None,
            kind,
            location,
            end_location: None,
            outcome: outcome.to_string(),
            magnitude: None,
            assist: None,
            type_name: None,
            period: None,
            minute: None,
            second: None,
            timestamp: None,
            technique: None,
            body_part: None,
            recipient: None,
            action_outcome: None,
            duel_type: None,
            recovery_type: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_end_location(mut self, end: Location) -> Self {
        self.end_location = Some(end);
        self
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_assist(mut self, assist: AssistKind) -> Self {
        self.assist = Some(assist);
        self
    }

    /// Selection identity: explicit id when present, else list position.
    pub fn key(&self) -> EventKey {
        match &self.id {
            Some(id) if !id.is_empty() => EventKey::Id(id.clone()),
            _ => EventKey::Index(self.index),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.kind == EventKind::Shot && self.outcome == "Goal"
    }

    pub fn is_assist(&self) -> bool {
        self.assist.is_some() || self.outcome.eq_ignore_ascii_case("assist")
    }
}

// ------------------------ Wire records ------------------------

/// Parse StatsBomb clock strings like `00:05:12.345`.
fn parse_timestamp(s: Option<&str>) -> Option<NaiveTime> {
    let s = s?.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f").ok()
}

/// Raw row of the touches endpoint (a bare JSON array of these).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub location: Option<Location>,
}

/// Fields shared by every event row of the detailed endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventHeader {
    pub id: Option<String>,
    pub period: Option<u8>,
    pub timestamp: Option<String>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    #[serde(flatten)]
    pub header: EventHeader,
    pub shot_end_location: Option<Location>,
    pub shot_outcome: Option<String>,
    pub shot_statsbomb_xg: Option<f64>,
    pub shot_technique: Option<String>,
    pub shot_body_part: Option<String>,
    pub shot_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRecord {
    #[serde(flatten)]
    pub header: EventHeader,
    pub pass_end_location: Option<Location>,
    /// `null` means the pass was completed.
    pub pass_outcome: Option<String>,
    pub pass_goal_assist: Option<bool>,
    pub pass_shot_assist: Option<bool>,
    pub pass_recipient: Option<String>,
    pub pass_body_part: Option<String>,
    pub pass_technique: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefensiveRecord {
    #[serde(flatten)]
    pub header: EventHeader,
    pub duel_outcome: Option<String>,
    pub duel_type: Option<String>,
    pub interception_outcome: Option<String>,
    pub ball_recovery_recovery_failure: Option<bool>,
}

/// Response body of the shooting endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShootingPayload {
    pub player: Option<String>,
    pub match_id: Option<u64>,
    #[serde(default)]
    pub shots: Vec<ShotRecord>,
}

/// Response body of the passing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassingPayload {
    pub player: Option<String>,
    pub match_id: Option<u64>,
    #[serde(default)]
    pub passes: Vec<PassRecord>,
}

/// Response body of the defending endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefendingPayload {
    pub player: Option<String>,
    pub match_id: Option<u64>,
    #[serde(default, alias = "actions")]
    pub defensive_actions: Vec<DefensiveRecord>,
}

impl EventHeader {
    /// Start an `Event` from the shared columns; `None` when the row has no location.
    fn into_event(self, kind: EventKind, outcome: String) -> Option<Event> {
        let location = self.location?;
        let mut e = Event::new(0, kind, location, &outcome);
        e.id = self.id;
        e.period = self.period;
        e.minute = self.minute;
        e.second = self.second;
        e.timestamp = parse_timestamp(self.timestamp.as_deref());
        e.type_name = self.type_name;
        Some(e)
    }
}

impl ShotRecord {
    fn into_event(self) -> Option<Event> {
        let outcome = self.shot_outcome.unwrap_or_else(|| "Unknown".to_string());
        let mut e = self.header.into_event(EventKind::Shot, outcome)?;
        e.end_location = self.shot_end_location;
        e.magnitude = self.shot_statsbomb_xg;
        e.technique = self.shot_technique.or(self.shot_type);
        e.body_part = self.shot_body_part;
        Some(e)
    }
}

impl PassRecord {
    fn into_event(self) -> Option<Event> {
        let outcome = self.pass_outcome.unwrap_or_else(|| "Complete".to_string());
        let mut e = self.header.into_event(EventKind::Pass, outcome)?;
        e.end_location = self.pass_end_location;
        e.assist = match (self.pass_goal_assist, self.pass_shot_assist) {
            (Some(true), _) => Some(AssistKind::Goal),
            (_, Some(true)) => Some(AssistKind::Shot),
            _ => None,
        };
        e.recipient = self.pass_recipient;
        e.body_part = self.pass_body_part;
        e.technique = self.pass_technique;
        Some(e)
    }
}

impl DefensiveRecord {
    fn into_event(self) -> Option<Event> {
        let outcome = self
            .header
            .type_name
            .clone()
            .unwrap_or_else(|| "Defensive Action".to_string());
        let mut e = self.header.into_event(EventKind::DefensiveAction, outcome)?;
        e.action_outcome = self.duel_outcome.or(self.interception_outcome);
        e.duel_type = self.duel_type;
        e.recovery_type = self.ball_recovery_recovery_failure.map(|failed| {
            if failed { "Failure" } else { "Recovered" }.to_string()
        });
        Some(e)
    }
}

impl TouchRecord {
    fn into_event(self) -> Option<Event> {
        let location = self.location?;
        let mut e = Event::new(0, EventKind::Touch, location, &self.type_name);
        e.type_name = Some(self.type_name);
        Some(e)
    }
}

// ------------------------ Event sets ------------------------

/// All events of one category for one view. Indices are assigned on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSet {
    pub kind: EventKind,
    pub player: Option<String>,
    pub match_id: Option<u64>,
    pub events: Vec<Event>,
}

impl EventSet {
    /// Build a set, renumbering `index` to the position in `events`.
    pub fn new(kind: EventKind, events: Vec<Event>) -> Self {
        let events = events
            .into_iter()
            .enumerate()
            .map(|(i, mut e)| {
                e.index = i;
                e
            })
            .collect();
        Self {
            kind,
            player: None,
            match_id: None,
            events,
        }
    }

    /// Attach the player and match the events were fetched for.
    pub fn with_origin(mut self, player: Option<String>, match_id: Option<u64>) -> Self {
        self.player = player;
        self.match_id = match_id;
        self
    }

    pub fn empty(kind: EventKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Convert a decoded API response body into an event set.
    ///
    /// Accepts the bare touch array as well as the
    /// `{player, match_id, shots|passes|defensive_actions}`
    /// objects of the other endpoints. Rows without a location are dropped.
    pub fn from_payload(kind: EventKind, body: Value) -> Result<Self, serde_json::Error> {
        fn collect<R>(rows: Vec<R>, f: impl Fn(R) -> Option<Event>) -> Vec<Event> {
            let total = rows.len();
            let events: Vec<Event> = rows.into_iter().filter_map(f).collect();
            if events.len() < total {
                log::warn!(
                    "dropped {} event row(s) without a location",
                    total - events.len()
                );
            }
            events
        }

        let (player, match_id, events) = match kind {
            EventKind::Touch => {
                // Some deployments wrap touches as `{ "touches": [...] }`.
                let rows: Vec<TouchRecord> = match body {
                    Value::Object(mut map) => match map.remove("touches") {
                        Some(v) => serde_json::from_value(v)?,
                        None => Vec::new(),
                    },
                    other => serde_json::from_value(other)?,
                };
                (None, None, collect(rows, TouchRecord::into_event))
            }
            EventKind::Shot => {
                let p: ShootingPayload = serde_json::from_value(body)?;
                (p.player, p.match_id, collect(p.shots, ShotRecord::into_event))
            }
            EventKind::Pass => {
                let p: PassingPayload = serde_json::from_value(body)?;
                (p.player, p.match_id, collect(p.passes, PassRecord::into_event))
            }
            EventKind::DefensiveAction => {
                let p: DefendingPayload = serde_json::from_value(body)?;
                (
                    p.player,
                    p.match_id,
                    collect(p.defensive_actions, DefensiveRecord::into_event),
                )
            }
        };

        let mut set = EventSet::new(kind, events);
        set.player = player;
        set.match_id = match_id;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_accepts_two_or_three_components() {
        let a: Location = serde_json::from_str("[60.0, 40.0]").unwrap();
        assert_eq!(a, Location::new(60.0, 40.0));
        let b: Location = serde_json::from_str("[120.0, 38.0, 1.5]").unwrap();
        assert_eq!(b.z, Some(1.5));
        assert!(serde_json::from_str::<Location>("[1.0]").is_err());
        assert_eq!(serde_json::to_string(&a).unwrap(), "[60.0,40.0]");
    }

    #[test]
    fn key_prefers_explicit_id() {
        let e = Event::new(4, EventKind::Touch, Location::new(1.0, 2.0), "Carry");
        assert_eq!(e.key(), EventKey::Index(4));
        let e = e.with_id("abc");
        assert_eq!(e.key(), EventKey::Id("abc".into()));
    }

    #[test]
    fn timestamps_parse_with_fraction() {
        let t = parse_timestamp(Some("00:05:12.345")).unwrap();
        assert_eq!(t, NaiveTime::from_hms_milli_opt(0, 5, 12, 345).unwrap());
        assert!(parse_timestamp(Some("not a time")).is_none());
    }
}
