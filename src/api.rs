/// Synchronous client for the **player match events API**.
///
/// One endpoint per event category, all shaped `{base}/{endpoint}/{match_id}/{player}/`:
///
/// | category          | endpoint                |
/// |-------------------|-------------------------|
/// | touches           | `player-match-touches`  |
/// | shots             | `player-match-shooting` |
/// | passes            | `player-match-passing`  |
/// | defensive actions | `player-match-def`      |
///
/// ### Notes
/// - Player names are percent encoded (`"Lionel Andrés Messi Cuccittini"` has spaces and accents).
/// - A `404`, or an error body saying no events were found, means the player has no events
///   of that category in the match; it yields an empty `EventSet`, never an error.
/// - `5xx` responses and network errors are retried with a short backoff.
///
/// Typical usage:
/// ```no_run
/// # use pitchviz::{Client, EventKind};
/// let client = Client::from_env()?;
/// let shots = client.fetch(EventKind::Shot, 3788741, "Lionel Andrés Messi Cuccittini")?;
/// println!("{} shots", shots.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::{EventKind, EventSet};
use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Local development server of the events API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "PITCHVIZ_API_URL";

// Allow -, _, . unescaped in path segments
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("pitchviz/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Client for `$PITCHVIZ_API_URL`, or the local default.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// Request URL for one category, match and player.
    pub fn url_for(&self, kind: EventKind, match_id: u64, player: &str) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.base_url,
            kind.endpoint(),
            match_id,
            percent_encoding::utf8_percent_encode(player.trim(), SAFE)
        )
    }

    /// Fetch all events of `kind` for `player` in `match_id`.
    ///
    /// ### Errors
    /// - Empty player name
    /// - Network/HTTP error (after retries for 5xx)
    /// - JSON decoding error
    pub fn fetch(&self, kind: EventKind, match_id: u64, player: &str) -> Result<EventSet> {
        if player.trim().is_empty() {
            bail!("player name required");
        }
        let url = self.url_for(kind, match_id, player);
        log::info!("GET {url}");

        let body = match self.get_json(&url).with_context(|| format!("GET {}", url))? {
            Some(v) => v,
            None => {
                log::info!("no {} for {player} in match {match_id}", kind.as_str());
                return Ok(EventSet::empty(kind)
                    .with_origin(Some(player.to_string()), Some(match_id)));
            }
        };

        let set = EventSet::from_payload(kind, body)
            .with_context(|| format!("parse {} payload", kind.as_str()))?;
        let player = set.player.clone().or_else(|| Some(player.to_string()));
        let match_id = set.match_id.or(Some(match_id));
        Ok(set.with_origin(player, match_id))
    }

    /// Fetch every category for one player and match.
    pub fn fetch_all(&self, match_id: u64, player: &str) -> Result<Vec<EventSet>> {
        EventKind::ALL
            .iter()
            .map(|k| self.fetch(*k, match_id, player))
            .collect()
    }

    /// GET with a small retry for transient failures (5xx / network errors).
    /// `Ok(None)` when there is nothing to fetch.
    fn get_json(&self, url: &str) -> Result<Option<Value>> {
        let mut last_err: Option<anyhow::Error> = None;
        for backoff_ms in [100u64, 300, 700] {
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.json().map(Some).context("decode json");
                }
                Ok(r) if r.status() == StatusCode::NOT_FOUND => return Ok(None),
                Ok(r) if r.status().is_server_error() => {
                    let status = r.status();
                    // The backend reports "no events for this player" as a 500 with an error body.
                    if let Ok(body) = r.json::<Value>()
                        && is_no_events_error(&body)
                    {
                        return Ok(None);
                    }
                    log::warn!("HTTP {status} from {url}, retrying");
                }
                Ok(r) => bail!("request failed with HTTP {}", r.status()),
                Err(e) => last_err = Some(e.into()),
            }
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
        bail!("network error: {:?}", last_err);
    }
}

/// `{"error": "No shooting events found for player ..."}`
fn is_no_events_error(body: &Value) -> bool {
    body.get("error")
        .and_then(Value::as_str)
        .is_some_and(|e| e.starts_with("No ") && e.contains(" found"))
}
