//! pitchviz
//!
//! A Rust library for turning football match events (touches, shots, passes,
//! defensive actions) into interactive pitch visualizations. Pairs with the
//! `pitchviz` CLI and the `pitchviz-gui` viewer.
//!
//! ### Features
//! - Fetch a player's match events from the events API, or load saved payloads
//! - Map pitch coordinates into horizontal, vertical, half-pitch and goal-frame views
//! - Style markers by category and outcome, size shots by expected goals (xG)
//! - Single selection with trajectory lines clipped to the marker boundary
//! - Render to SVG/PNG, export markers as CSV or JSON, summarize per category
//!
//! ### Example
//! ```no_run
//! use pitchviz::viz::{self, Orientation, RenderContext};
//! use pitchviz::{EventKind, storage};
//!
//! let shots = storage::load_events_json("shots.json", EventKind::Shot)?;
//! let ctx = RenderContext::new(Orientation::Vertical).with_labels(true);
//! let markers = viz::render(&shots.events, &ctx, None);
//! viz::surface::render_to_file(&markers, ctx.orientation, "shots.svg", 800)?;
//! println!("{:#?}", pitchviz::stats::summarize(&shots));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::Client;
pub use models::{Event, EventKey, EventKind, EventSet, Location};
