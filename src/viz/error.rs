//! Recoverable geometry errors. None of them escape `render`; each one only
//! drops a single marker or line.

use super::types::Orientation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VizError {
    /// The event lacks the location data its orientation needs.
    #[error("missing {needed} for {orientation:?} view")]
    MissingCoordinateData {
        orientation: Orientation,
        needed: &'static str,
    },
    /// Zero-length start→end vector; no direction to clip along.
    #[error("degenerate trajectory at ({x}, {y})")]
    DegenerateGeometry { x: f64, y: f64 },
}
