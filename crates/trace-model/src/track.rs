//! Frame-indexed ball positions.
//!
//! The same type carries real detections from the tracking collaborator and
//! the synthetic positions emitted by the trajectory generator. Detections may
//! arrive as a JSON array or as JSONL (one object per line).

use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// One ball position on one video frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPoint {
    /// Video frame this position belongs to.
    pub frame_index: u64,
    /// X in source video pixels.
    pub x: f64,
    /// Y in source video pixels.
    pub y: f64,
    /// Detector confidence in `[0, 1]`. Synthetic points are always 1.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Whether the position was extrapolated rather than observed.
    #[serde(default)]
    pub is_estimated: bool,
}

fn default_confidence() -> f64 {
    1.0
}

impl TrackPoint {
    /// A synthetic point emitted by the trajectory generator.
    pub fn generated(frame_index: u64, position: Point2D) -> Self {
        Self {
            frame_index,
            x: position.x,
            y: position.y,
            confidence: 1.0,
            is_estimated: false,
        }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Parse track points from a JSON array or from JSONL content.
///
/// Blank lines and lines starting with `#` are ignored in JSONL input.
pub fn parse_track(content: &str) -> Result<Vec<TrackPoint>, serde_json::Error> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed);
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize track points to JSONL format.
pub fn serialize_track(points: &[TrackPoint]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for point in points {
        output.push_str(&serde_json::to_string(point)?);
        output.push('\n');
    }
    Ok(output)
}
