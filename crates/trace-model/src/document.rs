//! Serialized trace output (`trace.json`).
//!
//! A trace document captures everything needed to redraw or export one
//! tracer: the video it belongs to, the slider values, the control handles,
//! and the generated frame-indexed points.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::control::ControlPoints;
use crate::params::{FlightFrameCounts, TracerParameters};
use crate::style::TracerStyle;
use crate::track::TrackPoint;
use crate::video::VideoMeta;

/// Current document schema version.
pub const TRACE_DOCUMENT_VERSION: &str = "1.0";

/// Top-level trace file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    /// Schema version.
    pub version: String,

    /// Creation timestamp (RFC 3339).
    pub created_at: String,

    /// Source video metadata.
    pub video: VideoMeta,

    /// Slider values the points were generated from.
    pub parameters: TracerParameters,

    /// Handles the points were generated from.
    pub control_points: ControlPoints,

    /// Phase frame counts; absent for the straight-line fallback.
    #[serde(default)]
    pub frame_counts: Option<FlightFrameCounts>,

    /// Stroke style for rendering.
    #[serde(default)]
    pub style: TracerStyle,

    /// Generated tracer points, one per frame.
    pub points: Vec<TrackPoint>,
}

impl TraceDocument {
    /// Create a document stamped with the current time.
    pub fn new(
        video: VideoMeta,
        parameters: TracerParameters,
        control_points: ControlPoints,
        frame_counts: Option<FlightFrameCounts>,
        points: Vec<TrackPoint>,
    ) -> Self {
        Self {
            version: TRACE_DOCUMENT_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            video,
            parameters,
            control_points,
            frame_counts,
            style: TracerStyle::default(),
            points,
        }
    }

    /// First and last frame covered by the tracer.
    pub fn frame_span(&self) -> Option<(u64, u64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.frame_index, last.frame_index))
    }

    /// Load a document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceDocumentError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|e| TraceDocumentError::IoError {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| TraceDocumentError::ParseError { path, source: e })
    }

    /// Save the document as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TraceDocumentError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TraceDocumentError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).map_err(|e| TraceDocumentError::ParseError {
                path: path.clone(),
                source: e,
            })?;
        std::fs::write(&path, json).map_err(|e| TraceDocumentError::IoError { path, source: e })
    }
}

/// Errors that can occur when reading or writing trace documents.
#[derive(Debug, thiserror::Error)]
pub enum TraceDocumentError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}
