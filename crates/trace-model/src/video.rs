//! Source video metadata.

use serde::{Deserialize, Serialize};

/// Dimensions and length of the video a tracer is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
    /// Number of decodable frames.
    pub total_frames: u64,
}

impl VideoMeta {
    pub fn new(width: u32, height: u32, fps: u32, total_frames: u64) -> Self {
        Self {
            width,
            height,
            fps,
            total_frames,
        }
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }

    /// Clip duration in seconds (0 when fps is unknown).
    pub fn duration_secs(&self) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        self.total_frames as f64 / self.fps as f64
    }
}
