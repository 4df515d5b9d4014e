//! Frame timing utilities.
//!
//! Trajectories are indexed by video frame, while the render service and
//! the player speak in seconds. This module converts between the two for a
//! fixed frame rate.

/// Frame-rate anchored clock for a single video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    fps: u32,
}

impl FrameClock {
    /// Create a clock for the given frame rate. A rate of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self { fps: fps.max(1) }
    }

    /// Frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Presentation time of a frame in seconds.
    pub fn frame_to_secs(&self, frame_index: u64) -> f64 {
        frame_index as f64 / self.fps as f64
    }

    /// Frame shown at the given time (floor).
    pub fn secs_to_frame(&self, secs: f64) -> u64 {
        if secs <= 0.0 {
            return 0;
        }
        (secs * self.fps as f64).floor() as u64
    }

    /// Number of whole frames in a clip of the given duration.
    ///
    /// Truncates, so a trailing partial frame is not counted.
    pub fn total_frames(&self, duration_secs: f64) -> u64 {
        if duration_secs <= 0.0 {
            return 0;
        }
        (duration_secs * self.fps as f64) as u64
    }

    /// Duration of one frame in nanoseconds.
    pub fn frame_duration_ns(&self) -> u64 {
        1_000_000_000 / self.fps as u64
    }

    /// Clip duration in seconds for a frame count.
    pub fn duration_secs(&self, total_frames: u64) -> f64 {
        self.frame_to_secs(total_frames)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_secs_conversion() {
        let clock = FrameClock::new(60);
        assert!((clock.frame_to_secs(90) - 1.5).abs() < 1e-9);
        assert_eq!(clock.secs_to_frame(1.5), 90);
        assert_eq!(clock.secs_to_frame(-1.0), 0);
    }

    #[test]
    fn test_total_frames_truncates() {
        let clock = FrameClock::new(30);
        assert_eq!(clock.total_frames(2.0), 60);
        assert_eq!(clock.total_frames(2.05), 61);
        assert_eq!(clock.total_frames(0.0), 0);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.fps(), 1);
        assert_eq!(clock.frame_duration_ns(), 1_000_000_000);
    }
}
