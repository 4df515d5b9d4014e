//! Presentation constants of the trajectory model.
//!
//! None of these are physical constants. They define the visual signature of
//! the tracer (long rise, sharp high apex, short steep fall) and may be tuned
//! per product without touching the algorithms.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Named, loadable constants for geometry, timing, and editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryTuning {
    /// Fraction of the horizontal span at which the apex sits.
    pub apex_x_ratio: f64,

    /// Launch handle reach toward the apex at zero hangtime.
    pub launch_factor_base: f64,

    /// Additional launch reach per unit of hangtime.
    pub launch_factor_hangtime: f64,

    /// Fraction of the horizontal span at which the descent handle sits.
    pub descent_x_ratio: f64,

    /// Lateral launch-handle shift per unit curve, as a fraction of width.
    pub curve_factor_launch: f64,

    /// Lateral descent-handle shift per unit curve, as a fraction of width.
    pub curve_factor_descent: f64,

    /// Rise frames for a reference-height shot at ball speed 1.
    pub base_rise_frames: f64,

    /// Apex hold frames at hangtime 1 for a reference-height shot.
    pub hangtime_frames: f64,

    /// Fall frames for a reference-height drop.
    pub gravity_scale: f64,

    /// Floor on rise frames.
    pub min_rise_frames: u32,

    /// Floor on fall frames.
    pub min_fall_frames: u32,

    /// Floor on the pixel height fed into the square-root law.
    pub min_height_delta: f64,

    /// Pixel height that maps to a square-root factor of 1.
    pub height_reference: f64,

    /// Curve parameter reached at the end of the rise phase.
    pub t_rise_end: f64,

    /// Curve parameter reached at the end of the apex hold.
    pub t_apex_end: f64,

    /// Launch-handle lift per unit peak height, as a fraction of frame height.
    pub peak_shift_launch: f64,

    /// Descent-handle lift per unit peak height, as a fraction of frame height.
    pub peak_shift_descent: f64,

    /// Horizontal span (pixels) below which the straight-line fallback is used.
    pub min_horizontal_span: f64,
}

impl Default for TrajectoryTuning {
    fn default() -> Self {
        Self {
            apex_x_ratio: 0.82,
            launch_factor_base: 0.45,
            launch_factor_hangtime: 0.50,
            descent_x_ratio: 0.96,
            curve_factor_launch: 0.10,
            curve_factor_descent: 0.20,
            base_rise_frames: 50.0,
            hangtime_frames: 70.0,
            gravity_scale: 8.0,
            min_rise_frames: 5,
            min_fall_frames: 5,
            min_height_delta: 10.0,
            height_reference: 100.0,
            t_rise_end: 0.50,
            t_apex_end: 0.85,
            peak_shift_launch: 0.85,
            peak_shift_descent: 0.65,
            min_horizontal_span: 1.0,
        }
    }
}

impl TrajectoryTuning {
    /// Check the constraints the timing model relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.t_rise_end > 0.0 && self.t_rise_end < self.t_apex_end && self.t_apex_end < 1.0)
        {
            return Err(TuningError::PhaseBoundaries {
                rise_end: self.t_rise_end,
                apex_end: self.t_apex_end,
            });
        }
        if self.min_rise_frames == 0 || self.min_fall_frames == 0 {
            return Err(TuningError::invalid("frame floors must be at least 1"));
        }
        if self.height_reference <= 0.0 {
            return Err(TuningError::invalid("height_reference must be positive"));
        }
        if self.min_height_delta <= 0.0 {
            return Err(TuningError::invalid("min_height_delta must be positive"));
        }
        if self.base_rise_frames < 0.0 || self.hangtime_frames < 0.0 || self.gravity_scale < 0.0 {
            return Err(TuningError::invalid("frame scales must not be negative"));
        }
        Ok(())
    }

    /// Load tuning from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TuningError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let tuning: Self = serde_json::from_str(&content).map_err(|e| TuningError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        tuning.validate()?;
        tracing::debug!(path = %path.display(), "Loaded trajectory tuning");
        Ok(tuning)
    }
}

/// Errors loading or validating tuning.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Phase boundaries must satisfy 0 < rise_end ({rise_end}) < apex_end ({apex_end}) < 1")]
    PhaseBoundaries { rise_end: f64, apex_end: f64 },

    #[error("Invalid tuning: {message}")]
    Invalid { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl TuningError {
    fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid {
            message: msg.into(),
        }
    }
}

impl From<TuningError> for opentrace_common::OpentraceError {
    fn from(err: TuningError) -> Self {
        opentrace_common::OpentraceError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TrajectoryTuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_phase_boundaries() {
        let tuning = TrajectoryTuning {
            t_rise_end: 0.9,
            t_apex_end: 0.6,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::PhaseBoundaries { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_floor() {
        let tuning = TrajectoryTuning {
            min_fall_frames: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid { .. })));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: TrajectoryTuning =
            serde_json::from_str(r#"{"base_rise_frames": 45.0, "gravity_scale": 12.0}"#).unwrap();
        assert_eq!(tuning.base_rise_frames, 45.0);
        assert_eq!(tuning.gravity_scale, 12.0);
        assert_eq!(tuning.hangtime_frames, 70.0);
        assert_eq!(tuning.apex_x_ratio, 0.82);
    }

    #[test]
    fn test_load_validates_file() {
        let dir = std::env::temp_dir().join("opentrace_test_tuning");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tuning.json");

        std::fs::write(&path, r#"{"t_rise_end": 0.95}"#).unwrap();
        assert!(TrajectoryTuning::load(&path).is_err());

        std::fs::write(&path, r#"{"t_rise_end": 0.4}"#).unwrap();
        let tuning = TrajectoryTuning::load(&path).unwrap();
        assert_eq!(tuning.t_rise_end, 0.4);

        std::fs::remove_dir_all(&dir).ok();
    }
}
