//! Incremental slider edits.
//!
//! A slider change moves the interior handles by a delta instead of
//! re-deriving them, so a handle the user dragged keeps its dragged position
//! on the axes the slider does not own. Height and hangtime only touch `y`;
//! curve only touches `x`; ball speed changes timing alone. The anchors are
//! never moved here.

use opentrace_trace_model::{ControlPoint, ControlPoints, ParameterKey, TracerParameters, VideoMeta};

use crate::tuning::TrajectoryTuning;

/// Apply the change of one slider to an existing handle set.
pub fn apply_parameter_delta(
    points: &ControlPoints,
    old: &TracerParameters,
    new: &TracerParameters,
    key: ParameterKey,
    video: &VideoMeta,
    tuning: &TrajectoryTuning,
) -> ControlPoints {
    let delta = new.get(key) - old.get(key);
    let mut next = *points;

    match key {
        ParameterKey::PeakHeight => {
            let lift = delta * video.height_f64();
            next.launch.y -= lift * tuning.peak_shift_launch;
            next.descent.y -= lift * tuning.peak_shift_descent;
        }
        ParameterKey::Curve => {
            let bend = delta * video.width_f64();
            next.launch.x += bend * tuning.curve_factor_launch;
            next.descent.x += bend * tuning.curve_factor_descent;
        }
        ParameterKey::Hangtime => {
            let apex_height = points.start.y - points.apex_y();
            next.launch.y -= delta * apex_height * tuning.launch_factor_hangtime;
        }
        ParameterKey::BallSpeed => {}
    }

    next
}

/// Slice form of [`apply_parameter_delta`] for UI handle lists.
///
/// An uninitialized list (fewer than three handles or a missing role) is
/// returned unchanged.
pub fn apply_to_handles(
    handles: &[ControlPoint],
    old: &TracerParameters,
    new: &TracerParameters,
    key: ParameterKey,
    video: &VideoMeta,
    tuning: &TrajectoryTuning,
) -> Vec<ControlPoint> {
    match ControlPoints::from_handles(handles) {
        Some(points) => apply_parameter_delta(&points, old, new, key, video, tuning).to_handles(),
        None => handles.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentrace_trace_model::{ControlRole, Point2D};

    fn video() -> VideoMeta {
        VideoMeta::new(600, 600, 60, 200)
    }

    fn points() -> ControlPoints {
        ControlPoints::new(
            Point2D::new(100.0, 500.0),
            Point2D::new(296.8, 392.0),
            Point2D::new(484.0, 320.0),
            Point2D::new(500.0, 500.0),
        )
    }

    fn edit(key: ParameterKey, value: f64) -> ControlPoints {
        let old = TracerParameters::default();
        let new = old.with(key, value);
        apply_parameter_delta(&points(), &old, &new, key, &video(), &TrajectoryTuning::default())
    }

    #[test]
    fn test_peak_height_moves_only_interior_y() {
        let before = points();
        let after = edit(ParameterKey::PeakHeight, 0.4);

        // Delta 0.1 * 600 = 60 px of lift.
        assert!((after.launch.y - (392.0 - 51.0)).abs() < 1e-9);
        assert!((after.descent.y - (320.0 - 39.0)).abs() < 1e-9);
        assert_eq!(after.launch.x, before.launch.x);
        assert_eq!(after.descent.x, before.descent.x);
        assert_eq!(after.start, before.start);
        assert_eq!(after.end, before.end);
    }

    #[test]
    fn test_curve_moves_only_interior_x() {
        let before = points();
        let after = edit(ParameterKey::Curve, -0.5);
        assert!((after.launch.x - (296.8 - 30.0)).abs() < 1e-9);
        assert!((after.descent.x - (484.0 - 60.0)).abs() < 1e-9);
        assert_eq!(after.launch.y, before.launch.y);
        assert_eq!(after.descent.y, before.descent.y);
        assert_eq!(after.end, before.end);
    }

    #[test]
    fn test_hangtime_moves_only_launch_y() {
        let before = points();
        let after = edit(ParameterKey::Hangtime, 0.5);
        // Apex height 180, delta 0.2, weight 0.5 -> 18 px.
        assert!((after.launch.y - (392.0 - 18.0)).abs() < 1e-9);
        assert_eq!(after.launch.x, before.launch.x);
        assert_eq!(after.descent, before.descent);
        assert_eq!(after.end, before.end);
    }

    #[test]
    fn test_ball_speed_is_geometry_neutral() {
        assert_eq!(edit(ParameterKey::BallSpeed, 3.0), points());
    }

    #[test]
    fn test_dragged_descent_keeps_x_under_height_change() {
        let mut dragged = points();
        dragged.set(ControlRole::Descent, Point2D::new(430.0, 300.0));

        let old = TracerParameters::default();
        let new = old.with(ParameterKey::PeakHeight, 0.5);
        let after = apply_parameter_delta(
            &dragged,
            &old,
            &new,
            ParameterKey::PeakHeight,
            &video(),
            &TrajectoryTuning::default(),
        );
        assert_eq!(after.descent.x, 430.0);
        assert!(after.descent.y < 300.0);
    }

    #[test]
    fn test_uninitialized_handles_are_unchanged() {
        let handles = points().to_handles();
        let partial = &handles[..2];
        let old = TracerParameters::default();
        let new = old.with(ParameterKey::PeakHeight, 0.9);
        let out = apply_to_handles(
            partial,
            &old,
            &new,
            ParameterKey::PeakHeight,
            &video(),
            &TrajectoryTuning::default(),
        );
        assert_eq!(out, partial.to_vec());

        let full = apply_to_handles(
            &handles,
            &old,
            &new,
            ParameterKey::PeakHeight,
            &video(),
            &TrajectoryTuning::default(),
        );
        assert_eq!(full.len(), 4);
        assert_ne!(full, handles);
    }
}
