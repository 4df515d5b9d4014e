//! Shot shape: placement of the interior Bézier handles.
//!
//! The apex sits late along the horizontal span so the rise is long and the
//! fall short. The launch handle lies on the straight line from the start to
//! the apex, which keeps the first part of the flight straight off the club.
//! The descent handle is pinned to apex height just short of the landing X,
//! producing a sharp peak and a steep final drop.

use opentrace_trace_model::{ControlPoints, Point2D, TracerParameters, VideoMeta};

use crate::tuning::TrajectoryTuning;

/// The two interior handles derived from slider values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorHandles {
    pub launch: Point2D,
    pub descent: Point2D,
}

/// Apex of the un-curved shot for the given anchors and peak height.
pub fn apex_point(
    start: Point2D,
    end: Point2D,
    peak_height: f64,
    video: &VideoMeta,
    tuning: &TrajectoryTuning,
) -> Point2D {
    let elevation = peak_height * video.height_f64();
    let apex_y = start.y.min(end.y) - elevation;
    let apex_x = start.x + (end.x - start.x) * tuning.apex_x_ratio;
    Point2D::new(apex_x, apex_y)
}

/// Launch handle reach toward the apex for a hangtime value.
pub fn launch_factor(hangtime: f64, tuning: &TrajectoryTuning) -> f64 {
    tuning.launch_factor_base + hangtime * tuning.launch_factor_hangtime
}

/// Compute the launch and descent handles.
///
/// Inputs are expected to be pre-clamped by the caller; out-of-range values
/// produce more extreme but finite geometry.
pub fn compute_control_points(
    start: Point2D,
    end: Point2D,
    params: &TracerParameters,
    video: &VideoMeta,
    tuning: &TrajectoryTuning,
) -> InteriorHandles {
    let apex = apex_point(start, end, params.peak_height, video, tuning);
    let factor = launch_factor(params.hangtime, tuning);
    let bend = params.curve * video.width_f64();

    // Same factor on both axes keeps the launch segment straight.
    let launch = Point2D::new(
        start.x + (apex.x - start.x) * factor + bend * tuning.curve_factor_launch,
        start.y + (apex.y - start.y) * factor,
    );

    let descent = Point2D::new(
        start.x + (end.x - start.x) * tuning.descent_x_ratio + bend * tuning.curve_factor_descent,
        apex.y,
    );

    InteriorHandles { launch, descent }
}

/// Full handle set for a fresh tracer between two anchors.
pub fn initial_control_points(
    start: Point2D,
    end: Point2D,
    params: &TracerParameters,
    video: &VideoMeta,
    tuning: &TrajectoryTuning,
) -> ControlPoints {
    let handles = compute_control_points(start, end, params, video, tuning);
    ControlPoints::new(start, handles.launch, handles.descent, end)
}
