//! Flight timing: three-phase frame allocation.
//!
//! Frame counts follow a square-root law on the pixel height of each leg.
//! Ball speed shortens only the rise; the fall is gravity-only. The curve
//! parameter is then handed out non-uniformly across the phases (half the
//! curve for the rise, most of the rest for the apex hold, a sliver for the
//! fall), which makes the ball linger near the top and drop quickly.

use opentrace_trace_model::FlightFrameCounts;

use crate::tuning::TrajectoryTuning;

/// Square-root height factor for one leg of the flight.
fn height_factor(delta_y: f64, tuning: &TrajectoryTuning) -> f64 {
    (delta_y.max(tuning.min_height_delta) / tuning.height_reference).sqrt()
}

/// Ceiling on any single phase, so the three-phase sum always fits `u32`.
pub const MAX_PHASE_FRAMES: u32 = 1 << 24;

/// Round half away from zero into a frame count in `[0, MAX_PHASE_FRAMES]`.
///
/// `+inf` (e.g. zero ball speed) saturates at the ceiling; NaN and negative
/// values map to zero.
fn round_frames(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round().min(MAX_PHASE_FRAMES as f64) as u32
    }
}

/// Compute rise, apex-hold, and fall frame counts.
///
/// `start_y`, `apex_y`, and `end_y` are screen Y values; the apex is expected
/// to be numerically smallest but any ordering yields finite counts because
/// each height is floored at `min_height_delta`.
pub fn flight_frame_counts(
    start_y: f64,
    apex_y: f64,
    end_y: f64,
    ball_speed: f64,
    hangtime: f64,
    tuning: &TrajectoryTuning,
) -> FlightFrameCounts {
    let rise_h = height_factor(start_y - apex_y, tuning);
    let fall_h = height_factor(end_y - apex_y, tuning);

    let rise = round_frames(tuning.base_rise_frames / ball_speed * rise_h).max(tuning.min_rise_frames);
    let apex = round_frames(hangtime * tuning.hangtime_frames * (0.5 + 0.5 * rise_h));
    let fall = round_frames(tuning.gravity_scale * fall_h).max(tuning.min_fall_frames);

    FlightFrameCounts::new(rise, apex, fall)
}

/// Interpolate with exact endpoints: `f = 0` yields `a`, `f = 1` yields `b`.
fn lerp_exact(a: f64, b: f64, f: f64) -> f64 {
    a * (1.0 - f) + b * f
}

/// Map a frame offset from take-off to the curve parameter `t ∈ [0, 1]`.
///
/// Phase boundaries land exactly on `t_rise_end`, `t_apex_end`, and `1.0`.
/// With `apex == 0` the hold is empty: `frame == rise` maps to `t_rise_end`
/// and the fall covers the rest of the curve.
pub fn frame_to_t(frame: u32, rise: u32, apex: u32, fall: u32, tuning: &TrajectoryTuning) -> f64 {
    let t = if frame <= rise {
        let f = if rise == 0 {
            1.0
        } else {
            frame as f64 / rise as f64
        };
        lerp_exact(0.0, tuning.t_rise_end, f)
    } else if frame <= rise.saturating_add(apex) {
        let f = (frame - rise) as f64 / apex as f64;
        lerp_exact(tuning.t_rise_end, tuning.t_apex_end, f)
    } else {
        let f = if fall == 0 {
            1.0
        } else {
            (frame - rise - apex) as f64 / fall as f64
        };
        // An empty hold collapses to two phases instead of jumping in t.
        let from = if apex == 0 {
            tuning.t_rise_end
        } else {
            tuning.t_apex_end
        };
        lerp_exact(from, 1.0, f)
    };

    t.clamp(0.0, 1.0)
}
