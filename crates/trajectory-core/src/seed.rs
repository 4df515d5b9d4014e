//! First-time handle placement.
//!
//! A session starts from either a detected ball track or two taps. For a
//! track, the take-off is the earliest detection, the landing is the caller's
//! landing point (or the latest detection), and the highest detection sets the
//! peak height slider.

use opentrace_trace_model::{ControlPoints, Point2D, TrackPoint, TracerParameters, VideoMeta};

use crate::geometry::initial_control_points;
use crate::tuning::TrajectoryTuning;

/// Initial state for an editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub control_points: ControlPoints,
    pub parameters: TracerParameters,
    /// Frame of the ball strike.
    pub start_frame: u64,
}

/// Peak height slider value implied by an observed apex.
pub fn peak_height_from_apex(start: Point2D, end: Point2D, apex_y: f64, video: &VideoMeta) -> f64 {
    let height = video.height_f64();
    if height <= 0.0 {
        return 0.0;
    }
    ((start.y.min(end.y) - apex_y) / height).clamp(0.0, 1.0)
}

/// Seed handles from a detected track.
///
/// Returns `None` unless there are at least two usable positions (the landing
/// point counts as one). Non-finite detections are ignored.
pub fn seed_from_track(
    track: &[TrackPoint],
    landing: Option<Point2D>,
    video: &VideoMeta,
    base: &TracerParameters,
    tuning: &TrajectoryTuning,
) -> Option<Seed> {
    let mut ordered: Vec<&TrackPoint> = track
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    ordered.sort_by_key(|p| p.frame_index);

    let first = *ordered.first()?;
    let start = first.position();
    let end = match landing {
        Some(point) => point,
        None if ordered.len() >= 2 => ordered.last()?.position(),
        None => return None,
    };

    let apex_y = ordered
        .iter()
        .map(|p| p.y)
        .chain(std::iter::once(end.y))
        .fold(f64::INFINITY, f64::min);

    let parameters = TracerParameters {
        peak_height: peak_height_from_apex(start, end, apex_y, video),
        ..*base
    };

    tracing::debug!(
        detections = ordered.len(),
        start_frame = first.frame_index,
        peak_height = parameters.peak_height,
        "Seeded tracer from track"
    );

    Some(Seed {
        control_points: initial_control_points(start, end, &parameters, video, tuning),
        parameters,
        start_frame: first.frame_index,
    })
}

/// Seed handles from a two-tap placement.
pub fn seed_from_taps(
    start: Point2D,
    end: Point2D,
    start_frame: u64,
    video: &VideoMeta,
    base: &TracerParameters,
    tuning: &TrajectoryTuning,
) -> Seed {
    Seed {
        control_points: initial_control_points(start, end, base, video, tuning),
        parameters: *base,
        start_frame,
    }
}
