//! Trajectory generation: one tracer point per video frame.
//!
//! # Algorithm
//!
//! 1. **Apex:** the higher of the two interior handles.
//! 2. **Timing:** rise / apex-hold / fall frame counts from the timing model.
//! 3. **Budget:** never emit past the last frame of the video; truncate, never
//!    rescale.
//! 4. **Sampling:** map each frame offset to `t`, evaluate the Bézier, clamp
//!    into the frame.

use opentrace_trace_model::{
    ControlPoints, FlightFrameCounts, Point2D, TrackPoint, TracerParameters, VideoMeta,
};

use crate::bezier::evaluate_control_points;
use crate::timing::{flight_frame_counts, frame_to_t};
use crate::tuning::TrajectoryTuning;

/// Immutable inputs of one generation call.
///
/// Callers serving several sessions at once snapshot one request per call and
/// share nothing mutable between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRequest {
    pub control_points: ControlPoints,
    pub parameters: TracerParameters,
    /// Frame of the ball strike; the first tracer point lands here.
    pub start_frame: u64,
    pub video: VideoMeta,
}

/// Shape of a generated flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPath {
    /// The three-phase Bézier flight.
    Curved,
    /// Two-point fallback for anchors with no horizontal span.
    Straight,
}

/// Result of planning a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub path: FlightPath,
    /// Phase counts of the curved flight; `None` for the straight fallback.
    pub frame_counts: Option<FlightFrameCounts>,
    pub points: Vec<TrackPoint>,
}

impl Trajectory {
    /// A trajectory with no points (uninitialized session or no frame room).
    pub fn empty() -> Self {
        Self {
            path: FlightPath::Curved,
            frame_counts: None,
            points: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the curved flight was cut short by the end of the video.
    pub fn truncated(&self) -> bool {
        match self.frame_counts {
            Some(counts) => self.points.len() < counts.total as usize + 1,
            None => false,
        }
    }

    /// Last frame the tracer covers.
    pub fn last_frame(&self) -> Option<u64> {
        self.points.last().map(|p| p.frame_index)
    }
}

/// Frames available after `start_frame`, or `None` when there is no room for
/// a flight.
pub fn frame_budget(start_frame: u64, total_video_frames: u64) -> Option<u64> {
    let budget = total_video_frames.checked_sub(start_frame)?.checked_sub(1)?;
    if budget < 1 {
        return None;
    }
    Some(budget)
}

/// The trajectory generator.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryGenerator {
    tuning: TrajectoryTuning,
}

impl TrajectoryGenerator {
    /// Create a generator with the given tuning.
    pub fn new(tuning: TrajectoryTuning) -> Self {
        Self { tuning }
    }

    /// Create a generator with the canonical constants.
    pub fn with_defaults() -> Self {
        Self::new(TrajectoryTuning::default())
    }

    pub fn tuning(&self) -> &TrajectoryTuning {
        &self.tuning
    }

    /// Phase frame counts for the current handles and sliders.
    pub fn frame_counts(
        &self,
        points: &ControlPoints,
        params: &TracerParameters,
    ) -> FlightFrameCounts {
        flight_frame_counts(
            points.start.y,
            points.apex_y(),
            points.end.y,
            params.ball_speed,
            params.hangtime,
            &self.tuning,
        )
    }

    /// Sample the curved flight, one point per frame from `start_frame`.
    ///
    /// Does not guard against a zero horizontal span; use [`Self::plan`] for
    /// that.
    pub fn generate(
        &self,
        points: &ControlPoints,
        params: &TracerParameters,
        start_frame: u64,
        video: &VideoMeta,
    ) -> Vec<TrackPoint> {
        let counts = self.frame_counts(points, params);
        self.sample(points, &counts, start_frame, video)
    }

    /// Plan a flight, falling back to a straight two-point path when the
    /// anchors have no horizontal span.
    pub fn plan(&self, request: &TrajectoryRequest) -> Trajectory {
        let points = &request.control_points;
        let video = &request.video;

        if self.is_degenerate(points) {
            let straight = self.straight_line(points, request.start_frame, video);
            tracing::debug!(
                start_frame = request.start_frame,
                emitted = straight.len(),
                "Anchors have no horizontal span; using straight tracer"
            );
            return Trajectory {
                path: FlightPath::Straight,
                frame_counts: None,
                points: straight,
            };
        }

        let counts = self.frame_counts(points, &request.parameters);
        let sampled = self.sample(points, &counts, request.start_frame, video);
        let trajectory = Trajectory {
            path: FlightPath::Curved,
            frame_counts: Some(counts),
            points: sampled,
        };

        tracing::debug!(
            rise = counts.rise,
            apex = counts.apex,
            fall = counts.fall,
            total = counts.total,
            start_frame = request.start_frame,
            emitted = trajectory.points.len(),
            truncated = trajectory.truncated(),
            "Planned tracer flight"
        );

        trajectory
    }

    /// Whether the anchors are too close horizontally for the curve model.
    pub fn is_degenerate(&self, points: &ControlPoints) -> bool {
        (points.end.x - points.start.x).abs() < self.tuning.min_horizontal_span
    }

    fn sample(
        &self,
        points: &ControlPoints,
        counts: &FlightFrameCounts,
        start_frame: u64,
        video: &VideoMeta,
    ) -> Vec<TrackPoint> {
        let Some(budget) = frame_budget(start_frame, video.total_frames) else {
            return vec![];
        };
        let emit = (counts.total as u64).min(budget);
        let (width, height) = (video.width_f64(), video.height_f64());

        let mut out = Vec::with_capacity(emit as usize + 1);
        for i in 0..=emit {
            let frame_index = start_frame + i;
            if frame_index >= video.total_frames {
                break;
            }
            // i <= counts.total, so it fits the u32 frame domain.
            let t = frame_to_t(i as u32, counts.rise, counts.apex, counts.fall, &self.tuning);
            let position = evaluate_control_points(t, points).clamped(width, height);
            out.push(TrackPoint::generated(frame_index, position));
        }
        out
    }

    fn straight_line(
        &self,
        points: &ControlPoints,
        start_frame: u64,
        video: &VideoMeta,
    ) -> Vec<TrackPoint> {
        if frame_budget(start_frame, video.total_frames).is_none() {
            return vec![];
        }
        let clamp = |p: Point2D| p.clamped(video.width_f64(), video.height_f64());
        vec![
            TrackPoint::generated(start_frame, clamp(points.start)),
            TrackPoint::generated(start_frame + 1, clamp(points.end)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::initial_control_points;

    fn video(total_frames: u64) -> VideoMeta {
        VideoMeta::new(600, 600, 60, total_frames)
    }

    fn reference_points(v: &VideoMeta) -> ControlPoints {
        initial_control_points(
            Point2D::new(100.0, 500.0),
            Point2D::new(500.0, 500.0),
            &TracerParameters::default(),
            v,
            &TrajectoryTuning::default(),
        )
    }

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(0, 200), Some(199));
        assert_eq!(frame_budget(198, 200), Some(1));
        assert_eq!(frame_budget(199, 200), None);
        assert_eq!(frame_budget(250, 200), None);
    }

    #[test]
    fn test_generate_anchors_and_length() {
        let v = video(200);
        let points = reference_points(&v);
        let generator = TrajectoryGenerator::with_defaults();
        let out = generator.generate(&points, &TracerParameters::default(), 0, &v);

        assert_eq!(out.len(), 104);
        assert_eq!(out[0].position(), points.start);
        assert_eq!(out[103].position(), points.end);
        assert_eq!(out[103].frame_index, 103);
    }

    #[test]
    fn test_truncates_at_end_of_video() {
        let v = video(150);
        let points = reference_points(&v);
        let generator = TrajectoryGenerator::with_defaults();
        let request = TrajectoryRequest {
            control_points: points,
            parameters: TracerParameters::default(),
            start_frame: 100,
            video: v,
        };
        let trajectory = generator.plan(&request);

        // Budget is 150 - 100 - 1 = 49 frames after the strike.
        assert_eq!(trajectory.points.len(), 50);
        assert_eq!(trajectory.last_frame(), Some(149));
        assert!(trajectory.truncated());
        assert_ne!(trajectory.points[49].position(), points.end);
    }

    #[test]
    fn test_no_room_yields_empty() {
        let v = video(100);
        let points = reference_points(&v);
        let generator = TrajectoryGenerator::with_defaults();
        assert!(generator
            .generate(&points, &TracerParameters::default(), 99, &v)
            .is_empty());
        assert!(generator
            .generate(&points, &TracerParameters::default(), 120, &v)
            .is_empty());
    }

    #[test]
    fn test_points_are_clamped_into_frame() {
        let v = video(300);
        let points = ControlPoints::new(
            Point2D::new(100.0, 500.0),
            Point2D::new(-400.0, -900.0),
            Point2D::new(1200.0, -900.0),
            Point2D::new(500.0, 500.0),
        );
        let generator = TrajectoryGenerator::with_defaults();
        let out = generator.generate(&points, &TracerParameters::default(), 0, &v);
        assert!(!out.is_empty());
        for p in &out {
            assert!((0.0..=600.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
        }
    }

    #[test]
    fn test_vertical_shot_uses_straight_fallback() {
        let v = video(200);
        let points = ControlPoints::new(
            Point2D::new(300.0, 500.0),
            Point2D::new(300.0, 300.0),
            Point2D::new(300.0, 200.0),
            Point2D::new(300.4, 450.0),
        );
        let generator = TrajectoryGenerator::with_defaults();
        let trajectory = generator.plan(&TrajectoryRequest {
            control_points: points,
            parameters: TracerParameters::default(),
            start_frame: 10,
            video: v,
        });

        assert_eq!(trajectory.path, FlightPath::Straight);
        assert_eq!(trajectory.frame_counts, None);
        assert_eq!(trajectory.points.len(), 2);
        assert_eq!(trajectory.points[0].frame_index, 10);
        assert_eq!(trajectory.points[1].frame_index, 11);
        assert_eq!(trajectory.points[1].position(), points.end);
        assert!(!trajectory.truncated());
    }

    #[test]
    fn test_generated_points_are_certain() {
        let v = video(200);
        let points = reference_points(&v);
        let out = TrajectoryGenerator::with_defaults().generate(
            &points,
            &TracerParameters::default(),
            5,
            &v,
        );
        assert!(out.iter().all(|p| p.confidence == 1.0 && !p.is_estimated));
        assert!(out.windows(2).all(|w| w[1].frame_index == w[0].frame_index + 1));
        assert_eq!(out[0].frame_index, 5);
    }
}
