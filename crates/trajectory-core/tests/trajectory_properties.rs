use proptest::prelude::*;

use opentrace_trace_model::{ControlPoints, ParameterKey, Point2D, TracerParameters, VideoMeta};
use opentrace_trajectory::editing::apply_parameter_delta;
use opentrace_trajectory::geometry::initial_control_points;
use opentrace_trajectory::timing::{flight_frame_counts, frame_to_t};
use opentrace_trajectory::{TrajectoryGenerator, TrajectoryRequest, TrajectoryTuning};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn parameters() -> impl Strategy<Value = TracerParameters> {
    (0.0f64..=1.0, -1.0f64..=1.0, 0.5f64..=10.0, 0.0f64..=1.0).prop_map(
        |(peak_height, curve, ball_speed, hangtime)| TracerParameters {
            peak_height,
            curve,
            ball_speed,
            hangtime,
        },
    )
}

fn in_frame_point() -> impl Strategy<Value = Point2D> {
    (0.0f64..=WIDTH as f64, 0.0f64..=HEIGHT as f64).prop_map(|(x, y)| Point2D::new(x, y))
}

/// Seeded request with anchors inside the frame and a real horizontal span.
fn seeded_request() -> impl Strategy<Value = TrajectoryRequest> {
    (
        in_frame_point(),
        in_frame_point(),
        parameters(),
        0u64..120,
        0u64..400,
    )
        .prop_filter("anchors need horizontal span", |(start, end, ..)| {
            (end.x - start.x).abs() >= 5.0
        })
        .prop_map(|(start, end, parameters, start_frame, total_frames)| {
            let video = VideoMeta::new(WIDTH, HEIGHT, 60, total_frames);
            let control_points = initial_control_points(
                start,
                end,
                &parameters,
                &video,
                &TrajectoryTuning::default(),
            );
            TrajectoryRequest {
                control_points,
                parameters,
                start_frame,
                video,
            }
        })
}

/// Arbitrary handles, including ones far outside the frame.
fn wild_request() -> impl Strategy<Value = TrajectoryRequest> {
    let wild = || (-3000.0f64..3000.0, -3000.0f64..3000.0).prop_map(|(x, y)| Point2D::new(x, y));
    (wild(), wild(), wild(), wild(), parameters(), 0u64..50, 0u64..300).prop_map(
        |(start, launch, descent, end, parameters, start_frame, total_frames)| TrajectoryRequest {
            control_points: ControlPoints::new(start, launch, descent, end),
            parameters,
            start_frame,
            video: VideoMeta::new(WIDTH, HEIGHT, 30, total_frames),
        },
    )
}

proptest! {
    #[test]
    fn first_and_last_points_are_anchored(request in seeded_request()) {
        let trajectory = TrajectoryGenerator::with_defaults().plan(&request);
        if let Some(first) = trajectory.points.first() {
            prop_assert_eq!(first.position(), request.control_points.start);
            prop_assert_eq!(first.frame_index, request.start_frame);
        }
        if !trajectory.is_empty() && !trajectory.truncated() {
            let last = trajectory.points[trajectory.points.len() - 1];
            let end = request.control_points.end;
            prop_assert!((last.x - end.x).abs() <= 1e-6 * end.x.abs().max(1.0));
            prop_assert!((last.y - end.y).abs() <= 1e-6 * end.y.abs().max(1.0));
        }
    }

    #[test]
    fn frame_indices_are_contiguous(request in seeded_request()) {
        let trajectory = TrajectoryGenerator::with_defaults().plan(&request);
        for pair in trajectory.points.windows(2) {
            prop_assert_eq!(pair[1].frame_index, pair[0].frame_index + 1);
        }
    }

    #[test]
    fn points_stay_inside_frame(request in wild_request()) {
        let trajectory = TrajectoryGenerator::with_defaults().plan(&request);
        for p in &trajectory.points {
            prop_assert!((0.0..=WIDTH as f64).contains(&p.x));
            prop_assert!((0.0..=HEIGHT as f64).contains(&p.y));
        }
    }

    #[test]
    fn output_respects_frame_budget(request in wild_request()) {
        let trajectory = TrajectoryGenerator::with_defaults().plan(&request);
        let room = request.video.total_frames.saturating_sub(request.start_frame);
        prop_assert!(trajectory.points.len() as u64 <= room);
        if let Some(last) = trajectory.last_frame() {
            prop_assert!(last < request.video.total_frames);
        }
    }

    #[test]
    fn faster_ball_never_lengthens_rise(
        start_y in 0.0f64..1000.0,
        apex_y in 0.0f64..1000.0,
        end_y in 0.0f64..1000.0,
        slow in 0.5f64..10.0,
        extra in 0.0f64..5.0,
        hangtime in 0.0f64..=1.0,
    ) {
        let tuning = TrajectoryTuning::default();
        let a = flight_frame_counts(start_y, apex_y, end_y, slow, hangtime, &tuning);
        let b = flight_frame_counts(start_y, apex_y, end_y, slow + extra, hangtime, &tuning);
        prop_assert!(b.rise <= a.rise);
        prop_assert!(b.rise >= tuning.min_rise_frames);
        prop_assert_eq!(b.fall, a.fall);
    }

    #[test]
    fn more_hangtime_never_shortens_apex(
        start_y in 0.0f64..1000.0,
        apex_y in 0.0f64..1000.0,
        end_y in 0.0f64..1000.0,
        speed in 0.5f64..10.0,
        low in 0.0f64..=1.0,
        extra in 0.0f64..=1.0,
    ) {
        let tuning = TrajectoryTuning::default();
        let a = flight_frame_counts(start_y, apex_y, end_y, speed, low, &tuning);
        let b = flight_frame_counts(start_y, apex_y, end_y, speed, low + extra, &tuning);
        prop_assert!(b.apex >= a.apex);
        prop_assert!(a.fall >= tuning.min_fall_frames);
    }

    #[test]
    fn phase_boundaries_map_exactly(rise in 1u32..400, apex in 1u32..400, fall in 1u32..400) {
        let tuning = TrajectoryTuning::default();
        prop_assert_eq!(frame_to_t(rise, rise, apex, fall, &tuning), 0.5);
        prop_assert_eq!(frame_to_t(rise + apex, rise, apex, fall, &tuning), 0.85);
        prop_assert_eq!(frame_to_t(rise + apex + fall, rise, apex, fall, &tuning), 1.0);
    }

    #[test]
    fn regeneration_is_identical(request in wild_request()) {
        let generator = TrajectoryGenerator::with_defaults();
        let first = serde_json::to_string(&generator.plan(&request).points).unwrap();
        let second = serde_json::to_string(&generator.plan(&request).points).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn height_edit_preserves_x_and_end(
        request in seeded_request(),
        new_height in 0.0f64..=1.0,
    ) {
        let new = request.parameters.with(ParameterKey::PeakHeight, new_height);
        let before = request.control_points;
        let after = apply_parameter_delta(
            &before,
            &request.parameters,
            &new,
            ParameterKey::PeakHeight,
            &request.video,
            &TrajectoryTuning::default(),
        );
        prop_assert_eq!(after.launch.x, before.launch.x);
        prop_assert_eq!(after.descent.x, before.descent.x);
        prop_assert_eq!(after.end, before.end);
        prop_assert_eq!(after.start, before.start);
    }
}
