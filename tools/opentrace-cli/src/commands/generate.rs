//! Generate a tracer from take-off and landing taps.

use std::path::PathBuf;

use opentrace_common::AppConfig;
use opentrace_trace_model::{ParameterKey, Point2D, TraceDocument, VideoMeta};
use opentrace_trajectory::EditingSession;

pub struct GenerateArgs {
    pub start: Point2D,
    pub end: Point2D,
    pub width: u32,
    pub height: u32,
    pub total_frames: u64,
    pub start_frame: u64,
    pub fps: Option<u32>,
    pub peak_height: Option<f64>,
    pub curve: Option<f64>,
    pub ball_speed: Option<f64>,
    pub hangtime: Option<f64>,
    pub tuning: Option<PathBuf>,
}

pub fn run(config: &AppConfig, args: GenerateArgs, output: PathBuf) -> anyhow::Result<()> {
    let tuning = super::load_tuning(args.tuning.as_deref())?;
    let video = VideoMeta::new(
        args.width,
        args.height,
        args.fps.unwrap_or(config.tracer.fps),
        args.total_frames,
    );

    let mut parameters = super::default_parameters(&config.tracer);
    let overrides = [
        (ParameterKey::PeakHeight, args.peak_height),
        (ParameterKey::Curve, args.curve),
        (ParameterKey::BallSpeed, args.ball_speed),
        (ParameterKey::Hangtime, args.hangtime),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            parameters = parameters.with(key, value);
        }
    }
    let parameters = parameters.clamped();

    let mut session = EditingSession::new(video, tuning).with_parameters(parameters);
    session.start_from_taps(args.start, args.end, args.start_frame)?;
    let trajectory = session.commit()?;

    let control_points = session
        .control_points()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Session has no control points after seeding"))?;

    let doc = TraceDocument::new(
        video,
        *session.parameters(),
        control_points,
        trajectory.frame_counts,
        trajectory.points.clone(),
    );
    super::write_trace(config, doc, &trajectory, &output)
}
