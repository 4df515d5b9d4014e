//! Seed a tracer from a detected ball track.

use std::path::PathBuf;

use anyhow::Context;

use opentrace_common::AppConfig;
use opentrace_trace_model::{parse_track, Point2D, TraceDocument, VideoMeta};
use opentrace_trajectory::EditingSession;

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &AppConfig,
    track: PathBuf,
    width: u32,
    height: u32,
    total_frames: u64,
    fps: Option<u32>,
    landing: Option<Point2D>,
    tuning: Option<PathBuf>,
    output: PathBuf,
) -> anyhow::Result<()> {
    let tuning = super::load_tuning(tuning.as_deref())?;
    let content = std::fs::read_to_string(&track)
        .with_context(|| format!("Failed to read track {}", track.display()))?;
    let detections = parse_track(&content)
        .with_context(|| format!("Failed to parse track {}", track.display()))?;
    println!(
        "Seeding from {} detections in {}",
        detections.len(),
        track.display()
    );

    let video = VideoMeta::new(
        width,
        height,
        fps.unwrap_or(config.tracer.fps),
        total_frames,
    );
    let parameters = super::default_parameters(&config.tracer).clamped();

    let mut session = EditingSession::new(video, tuning).with_parameters(parameters);
    session.start_from_track(&detections, landing)?;
    println!(
        "  Estimated peak height: {:.2}",
        session.parameters().peak_height
    );
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
