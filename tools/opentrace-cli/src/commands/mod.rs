//! Subcommand implementations and shared argument helpers.

pub mod generate;
pub mod plan;
pub mod request;
pub mod seed;

use std::path::Path;

use anyhow::Context;

use opentrace_common::{AppConfig, TracerDefaults};
use opentrace_trace_model::{Point2D, TraceDocument, TracerParameters, TracerStyle};
use opentrace_trajectory::{Trajectory, TrajectoryTuning};

/// Parse a pixel position written as `X,Y`.
pub fn parse_point(value: &str) -> Result<Point2D, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in '{value}': {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in '{value}': {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("point '{value}' is not finite"));
    }
    Ok(Point2D::new(x, y))
}

pub(crate) fn load_tuning(path: Option<&Path>) -> anyhow::Result<TrajectoryTuning> {
    match path {
        Some(path) => TrajectoryTuning::load(path)
            .with_context(|| format!("Failed to load tuning from {}", path.display())),
        None => Ok(TrajectoryTuning::default()),
    }
}

pub(crate) fn default_parameters(defaults: &TracerDefaults) -> TracerParameters {
    TracerParameters {
        peak_height: defaults.peak_height,
        curve: defaults.curve,
        ball_speed: defaults.ball_speed,
        hangtime: defaults.hangtime,
    }
}

pub(crate) fn default_style(defaults: &TracerDefaults) -> TracerStyle {
    TracerStyle {
        start_color: defaults.start_color.clone(),
        end_color: defaults.end_color.clone(),
        line_width: defaults.line_width,
        glow_intensity: defaults.glow_intensity,
    }
}

pub(crate) fn load_trace(path: &Path) -> anyhow::Result<TraceDocument> {
    TraceDocument::load(path).map_err(|e| anyhow::anyhow!("Failed to load trace: {e}"))
}

/// Save a committed trajectory as a trace document and print a summary.
pub(crate) fn write_trace(
    config: &AppConfig,
    mut doc: TraceDocument,
    trajectory: &Trajectory,
    output: &Path,
) -> anyhow::Result<()> {
    doc.style = default_style(&config.tracer);
    doc.save(output)
        .map_err(|e| anyhow::anyhow!("Failed to write trace: {e}"))?;
    tracing::info!(
        output = %output.display(),
        points = doc.points.len(),
        truncated = trajectory.truncated(),
        "Trace written"
    );

    println!("Trace written: {}", output.display());
    println!("  Path: {:?}", trajectory.path);
    if let Some(counts) = trajectory.frame_counts {
        println!(
            "  Phases: rise {} / apex {} / fall {} ({} frames)",
            counts.rise, counts.apex, counts.fall, counts.total
        );
    }
    if let Some((first, last)) = doc.frame_span() {
        println!("  Frames: {first}..={last} ({} points)", doc.points.len());
    }
    if trajectory.truncated() {
        println!("  Note: flight truncated at the end of the video");
    }
    Ok(())
}
