//! Write per-frame overlay drawing instructions.

use std::path::PathBuf;

use anyhow::Context;

use opentrace_render_engine::{export_trace, ExportJob, OverlayPlanBackend, RenderRequest};
use opentrace_trace_model::TracerStyle;

pub fn run(
    trace: PathBuf,
    style: Option<PathBuf>,
    duration: Option<f64>,
    output: PathBuf,
) -> anyhow::Result<()> {
    let doc = super::load_trace(&trace)?;
    let mut request = RenderRequest::from_document(&doc, duration);

    if let Some(style_path) = style {
        let json = std::fs::read_to_string(&style_path)
            .with_context(|| format!("Failed to read style {}", style_path.display()))?;
        request.style = serde_json::from_str::<TracerStyle>(&json)
            .with_context(|| format!("Failed to parse style {}", style_path.display()))?;
        tracing::debug!(path = %style_path.display(), "Using style override");
    }

    println!("Planning overlay for: {}", trace.display());
    println!(
        "  Output: {}x{} @ {}fps, {} frames",
        request.width,
        request.height,
        request.fps,
        request.total_frames()
    );

    let job = ExportJob {
        request,
        output_path: output,
    };
    let written = export_trace(&job, &mut OverlayPlanBackend::new())?;
    println!("Overlay plan written: {}", written.display());
    Ok(())
}
