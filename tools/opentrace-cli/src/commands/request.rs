//! Write the render service request body.

use std::path::PathBuf;

use opentrace_render_engine::{export_trace, ExportJob, RenderRequest, RequestFileBackend};

pub fn run(trace: PathBuf, duration: Option<f64>, output: PathBuf) -> anyhow::Result<()> {
    let doc = super::load_trace(&trace)?;
    let job = ExportJob {
        request: RenderRequest::from_document(&doc, duration),
        output_path: output,
    };

    let written = export_trace(&job, &mut RequestFileBackend)?;
    println!("Render request written: {}", written.display());
    println!(
        "  Points: {}, duration: {:.2}s",
        job.request.points.len(),
        job.request.duration
    );
    Ok(())
}
