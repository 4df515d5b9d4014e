//! Render hand-off: request payload and backend dispatch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use opentrace_common::clock::FrameClock;
use opentrace_common::error::{OpentraceError, OpentraceResult};
use opentrace_trace_model::{TraceDocument, TrackPoint, TracerStyle};

use crate::compositor::{compute_overlay_frames, FrameOverlay};

/// Longest clip the overlay planner accepts (ten minutes at 60 fps).
pub const MAX_RENDER_FRAMES: u64 = 36_000;

/// Payload accepted by the tracer render service (minus the video bytes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Tracer points to draw.
    pub points: Vec<TrackPoint>,
    /// Output frame rate.
    pub fps: u32,
    /// Video width in pixels.
    pub width: u32,
    /// Video height in pixels.
    pub height: u32,
    /// Video duration in seconds.
    pub duration: f64,
    /// Stroke style.
    pub style: TracerStyle,
}

impl RenderRequest {
    /// Build a request from a trace document.
    ///
    /// `duration` overrides the duration derived from the document's video
    /// metadata.
    pub fn from_document(doc: &TraceDocument, duration: Option<f64>) -> Self {
        Self {
            points: doc.points.clone(),
            fps: doc.video.fps,
            width: doc.video.width,
            height: doc.video.height,
            duration: duration.unwrap_or_else(|| doc.video.duration_secs()),
            style: doc.style.clone(),
        }
    }

    /// Number of output frames the renderer will produce.
    pub fn total_frames(&self) -> u64 {
        FrameClock::new(self.fps).total_frames(self.duration)
    }

    /// Check that the request can be rendered.
    pub fn validate(&self) -> OpentraceResult<()> {
        if self.points.is_empty() {
            return Err(OpentraceError::invalid_input("Trace has no points to render"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(OpentraceError::invalid_input(format!(
                "Invalid output size {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(OpentraceError::invalid_input("Frame rate must be positive"));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(OpentraceError::invalid_input(format!(
                "Duration must be positive, got {}",
                self.duration
            )));
        }
        let total_frames = self.total_frames();
        if total_frames > MAX_RENDER_FRAMES {
            return Err(OpentraceError::invalid_input(format!(
                "Clip of {total_frames} frames exceeds the {MAX_RENDER_FRAMES}-frame limit"
            )));
        }
        self.style
            .gradient()
            .map_err(|e| OpentraceError::invalid_input(e.to_string()))?;
        Ok(())
    }

    /// Serialize to the JSON body sent to the render service.
    pub fn to_json(&self) -> OpentraceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Per-frame drawing instructions for a whole clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPlan {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub total_frames: u64,
    pub frames: Vec<FrameOverlay>,
}

impl OverlayPlan {
    pub fn from_request(request: &RenderRequest) -> OpentraceResult<Self> {
        let total_frames = request.total_frames();
        if total_frames > MAX_RENDER_FRAMES {
            return Err(OpentraceError::render(format!(
                "Refusing to plan {total_frames} frames (limit {MAX_RENDER_FRAMES})"
            )));
        }
        let frames = compute_overlay_frames(&request.points, &request.style, total_frames)
            .map_err(|e| OpentraceError::render(e.to_string()))?;
        Ok(Self {
            width: request.width,
            height: request.height,
            fps: request.fps,
            total_frames,
            frames,
        })
    }
}

/// An export job ready to be rendered.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// What to draw.
    pub request: RenderRequest,

    /// Where the backend writes its output.
    pub output_path: PathBuf,
}

/// Trait for render backends (overlay plan writer, remote service, encoder).
pub trait RenderBackend {
    /// Execute the export job.
    fn render(&mut self, job: &ExportJob) -> OpentraceResult<()>;

    /// Check if this backend is available on the system.
    fn is_available(&self) -> bool;

    /// Backend name.
    fn name(&self) -> &str;
}

/// Writes the per-frame overlay plan as JSON instead of rasterizing.
#[derive(Debug, Default)]
pub struct OverlayPlanBackend;

impl OverlayPlanBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for OverlayPlanBackend {
    fn render(&mut self, job: &ExportJob) -> OpentraceResult<()> {
        let plan = OverlayPlan::from_request(&job.request)?;
        let json = serde_json::to_string_pretty(&plan)?;
        write_output(&job.output_path, json)?;
        tracing::debug!(
            frames = plan.total_frames,
            output = %job.output_path.display(),
            "Wrote overlay plan"
        );
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "overlay-plan"
    }
}

/// Writes the render-service request body for an external renderer.
#[derive(Debug, Default)]
pub struct RequestFileBackend;

impl RenderBackend for RequestFileBackend {
    fn render(&mut self, job: &ExportJob) -> OpentraceResult<()> {
        write_output(&job.output_path, job.request.to_json()?)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "render-request"
    }
}

fn write_output(path: &Path, contents: String) -> OpentraceResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Export a trace through the given backend.
///
/// This is the main entry point for rendering.
pub fn export_trace(job: &ExportJob, backend: &mut dyn RenderBackend) -> OpentraceResult<PathBuf> {
    tracing::info!(
        output = %job.output_path.display(),
        points = job.request.points.len(),
        frames = job.request.total_frames(),
        "Starting export"
    );

    job.request.validate()?;

    if !backend.is_available() {
        return Err(OpentraceError::render(format!(
            "Render backend {} is not available",
            backend.name()
        )));
    }

    tracing::info!(backend = backend.name(), "Using render backend");
    backend.render(job)?;

    Ok(job.output_path.clone())
}
