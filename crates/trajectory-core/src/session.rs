//! Tracer editing session.
//!
//! One session owns one handle set and one slider set. State transitions are
//! explicit: a session is seeded (`Initializing` → `Previewing`), edited while
//! previewing, then committed. Every edit regenerates the flight from scratch
//! since generation is a cheap pure function of the current snapshot.

use std::collections::HashSet;

use opentrace_trace_model::{
    ControlPoint, ControlPoints, ControlRole, FlightFrameCounts, ParameterKey, Point2D,
    TrackPoint, TracerParameters, VideoMeta,
};

use crate::editing::apply_parameter_delta;
use crate::generator::{Trajectory, TrajectoryGenerator, TrajectoryRequest};
use crate::seed::{seed_from_taps, seed_from_track, Seed};
use crate::tuning::TrajectoryTuning;

/// Lifecycle of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No handles yet; nothing to draw.
    Initializing,
    /// Handles placed; edits regenerate the preview.
    Previewing,
    /// Trajectory accepted for export; edits are rejected until reopened.
    Committed,
}

/// Errors raised by session transitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot {action} while session is {state:?}")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },

    #[error("Need at least two ball positions to place a tracer")]
    NotEnoughTrackPoints,

    #[error("Not enough room before end of video (start frame {start_frame}, {total_frames} frames)")]
    NotEnoughFrames { start_frame: u64, total_frames: u64 },
}

impl From<SessionError> for opentrace_common::OpentraceError {
    fn from(err: SessionError) -> Self {
        opentrace_common::OpentraceError::session(err.to_string())
    }
}

/// A single tracer being edited.
#[derive(Debug, Clone)]
pub struct EditingSession {
    state: SessionState,
    video: VideoMeta,
    generator: TrajectoryGenerator,
    parameters: TracerParameters,
    /// Slider values restored by `reset`.
    defaults: TracerParameters,
    control_points: Option<ControlPoints>,
    start_frame: u64,
    manually_edited: HashSet<ControlRole>,
}

impl EditingSession {
    /// Create an empty session for a video.
    pub fn new(video: VideoMeta, tuning: TrajectoryTuning) -> Self {
        Self {
            state: SessionState::Initializing,
            video,
            generator: TrajectoryGenerator::new(tuning),
            parameters: TracerParameters::default(),
            defaults: TracerParameters::default(),
            control_points: None,
            start_frame: 0,
            manually_edited: HashSet::new(),
        }
    }

    /// Use these slider values for the next seed instead of the defaults.
    pub fn with_parameters(mut self, parameters: TracerParameters) -> Self {
        self.parameters = parameters;
        self.defaults = parameters;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn video(&self) -> &VideoMeta {
        &self.video
    }

    pub fn parameters(&self) -> &TracerParameters {
        &self.parameters
    }

    pub fn control_points(&self) -> Option<&ControlPoints> {
        self.control_points.as_ref()
    }

    /// Drag handles for the UI; empty before seeding.
    pub fn handles(&self) -> Vec<ControlPoint> {
        self.control_points
            .map(|points| points.to_handles())
            .unwrap_or_default()
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    /// Whether the user dragged this handle since the session was seeded.
    pub fn is_manually_edited(&self, role: ControlRole) -> bool {
        self.manually_edited.contains(&role)
    }

    /// Seed from a detected ball track.
    pub fn start_from_track(
        &mut self,
        track: &[TrackPoint],
        landing: Option<Point2D>,
    ) -> Result<(), SessionError> {
        self.require(SessionState::Initializing, "seed from track")?;
        let seed = seed_from_track(
            track,
            landing,
            &self.video,
            &self.parameters,
            self.generator.tuning(),
        )
        .ok_or(SessionError::NotEnoughTrackPoints)?;
        self.apply_seed(seed);
        Ok(())
    }

    /// Seed from two taps: take-off and landing.
    pub fn start_from_taps(
        &mut self,
        start: Point2D,
        end: Point2D,
        start_frame: u64,
    ) -> Result<(), SessionError> {
        self.require(SessionState::Initializing, "seed from taps")?;
        let seed = seed_from_taps(
            start,
            end,
            start_frame,
            &self.video,
            &self.parameters,
            self.generator.tuning(),
        );
        self.apply_seed(seed);
        Ok(())
    }

    /// Change one slider, moving the interior handles by the resulting delta.
    pub fn set_parameter(&mut self, key: ParameterKey, value: f64) -> Result<(), SessionError> {
        self.require(SessionState::Previewing, "change a parameter")?;
        let next = self.parameters.with(key, value);
        if let Some(points) = self.control_points {
            self.control_points = Some(apply_parameter_delta(
                &points,
                &self.parameters,
                &next,
                key,
                &self.video,
                self.generator.tuning(),
            ));
        }
        tracing::debug!(?key, value, "Tracer parameter changed");
        self.parameters = next;
        Ok(())
    }

    /// Move one handle to an absolute position.
    pub fn drag(&mut self, role: ControlRole, position: Point2D) -> Result<(), SessionError> {
        self.require(SessionState::Previewing, "drag a handle")?;
        if let Some(points) = self.control_points.as_mut() {
            points.set(role, position);
            self.manually_edited.insert(role);
            tracing::debug!(?role, x = position.x, y = position.y, "Handle dragged");
        }
        Ok(())
    }

    /// Immutable snapshot of the current inputs, if seeded.
    pub fn request(&self) -> Option<TrajectoryRequest> {
        self.control_points.map(|control_points| TrajectoryRequest {
            control_points,
            parameters: self.parameters,
            start_frame: self.start_frame,
            video: self.video,
        })
    }

    /// Regenerate the flight from the current snapshot.
    pub fn trajectory(&self) -> Trajectory {
        match self.request() {
            Some(request) => self.generator.plan(&request),
            None => Trajectory::empty(),
        }
    }

    /// Phase counts of the current flight, for duration display.
    pub fn frame_counts(&self) -> Option<FlightFrameCounts> {
        let points = self.control_points?;
        if self.generator.is_degenerate(&points) {
            return None;
        }
        Some(self.generator.frame_counts(&points, &self.parameters))
    }

    /// Accept the current flight for export.
    pub fn commit(&mut self) -> Result<Trajectory, SessionError> {
        self.require(SessionState::Previewing, "commit")?;
        let trajectory = self.trajectory();
        if trajectory.is_empty() {
            return Err(SessionError::NotEnoughFrames {
                start_frame: self.start_frame,
                total_frames: self.video.total_frames,
            });
        }
        self.state = SessionState::Committed;
        tracing::info!(
            points = trajectory.points.len(),
            start_frame = self.start_frame,
            "Tracer committed"
        );
        Ok(trajectory)
    }

    /// Return a committed session to editing.
    pub fn reopen(&mut self) -> Result<(), SessionError> {
        self.require(SessionState::Committed, "reopen")?;
        self.state = SessionState::Previewing;
        Ok(())
    }

    /// Discard handles, restore the session's default sliders and wait for a
    /// new seed.
    pub fn reset(&mut self) {
        self.state = SessionState::Initializing;
        self.parameters = self.defaults;
        self.control_points = None;
        self.start_frame = 0;
        self.manually_edited.clear();
        tracing::debug!("Tracer session reset");
    }

    fn apply_seed(&mut self, seed: Seed) {
        self.control_points = Some(seed.control_points);
        self.parameters = seed.parameters;
        self.start_frame = seed.start_frame;
        self.manually_edited.clear();
        self.state = SessionState::Previewing;
        tracing::debug!(start_frame = seed.start_frame, "Tracer session seeded");
    }

    fn require(&self, expected: SessionState, action: &'static str) -> Result<(), SessionError> {
        if self.state != expected {
            return Err(SessionError::InvalidState {
                action,
                state: self.state,
            });
        }
        Ok(())
    }
}
