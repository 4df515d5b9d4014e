//! User-facing tracer parameters and derived flight timing.

use serde::{Deserialize, Serialize};

/// Slider values that shape and time a tracer.
///
/// The engine does not validate these; the UI clamps slider input before it
/// reaches the trajectory code (see [`TracerParameters::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracerParameters {
    /// Apex elevation above the higher anchor, as a fraction of frame height.
    pub peak_height: f64,
    /// Signed lateral bend (draw/fade) in `[-1, 1]`.
    pub curve: f64,
    /// Multiplier that shortens the rise phase, in `[0.5, 10]`.
    pub ball_speed: f64,
    /// Apex hold length and launch reach, in `[0, 1]`.
    pub hangtime: f64,
}

/// Names a single field of [`TracerParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKey {
    PeakHeight,
    Curve,
    BallSpeed,
    Hangtime,
}

impl ParameterKey {
    /// Valid slider range for this key.
    pub fn range(&self) -> (f64, f64) {
        match self {
            ParameterKey::PeakHeight => (0.0, 1.0),
            ParameterKey::Curve => (-1.0, 1.0),
            ParameterKey::BallSpeed => (0.5, 10.0),
            ParameterKey::Hangtime => (0.0, 1.0),
        }
    }
}

impl Default for TracerParameters {
    fn default() -> Self {
        Self {
            peak_height: 0.3,
            curve: 0.0,
            ball_speed: 1.0,
            hangtime: 0.3,
        }
    }
}

impl TracerParameters {
    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::PeakHeight => self.peak_height,
            ParameterKey::Curve => self.curve,
            ParameterKey::BallSpeed => self.ball_speed,
            ParameterKey::Hangtime => self.hangtime,
        }
    }

    /// Copy with one field replaced.
    pub fn with(&self, key: ParameterKey, value: f64) -> Self {
        let mut next = *self;
        match key {
            ParameterKey::PeakHeight => next.peak_height = value,
            ParameterKey::Curve => next.curve = value,
            ParameterKey::BallSpeed => next.ball_speed = value,
            ParameterKey::Hangtime => next.hangtime = value,
        }
        next
    }

    /// Every field clamped into its slider range.
    pub fn clamped(&self) -> Self {
        let clamp = |key: ParameterKey, v: f64| {
            let (lo, hi) = key.range();
            v.clamp(lo, hi)
        };
        Self {
            peak_height: clamp(ParameterKey::PeakHeight, self.peak_height),
            curve: clamp(ParameterKey::Curve, self.curve),
            ball_speed: clamp(ParameterKey::BallSpeed, self.ball_speed),
            hangtime: clamp(ParameterKey::Hangtime, self.hangtime),
        }
    }
}

/// Per-phase frame budget of one flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFrameCounts {
    /// Frames from take-off to the start of the apex hold.
    pub rise: u32,
    /// Frames spent hanging near the apex (may be zero).
    pub apex: u32,
    /// Frames from the end of the hold to landing.
    pub fall: u32,
    /// `rise + apex + fall`, saturating at `u32::MAX`.
    pub total: u32,
}

impl FlightFrameCounts {
    pub fn new(rise: u32, apex: u32, fall: u32) -> Self {
        Self {
            rise,
            apex,
            fall,
            total: rise.saturating_add(apex).saturating_add(fall),
        }
    }
}
