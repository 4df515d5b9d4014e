//! Screen-space point type.

use serde::{Deserialize, Serialize};

/// A 2D point in source video pixels.
///
/// `(0.0, 0.0)` is the top-left corner of the frame; Y grows downward, so a
/// ball rising on screen has a decreasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation between two points.
    pub fn lerp(a: &Point2D, b: &Point2D, t: f64) -> Point2D {
        let t = t.clamp(0.0, 1.0);
        Point2D {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }

    /// Clamp into `[0, width] × [0, height]`.
    pub fn clamped(&self, width: f64, height: f64) -> Point2D {
        Point2D {
            x: self.x.clamp(0.0, width.max(0.0)),
            y: self.y.clamp(0.0, height.max(0.0)),
        }
    }
}
