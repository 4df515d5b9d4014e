//! Cubic Bézier evaluation.

use opentrace_trace_model::{ControlPoints, Point2D};

/// Evaluate a cubic Bézier at `t` using the Bernstein basis.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
pub fn evaluate_cubic(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Point2D {
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;

    Point2D::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Evaluate the tracer curve described by a handle set.
pub fn evaluate_control_points(t: f64, points: &ControlPoints) -> Point2D {
    evaluate_cubic(t, points.start, points.launch, points.descent, points.end)
}

/// Sample the curve uniformly in `t` (for handle previews).
pub fn sample_uniform(points: &ControlPoints, segments: usize) -> Vec<Point2D> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| evaluate_control_points(i as f64 / segments as f64, points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> ControlPoints {
        ControlPoints::new(
            Point2D::new(100.0, 500.0),
            Point2D::new(296.8, 392.0),
            Point2D::new(484.0, 320.0),
            Point2D::new(500.0, 500.0),
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let c = curve();
        assert_eq!(evaluate_control_points(0.0, &c), c.start);
        assert_eq!(evaluate_control_points(1.0, &c), c.end);
    }

    #[test]
    fn test_midpoint_matches_de_casteljau() {
        let c = curve();
        let mid = evaluate_control_points(0.5, &c);
        // (p0 + 3 p1 + 3 p2 + p3) / 8
        let x = (100.0 + 3.0 * 296.8 + 3.0 * 484.0 + 500.0) / 8.0;
        let y = (500.0 + 3.0 * 392.0 + 3.0 * 320.0 + 500.0) / 8.0;
        assert!((mid.x - x).abs() < 1e-9);
        assert!((mid.y - y).abs() < 1e-9);
    }

    #[test]
    fn test_extrapolates_outside_unit_interval() {
        let line = ControlPoints::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(3.0, 0.0),
        );
        let beyond = evaluate_control_points(2.0, &line);
        assert!((beyond.x - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_samples_include_endpoints() {
        let c = curve();
        let samples = sample_uniform(&c, 16);
        assert_eq!(samples.len(), 17);
        assert_eq!(samples[0], c.start);
        assert_eq!(samples[16], c.end);
    }
}
