//! Tracer compositor: per-frame line segments.
//!
//! On each output frame the tracer shows every point whose frame index has
//! been reached, drawn as a polyline whose colour runs from the style's start
//! colour to its end colour and whose width tapers to half toward the head.

use serde::Serialize;

use opentrace_trace_model::{ColorParseError, Point2D, Rgba, TrackPoint, TracerStyle};

/// Minimum stroke width in pixels.
pub const MIN_SEGMENT_WIDTH: u32 = 2;

/// One stroked line between two consecutive tracer points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracerSegment {
    pub from: Point2D,
    pub to: Point2D,
    pub color: Rgba,
    pub width: u32,
}

/// Drawing instructions for one output frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOverlay {
    pub frame_index: u64,
    pub segments: Vec<TracerSegment>,
}

/// Points already reached at `frame_index`, in input order.
pub fn visible_points(points: &[TrackPoint], frame_index: u64) -> Vec<TrackPoint> {
    points
        .iter()
        .filter(|p| p.frame_index <= frame_index)
        .copied()
        .collect()
}

/// Stroke the visible points.
///
/// Segment `i` (ending at point `i`) uses `t = i / (n - 1)` for both colour
/// and taper. Fewer than two points draw nothing.
pub fn tracer_segments(
    visible: &[TrackPoint],
    start: &Rgba,
    end: &Rgba,
    line_width: u32,
) -> Vec<TracerSegment> {
    if visible.len() < 2 {
        return vec![];
    }

    let last = (visible.len() - 1) as f64;
    visible
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let t = (idx + 1) as f64 / last;
            let tapered = (line_width as f64 * (1.0 - t * 0.5)) as u32;
            TracerSegment {
                from: pair[0].position(),
                to: pair[1].position(),
                color: Rgba::lerp(start, end, t),
                width: tapered.max(MIN_SEGMENT_WIDTH),
            }
        })
        .collect()
}

/// Compute the overlay for every frame of the output.
pub fn compute_overlay_frames(
    points: &[TrackPoint],
    style: &TracerStyle,
    total_frames: u64,
) -> Result<Vec<FrameOverlay>, ColorParseError> {
    let (start, end) = style.gradient()?;

    let mut frames = Vec::with_capacity(total_frames as usize);
    for frame_index in 0..total_frames {
        let visible = visible_points(points, frame_index);
        frames.push(FrameOverlay {
            frame_index,
            segments: tracer_segments(&visible, &start, &end, style.line_width),
        });
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<TrackPoint> {
        (0..5)
            .map(|i| TrackPoint::generated(10 + i, Point2D::new(i as f64 * 10.0, 100.0)))
            .collect()
    }

    #[test]
    fn test_visible_points_are_frame_gated() {
        let pts = points();
        assert!(visible_points(&pts, 9).is_empty());
        assert_eq!(visible_points(&pts, 10).len(), 1);
        assert_eq!(visible_points(&pts, 12).len(), 3);
        assert_eq!(visible_points(&pts, 500).len(), 5);
    }

    #[test]
    fn test_segments_interpolate_colour_and_taper() {
        let style = TracerStyle {
            line_width: 8,
            ..Default::default()
        };
        let (start, end) = style.gradient().unwrap();
        let segments = tracer_segments(&points(), &start, &end, style.line_width);

        assert_eq!(segments.len(), 4);
        // t = 0.25 -> 8 * 0.875 = 7
        assert_eq!(segments[0].width, 7);
        // t = 1.0 -> 8 * 0.5 = 4
        assert_eq!(segments[3].width, 4);
        assert_eq!(segments[3].color, end);
        assert_eq!(segments[0].from, Point2D::new(0.0, 100.0));
        assert_eq!(segments[3].to, Point2D::new(40.0, 100.0));
    }

    #[test]
    fn test_thin_lines_keep_minimum_width() {
        let (start, end) = TracerStyle::default().gradient().unwrap();
        let segments = tracer_segments(&points(), &start, &end, 1);
        assert!(segments.iter().all(|s| s.width == MIN_SEGMENT_WIDTH));
    }

    #[test]
    fn test_single_point_draws_nothing() {
        let (start, end) = TracerStyle::default().gradient().unwrap();
        assert!(tracer_segments(&points()[..1], &start, &end, 4).is_empty());
    }

    #[test]
    fn test_overlay_frames_grow_with_playback() {
        let frames = compute_overlay_frames(&points(), &TracerStyle::default(), 20).unwrap();
        assert_eq!(frames.len(), 20);
        assert!(frames[10].segments.is_empty());
        assert_eq!(frames[11].segments.len(), 1);
        assert_eq!(frames[14].segments.len(), 4);
        assert_eq!(frames[19].segments.len(), 4);
    }

    #[test]
    fn test_bad_style_colour_is_reported() {
        let style = TracerStyle {
            start_color: "gold".to_string(),
            ..Default::default()
        };
        assert!(compute_overlay_frames(&points(), &style, 5).is_err());
    }
}
