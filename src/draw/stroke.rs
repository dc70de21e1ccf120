//! Stroke data: one continuous gesture with its frozen pen settings.

use super::color::Color;
use crate::util::Rect;

/// One freehand gesture, stored as an ordered point sequence plus the pen
/// width and color that were current when it started.
///
/// Points are append-only while the stroke is in progress (except in
/// straight-line mode, where the sequence is collapsed to anchor and tip).
/// Once a stroke is committed it is never mutated, only removed by undo or
/// clear. A single-point stroke is valid and renders as a filled dot.
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Sequence of (x, y) surface coordinates traced by the pointer
    pub points: Vec<(i32, i32)>,
    /// Line width in pixels, frozen at creation time
    pub width: f64,
    /// Stroke color, frozen at creation time
    pub color: Color,
}

impl Stroke {
    /// Starts a new stroke seeded with its first point.
    pub fn start(x: i32, y: i32, width: f64, color: Color) -> Self {
        Self {
            points: vec![(x, y)],
            width,
            color,
        }
    }

    /// Appends a point to the gesture.
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push((x, y));
    }

    /// Collapses the gesture to a straight segment from `anchor` to `tip`.
    pub fn set_segment(&mut self, anchor: (i32, i32), tip: (i32, i32)) {
        self.points.clear();
        self.points.push(anchor);
        self.points.push(tip);
    }

    /// Returns true when the stroke holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the axis-aligned bounding box, expanded to cover stroke width.
    ///
    /// The rendered path never leaves the convex hull of the recorded points,
    /// so the point bounds plus half the stroke width are a safe damage hint.
    /// Returns `None` for an empty stroke.
    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_for_points(&self.points, self.width)
    }

    /// Bounding box of the most recent segment (last two points).
    ///
    /// Used for incremental damage while a freehand stroke grows. Falls back
    /// to the full bounding box for single-point strokes.
    pub fn last_segment_box(&self) -> Option<Rect> {
        if self.points.len() < 2 {
            return self.bounding_box();
        }
        let tail = &self.points[self.points.len() - 2..];
        bounding_box_for_points(tail, self.width)
    }
}

fn stroke_padding(width: f64) -> i32 {
    let padding = (width / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_points(points: &[(i32, i32)], width: f64) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let mut min_x = points[0].0;
    let mut max_x = points[0].0;
    let mut min_y = points[0].1;
    let mut max_y = points[0].1;

    for &(x, y) in &points[1..] {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let padding = stroke_padding(width);
    Rect::from_min_max(
        min_x - padding,
        min_y - padding,
        max_x + padding,
        max_y + padding,
    )
}
