//! Cairo-based rendering for strokes and the cursor indicator.
//!
//! Everything here is a pure function of the data passed in: rendering never
//! mutates engine state, and draw errors are ignored the same way the rest
//! of the overlay treats Cairo failures (a dropped frame, not a fault).

use super::color::Color;
use super::stroke::Stroke;

/// Renders all strokes in a slice, in draw order.
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke with its own recorded width and color.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_stroke_points(ctx, &stroke.points, stroke.color, stroke.width);
}

/// Renders a stroke path from a borrowed point slice.
///
/// Accepting a slice avoids cloning the in-progress stroke's points on every
/// frame while the user is still dragging.
///
/// - 0 points: nothing.
/// - 1 point: a filled disc of radius `width / 2` (a dot).
/// - 2 points: a straight segment (the straight-line-mode shape).
/// - 3+ points: a chain of Bézier segments whose control points are the two
///   consecutive recorded samples and whose endpoint is their midpoint, so
///   the path passes through midpoints rather than the raw samples. This is
///   what smooths jittery pointer input.
pub fn render_stroke_points(ctx: &cairo::Context, points: &[(i32, i32)], color: Color, width: f64) {
    match points {
        [] => {}
        [(x, y)] => {
            render_dot(ctx, *x as f64, *y as f64, width / 2.0, color);
        }
        _ => {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_line_width(width);
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);

            let (x0, y0) = points[0];
            ctx.move_to(x0 as f64, y0 as f64);

            if points.len() == 2 {
                let (x1, y1) = points[1];
                ctx.line_to(x1 as f64, y1 as f64);
            } else {
                for window in points.windows(2) {
                    let (px, py) = window[0];
                    let (cx, cy) = window[1];
                    let mid_x = (px + cx) as f64 / 2.0;
                    let mid_y = (py + cy) as f64 / 2.0;
                    ctx.curve_to(px as f64, py as f64, cx as f64, cy as f64, mid_x, mid_y);
                }
            }

            let _ = ctx.stroke();
        }
    }
}

/// Renders the cursor indicator: a filled disc at the last hover position.
///
/// The radius is half the live pen width, so the indicator previews exactly
/// the dot a stationary click would leave behind.
pub fn render_cursor_indicator(ctx: &cairo::Context, x: i32, y: i32, width: f64, color: Color) {
    render_dot(ctx, x as f64, y as f64, width / 2.0, color);
}

fn render_dot(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64, color: Color) {
    let radius = radius.max(1.0);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use cairo::{Context, ImageSurface};

    fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
        let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let ctx = Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
        surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    #[test]
    fn empty_point_list_draws_nothing() {
        let (mut surface, ctx) = surface_with_context(50, 50);
        render_stroke_points(&ctx, &[], RED, 4.0);
        drop(ctx);
        assert!(!surface_has_pixels(&mut surface));
    }

    #[test]
    fn single_point_draws_a_dot() {
        let (mut surface, ctx) = surface_with_context(50, 50);
        render_stroke_points(&ctx, &[(25, 25)], RED, 6.0);
        drop(ctx);
        assert!(surface_has_pixels(&mut surface));
    }

    #[test]
    fn two_points_draw_a_segment() {
        let (mut surface, ctx) = surface_with_context(50, 50);
        render_stroke_points(&ctx, &[(5, 5), (45, 45)], BLUE, 2.0);
        drop(ctx);
        assert!(surface_has_pixels(&mut surface));
    }

    #[test]
    fn smoothed_path_stays_inside_point_bounds() {
        let stroke = Stroke {
            points: vec![(10, 10), (20, 30), (30, 10), (40, 30)],
            width: 4.0,
            color: RED,
        };
        let (mut surface, ctx) = surface_with_context(64, 64);
        render_stroke(&ctx, &stroke);
        drop(ctx);

        let bounds = stroke.bounding_box().unwrap();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        for y in 0i32..64 {
            for x in 0i32..64 {
                let offset = y as usize * stride + x as usize * 4;
                let painted = data[offset..offset + 4].iter().any(|b| *b != 0);
                if painted {
                    // One pixel of slack for antialiased edges.
                    assert!(
                        x >= bounds.x - 1
                            && x <= bounds.x + bounds.width
                            && y >= bounds.y - 1
                            && y <= bounds.y + bounds.height,
                        "pixel ({x}, {y}) outside damage bounds {bounds:?}"
                    );
                }
            }
        }
    }
}
