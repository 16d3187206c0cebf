//! Primitive drawing: spans, points, vertex handles and quad outlines

use crate::color::Rgb8;
use crate::geometry::Point;
use crate::Surface;

/// Paint a one pixel tall run from `x1` to `x2` on row `y`
///
/// The pixels painted do not depend on the order of `x1` and `x2`
pub fn draw_span<S: Surface>(surface: &mut S, x1: f64, y: f64, x2: f64, color: Rgb8) {
    surface.hline(x1, y, x2, color);
}

/// Paint a single dot at (`x`,`y`)
pub fn draw_point<S: Surface>(surface: &mut S, x: f64, y: f64, color: Rgb8) {
    draw_span(surface, x, y, x, color);
}

/// Filled disk of `radius` around (`x`,`y`) with an outline ring
///
/// The disk is drawn one row at a time over `[y - radius, y + radius)`,
/// each row spanning the half chord at that height.
pub fn draw_vertex_handle<S: Surface>(surface: &mut S, x: f64, y: f64, radius: f64,
                                      fill: Rgb8, outline: Rgb8) {
    let mut j = y - radius;
    while j < y + radius {
        let height = (y - j).abs();
        let step = (radius * radius - height * height).max(0.0).sqrt();
        draw_span(surface, x - step, j, x + step, fill);
        j += 1.0;
    }
    surface.circle(x, y, radius, outline);
}

/// Stroke the closed loop through `pts`
pub fn draw_outline<S: Surface>(surface: &mut S, pts: &[Point], color: Rgb8) {
    let n = pts.len();
    for i in 0 .. n {
        let (a, b) = (pts[i], pts[(i + 1) % n]);
        surface.line(a.x, a.y, b.x, b.y, color);
    }
}
