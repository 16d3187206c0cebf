//! Scanline fill of a single quad
//!
//! Every integer row between the lowest and highest corner is intersected
//! with the four edges; the sorted crossings are classified by count and
//! turned into spans (see [SpanClassification]).
//!
//! [SpanClassification]: ../scan/enum.SpanClassification.html

use crate::color::Rgb8;
use crate::geometry::{intersect_x, intersects, Point};
use crate::render::draw_span;
use crate::scan::{ActiveSet, Span};
use crate::scene::{Quad, VertexStore};
use crate::Surface;

/// Rasterizer for quads, reusing its active set between scanlines
#[derive(Debug,Default)]
pub struct RasterizerQuad {
    active: ActiveSet,
}

impl RasterizerQuad {
    pub fn new() -> Self {
        Self { active: ActiveSet::new() }
    }
    /// Spans of the scanline at `y` for the corners `pts`
    pub fn scanline(&mut self, y: f64, pts: &[Point; 4]) -> Vec<Span> {
        self.active.reset();
        for i in 0..4 {
            let (v1, v2) = (pts[i], pts[(i + 1) % 4]);
            if intersects(y, v1, v2) {
                self.active.add_intersection(intersect_x(y, v1, v2), v1, v2);
            }
        }
        self.active.sort();
        let ys = [pts[0].y, pts[1].y, pts[2].y, pts[3].y];
        let spans = self.active.spans(y, &ys);
        log::trace!("SCANLINE y {} active {:?} {:?} -> {} spans",
                    y, self.active.as_slice(), self.active.classify(), spans.len());
        spans
    }
    /// All spans of `quad`, top row first
    ///
    /// A quad referring outside `store` has no spans.
    pub fn spans(&mut self, quad: &Quad, store: &VertexStore) -> Vec<Span> {
        let pts = match quad.points(store) {
            Some(pts) => pts,
            None => {
                log::debug!("quad {:?} refers outside {} vertices, skipped",
                            quad.indices(), store.len());
                return vec![];
            }
        };
        let (min_y, max_y) = pts.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY),
                  |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let mut out = vec![];
        if !(min_y.is_finite() && max_y.is_finite()) {
            return out;
        }
        for row in (min_y.ceil() as i64) ..= (max_y.floor() as i64) {
            out.extend(self.scanline(row as f64, &pts));
        }
        out
    }
    /// Paint the interior of `quad` in `color`
    pub fn fill<S: Surface>(&mut self, surface: &mut S, quad: &Quad,
                            store: &VertexStore, color: Rgb8) {
        for span in self.spans(quad, store) {
            draw_span(surface, span.x1, span.y, span.x2, color);
        }
    }
}

/// Paint the interior of `quad` in `color`
///
///     use quadfill::{fill_quad, Quad, Rgb8, SpanRecorder, VertexStore, Point};
///
///     let store = VertexStore::from(vec![Point::new(0.,0.), Point::new(10.,0.),
///                                        Point::new(10.,10.), Point::new(0.,10.)]);
///     let mut rec = SpanRecorder::new(20, 20);
///     fill_quad(&mut rec, &Quad::new([0,1,2,3]), &store, Rgb8::black());
///     // Rows 1 through 9; the top and bottom edges only touch the quad
///     assert_eq!(rec.spans().count(), 9);
///
/// Quads built through a [Scene] are checked up front; an unchecked quad
/// with an index outside `store` draws nothing.
///
/// [Scene]: ../scene/struct.Scene.html
pub fn fill_quad<S: Surface>(surface: &mut S, quad: &Quad, store: &VertexStore, color: Rgb8) {
    RasterizerQuad::new().fill(surface, quad, store, color);
}
