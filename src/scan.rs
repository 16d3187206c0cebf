//! Active sets and span classification for a single scanline

use crate::geometry::Intersection;
use crate::geometry::Point;

/// Horizontal run between `x1` and `x2` on row `y`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Span {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

impl Span {
    pub fn new(x1: f64, y: f64, x2: f64) -> Self {
        Span { x1, x2, y }
    }
    /// Width of the span, 0 for a degenerate span
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }
}

/// How the intersections of one scanline are turned into spans
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum SpanClassification {
    /// Fewer than two crossings, nothing to draw
    Empty,
    /// Two crossings, one span
    Pair,
    /// Three crossings; the scanline passes through one vertex
    ThroughVertex,
    /// Four crossings; two spans, or a vertex-to-vertex crossing to resolve
    AmbiguousQuad,
    /// Five or more crossings; some edge lies on the scanline
    Overflow,
}

impl SpanClassification {
    /// Classification of an active set with `n` entries
    pub fn of(n: usize) -> Self {
        match n {
            0 | 1 => SpanClassification::Empty,
            2 => SpanClassification::Pair,
            3 => SpanClassification::ThroughVertex,
            4 => SpanClassification::AmbiguousQuad,
            _ => SpanClassification::Overflow,
        }
    }
}

/// Sorted x coordinates where one scanline crosses a polygon's edges
///
/// Duplicates are kept; they mark vertices and horizontal edges.
#[derive(Debug,Default,Clone)]
pub struct ActiveSet {
    xs: Vec<f64>,
}

impl ActiveSet {
    pub fn new() -> Self {
        ActiveSet { xs: Vec::with_capacity(8) }
    }
    pub fn reset(&mut self) {
        self.xs.clear();
    }
    pub fn push(&mut self, x: f64) {
        self.xs.push(x);
    }
    /// Add the crossing of the edge `v1`-`v2`
    pub fn add_intersection(&mut self, hit: Intersection, v1: Point, v2: Point) {
        match hit {
            Intersection::Point(x) => self.push(x),
            Intersection::Coincident => {
                self.push(v1.x);
                self.push(v2.x);
            }
        }
    }
    /// Sort ascending
    pub fn sort(&mut self) {
        self.xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    }
    pub fn len(&self) -> usize {
        self.xs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.xs
    }
    pub fn classify(&self) -> SpanClassification {
        SpanClassification::of(self.len())
    }
    /// Spans on row `y` for a sorted active set
    ///
    /// `ys` are the y coordinates of every vertex of the polygon, used to
    /// decide whether a scanline through two opposite vertices is inside.
    pub fn spans(&self, y: f64, ys: &[f64]) -> Vec<Span> {
        let a = &self.xs;
        let mut out = vec![];
        match self.classify() {
            SpanClassification::Empty => {}
            SpanClassification::Pair => out.push(Span::new(a[0], y, a[1])),
            SpanClassification::ThroughVertex => chain(a, y, 2, &mut out),
            SpanClassification::AmbiguousQuad => {
                if a[0] == a[1] && a[2] == a[3] {
                    if straddles(y, ys) {
                        out.push(Span::new(a[1], y, a[2]));
                    }
                } else {
                    out.push(Span::new(a[0], y, a[1]));
                    out.push(Span::new(a[2], y, a[3]));
                }
            }
            SpanClassification::Overflow => chain(a, y, 1, &mut out),
        }
        out
    }
}

/// Walk adjacent pairs, stepping over equal values one at a time and
/// advancing by `step` after each emitted pair
fn chain(a: &[f64], y: f64, step: usize, out: &mut Vec<Span>) {
    let mut i = 0;
    while i + 1 < a.len() {
        if a[i] == a[i + 1] {
            i += 1;
            continue;
        }
        out.push(Span::new(a[i], y, a[i + 1]));
        i += step;
    }
}

/// At least one vertex strictly above and one strictly below `y`
pub fn straddles(y: f64, ys: &[f64]) -> bool {
    let above = ys.iter().any(|&v| v < y);
    let below = ys.iter().any(|&v| v > y);
    above && below
}
