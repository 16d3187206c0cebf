//! Surface that records draw calls instead of painting pixels

use crate::color::Rgb8;
use crate::scan::Span;
use crate::Surface;

/// A single call made on a [SpanRecorder]
///
/// [SpanRecorder]: struct.SpanRecorder.html
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum DrawCall {
    Clear(Rgb8),
    Span(Span, Rgb8),
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb8 },
    Circle { x: f64, y: f64, radius: f64, color: Rgb8 },
}

/// Records every draw call in order
///
///     use quadfill::{draw_span, Rgb8, Span, SpanRecorder};
///
///     let mut rec = SpanRecorder::new(10, 10);
///     draw_span(&mut rec, 8.0, 2.0, 1.0, Rgb8::black());
///     let spans: Vec<_> = rec.spans().collect();
///     assert_eq!(spans, vec![(Span::new(8.0, 2.0, 1.0), Rgb8::black())]);
#[derive(Debug,Default,Clone)]
pub struct SpanRecorder {
    width: usize,
    height: usize,
    pub calls: Vec<DrawCall>,
}

impl SpanRecorder {
    pub fn new(width: usize, height: usize) -> Self {
        SpanRecorder { width, height, calls: vec![] }
    }
    /// Spans drawn since creation, in order
    pub fn spans(&self) -> impl Iterator<Item=(Span, Rgb8)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::Span(s, color) => Some((s, color)),
            _ => None,
        })
    }
    /// Spans drawn in `color`
    pub fn spans_in(&self, color: Rgb8) -> Vec<Span> {
        self.spans().filter(|&(_, c)| c == color).map(|(s, _)| s).collect()
    }
    /// Spans drawn on row `y`
    pub fn row(&self, y: f64) -> Vec<Span> {
        self.spans().filter(|(s, _)| s.y == y).map(|(s, _)| s).collect()
    }
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for SpanRecorder {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn clear(&mut self, color: Rgb8) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn hline(&mut self, x1: f64, y: f64, x2: f64, color: Rgb8) {
        self.calls.push(DrawCall::Span(Span::new(x1, y, x2), color));
    }
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb8) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2, color });
    }
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb8) {
        self.calls.push(DrawCall::Circle { x, y, radius, color });
    }
}
