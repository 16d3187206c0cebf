
extern crate quadfill;

use quadfill::*;

fn quad_points(pts: [(f64,f64); 4]) -> [Point; 4] {
    [pts[0].into(), pts[1].into(), pts[2].into(), pts[3].into()]
}

fn active(y: f64, pts: &[Point; 4]) -> ActiveSet {
    let mut a = ActiveSet::new();
    for i in 0 .. 4 {
        let (v1, v2) = (pts[i], pts[(i+1) % 4]);
        if intersects(y, v1, v2) {
            a.add_intersection(intersect_x(y, v1, v2), v1, v2);
        }
    }
    a.sort();
    a
}

#[test]
fn classification_by_count() {
    assert_eq!(SpanClassification::of(0), SpanClassification::Empty);
    assert_eq!(SpanClassification::of(1), SpanClassification::Empty);
    assert_eq!(SpanClassification::of(2), SpanClassification::Pair);
    assert_eq!(SpanClassification::of(3), SpanClassification::ThroughVertex);
    assert_eq!(SpanClassification::of(4), SpanClassification::AmbiguousQuad);
    assert_eq!(SpanClassification::of(5), SpanClassification::Overflow);
    assert_eq!(SpanClassification::of(8), SpanClassification::Overflow);
}

#[test]
fn square_middle_row() {
    let pts = quad_points([(0.,0.), (10.,0.), (10.,10.), (0.,10.)]);
    assert_eq!(active(5.0, &pts).as_slice(), &[0.0, 10.0]);
    let mut ras = RasterizerQuad::new();
    assert_eq!(ras.scanline(5.0, &pts), vec![Span::new(0.0, 5.0, 10.0)]);
}

#[test]
fn square_top_and_bottom_rows_only_touch() {
    let pts = quad_points([(0.,0.), (10.,0.), (10.,10.), (0.,10.)]);
    let a = active(0.0, &pts);
    assert_eq!(a.as_slice(), &[0.0, 0.0, 10.0, 10.0]);
    assert_eq!(a.classify(), SpanClassification::AmbiguousQuad);
    let mut ras = RasterizerQuad::new();
    assert!(ras.scanline(0.0, &pts).is_empty());
    assert!(ras.scanline(10.0, &pts).is_empty());
}

#[test]
fn convex_quad_has_one_span_per_interior_row() {
    let store = VertexStore::from(vec![Point::new(2.,1.), Point::new(18.,4.),
                                       Point::new(15.,17.), Point::new(3.,12.)]);
    let quad = Quad::new([0,1,2,3]);
    let mut rec = SpanRecorder::new(20, 20);
    fill_quad(&mut rec, &quad, &store, Rgb8::black());
    for y in 2 .. 17 {
        assert_eq!(rec.row(y as f64).len(), 1, "row {}", y);
    }
}

#[test]
fn row_through_one_vertex_spans_true_chord() {
    let pts = quad_points([(2.,1.), (18.,4.), (15.,17.), (3.,12.)]);
    let a = active(12.0, &pts);
    assert_eq!(a.classify(), SpanClassification::ThroughVertex);

    let mut ras = RasterizerQuad::new();
    let spans = ras.scanline(12.0, &pts);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].x1, 3.0);
    assert!((spans[0].x2 - 210.0 / 13.0).abs() < 1e-9);
    assert!(spans[0].width() > 0.0);
}

#[test]
fn row_through_vertex_collapses_duplicate() {
    let pts = quad_points([(0.,0.), (10.,0.), (10.,10.), (0.,5.)]);
    assert_eq!(active(5.0, &pts).as_slice(), &[0.0, 0.0, 10.0]);
    let mut ras = RasterizerQuad::new();
    assert_eq!(ras.scanline(5.0, &pts), vec![Span::new(0.0, 5.0, 10.0)]);
}

#[test]
fn opposite_vertices_with_interior_between() {
    // Diamond; row 5 runs through the left and right corners
    let pts = quad_points([(5.,0.), (10.,5.), (5.,10.), (0.,5.)]);
    assert_eq!(active(5.0, &pts).as_slice(), &[0.0, 0.0, 10.0, 10.0]);
    let mut ras = RasterizerQuad::new();
    let spans = ras.scanline(5.0, &pts);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0], Span::new(0.0, 5.0, 10.0));
}

#[test]
fn opposite_vertices_touching_at_extreme() {
    // Chevron with both tips on row 0; the gap between them is outside
    let pts = quad_points([(0.,0.), (5.,8.), (10.,0.), (5.,10.)]);
    let a = active(0.0, &pts);
    assert_eq!(a.len(), 4);
    assert_eq!(a.as_slice()[1], 0.0);
    assert_eq!(a.as_slice()[2], 10.0);
    let mut ras = RasterizerQuad::new();
    assert_eq!(ras.scanline(0.0, &pts).len(), 0);
}

#[test]
fn concave_row_has_two_spans() {
    let pts = quad_points([(0.,0.), (5.,8.), (10.,0.), (5.,10.)]);
    let mut ras = RasterizerQuad::new();
    let spans = ras.scanline(1.0, &pts);
    assert_eq!(spans, vec![Span::new(0.5, 1.0, 0.625), Span::new(9.375, 1.0, 9.5)]);
}

#[test]
fn straddle_test() {
    assert!(straddles(5.0, &[0.0, 5.0, 10.0, 5.0]));
    assert!(!straddles(0.0, &[0.0, 8.0, 0.0, 10.0]));
    assert!(!straddles(10.0, &[0.0, 8.0, 10.0, 10.0]));
}

#[test]
fn edge_on_scanline_covers_whole_row() {
    let pts = quad_points([(0.,0.), (10.,0.), (10.,10.), (5.,0.)]);
    let a = active(0.0, &pts);
    assert_eq!(a.as_slice(), &[0.0, 0.0, 5.0, 5.0, 10.0, 10.0]);
    assert_eq!(a.classify(), SpanClassification::Overflow);
    let mut ras = RasterizerQuad::new();
    let spans = ras.scanline(0.0, &pts);
    assert_eq!(spans, vec![Span::new(0.0, 0.0, 5.0), Span::new(5.0, 0.0, 10.0)]);
}

#[test]
fn overflow_chains_every_gap() {
    let mut a = ActiveSet::new();
    for &x in &[4.0, 1.0, 1.0, 7.0, 9.0] {
        a.push(x);
    }
    a.sort();
    let spans = a.spans(3.0, &[0.0, 3.0, 3.0, 6.0]);
    assert_eq!(spans, vec![Span::new(1.0, 3.0, 4.0),
                           Span::new(4.0, 3.0, 7.0),
                           Span::new(7.0, 3.0, 9.0)]);
}

#[test]
fn collapsed_quad_draws_nothing() {
    let store = VertexStore::from(vec![Point::new(4.,4.); 4]);
    let mut rec = SpanRecorder::new(10, 10);
    fill_quad(&mut rec, &Quad::new([0,1,2,3]), &store, Rgb8::black());
    assert_eq!(rec.spans().count(), 0);
}

#[test]
fn quad_outside_store_draws_nothing() {
    let store = VertexStore::from(vec![Point::new(0.,0.), Point::new(10.,0.),
                                       Point::new(10.,10.), Point::new(0.,10.)]);
    let quad = Quad::new([0,1,2,9]);
    assert_eq!(quad.points(&store), None);
    let mut rec = SpanRecorder::new(20, 20);
    fill_quad(&mut rec, &quad, &store, Rgb8::black());
    assert!(rec.calls.is_empty());
}

#[test]
fn fractional_corners_use_integer_rows() {
    let store = VertexStore::from(vec![Point::new(0.,0.5), Point::new(10.,0.5),
                                       Point::new(10.,3.5), Point::new(0.,3.5)]);
    let mut rec = SpanRecorder::new(20, 20);
    fill_quad(&mut rec, &Quad::new([0,1,2,3]), &store, Rgb8::black());
    let rows: Vec<f64> = rec.spans().map(|(s, _)| s.y).collect();
    assert_eq!(rows, vec![1.0, 2.0, 3.0]);
}

#[test]
fn fill_square_pixels() {
    let mut ren = RenderingBase::with_size(10, 10).unwrap();
    ren.clear(Rgb8::white());
    let store = VertexStore::from(vec![Point::new(2.,2.), Point::new(8.,2.),
                                       Point::new(8.,8.), Point::new(2.,8.)]);
    fill_quad(&mut ren, &Quad::new([0,1,2,3]), &store, Rgb8::black());
    assert_eq!(ren.get((5,5)), Rgb8::black());
    assert_eq!(ren.get((2,5)), Rgb8::black());
    assert_eq!(ren.get((8,5)), Rgb8::black());
    assert_eq!(ren.get((5,3)), Rgb8::black());
    assert_eq!(ren.get((5,2)), Rgb8::white());
    assert_eq!(ren.get((5,8)), Rgb8::white());
    assert_eq!(ren.get((9,5)), Rgb8::white());
    assert_eq!(ren.get((0,0)), Rgb8::white());
}
