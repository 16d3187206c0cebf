//! Geometry primitives for the scanline fill and vertex hit-testing

/// Position on the surface, in pixels
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64,f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Where a scanline meets an edge
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Intersection {
    /// Single crossing at x
    Point(f64),
    /// Edge is horizontal and lies on the scanline; both end points count
    Coincident,
}

/// Euclidean distance between two points
///
///     use quadfill::{distance, Point};
///     assert_eq!(distance(Point::new(0.,0.), Point::new(3.,4.)), 5.0);
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Does the horizontal line at `scan_y` touch the closed segment `v1`-`v2`
///
/// A scanline through an end point touches both edges meeting there.
pub fn intersects(scan_y: f64, v1: Point, v2: Point) -> bool {
    (v1.y - scan_y) * (v2.y - scan_y) <= 0.0
}

/// Crossing of the line through `v1`,`v2` with `y = scan_y`
///
/// Horizontal edges return [Intersection::Coincident]; the caller uses
/// the end points directly.
///
/// [Intersection::Coincident]: enum.Intersection.html#variant.Coincident
pub fn intersect_x(scan_y: f64, v1: Point, v2: Point) -> Intersection {
    let (x1, y1, x2, y2) = (v1.x, v1.y, v2.x, v2.y);
    if y1 == y2 {
        return Intersection::Coincident;
    }
    Intersection::Point((scan_y * (x1 - x2) - x1 * y2 + x2 * y1) / (y1 - y2))
}
