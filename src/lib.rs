//! Scanline fill and interactive editing of quadrilaterals
//!
//! How does this work
//!
//! ```text
//!    scene  = Scene( VertexStore, [(Quad, Rgb8)] )
//!    editor = Editor( scene, EditorConfig )
//!    ren    = RenderingBase( Pixfmt( data ) )
//!  Render
//!    editor.render(ren)
//!      clear
//!      fill_all_polygons()
//!        RasterizerQuad::fill()       -- one quad
//!          scanline()                 -- one row, minY ..= maxY
//!            intersects / intersect_x -- 'ActiveSet'
//!            ActiveSet::spans()       -- 'SpanClassification'
//!          draw_span()
//!            Surface::hline()
//!      draw_outline()                 -- optional
//!      draw_vertex_handle()
//!  Interaction
//!    pointer_down(x,y)  -- hit test, Idle -> Dragging(i)
//!    pointer_move(x,y)  -- move vertex i, render
//!    pointer_up()       -- Dragging(i) -> Idle
//! ```

pub mod color;
mod buffer;
pub mod pixfmt;
pub mod base;
pub mod geometry;
pub mod scan;
pub mod raster;
pub mod render;
pub mod scene;
pub mod editor;
pub mod record;
pub mod ppm;
pub mod error;

pub use color::*;
pub use pixfmt::*;
pub use base::*;
pub use geometry::*;
pub use scan::*;
pub use raster::*;
pub use render::*;
pub use scene::*;
pub use editor::*;
pub use record::*;
pub use ppm::*;
pub use error::*;

/// Drawing target for fills and handles
///
/// Coordinates are in pixels; implementations decide how fractional
/// positions map onto their pixels.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Set every pixel to `color`
    fn clear(&mut self, color: Rgb8);
    /// Horizontal run from `x1` to `x2` inclusive on row `y`, in either order
    fn hline(&mut self, x1: f64, y: f64, x2: f64, color: Rgb8);
    /// Straight segment from (`x1`,`y1`) to (`x2`,`y2`)
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb8);
    /// Circular outline of `radius` around (`x`,`y`)
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb8);
}
