//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::ppm;

use std::path::Path;

/// Pixel Format Wrapper around raw RGB component data
///
/// Three bytes per pixel, no alpha channel.
#[derive(Debug,Clone)]
pub struct Pixfmt {
    rbuf: RenderingBuffer,
}

impl Pixfmt {
    /// Bytes per pixel
    pub const BPP: usize = 3;

    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, every component is 0
    ///
    ///     use quadfill::Pixfmt;
    ///
    ///     assert!(Pixfmt::new(0, 10).is_err());
    ///     let pix = Pixfmt::new(4, 3).unwrap();
    ///     assert_eq!(pix.size(), 4 * 3 * 3);
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptySurface);
        }
        Ok(Self { rbuf: RenderingBuffer::new(width, height, Self::BPP) })
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.data.len()
    }
    /// Width of rendering buffer in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of rendering buffer in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Raw component data, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Set every pixel to the [Color] `c`
    ///
    ///     use quadfill::{Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::new(2,2).unwrap();
    ///     pix.fill(Rgb8::white());
    ///     assert_eq!(pix.get((0,0)), Rgb8::white());
    ///     assert_eq!(pix.get((1,1)), Rgb8::white());
    ///
    /// [Color]: ../color/struct.Rgb8.html
    pub fn fill(&mut self, c: Rgb8) {
        let c = c.components();
        for p in self.rbuf.data.chunks_mut(Self::BPP) {
            p.copy_from_slice(&c);
        }
    }
    /// Color of pixel at (`x`,`y`)
    ///
    /// Panics if the location is outside the image
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        Rgb8::from_slice(&self.rbuf[id])
    }
    /// Set pixel at (`x`,`y`) to color `c`
    ///
    /// Panics if the location is outside the image
    pub fn set(&mut self, id: (usize, usize), c: Rgb8) {
        self.rbuf[id].copy_from_slice(&c.components());
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use quadfill::{Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::new(1,2).unwrap();
    ///     let black = Rgb8::black();
    ///     pix.fill(Rgb8::white());
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgb8::white());
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///     pix.copy_pixel(-1,0, black);  // Ignored, outside of range
    pub fn copy_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            return;
        }
        self.set((x as usize, y as usize), c);
    }
    /// Copies the color `c` to pixels from (`x`,`y`) to (`x+n-1`,y)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use quadfill::{Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::new(10,1).unwrap();
    ///     let black = Rgb8::black();
    ///     pix.copy_hline(0,0,10, black);
    ///     assert_eq!(pix.get((0,0)), black);
    ///     assert_eq!(pix.get((9,0)), black);
    ///
    ///     pix.copy_hline(1,1,10, black); // Ignored, outside of range
    pub fn copy_hline(&mut self, x: usize, y: usize, n: usize, c: Rgb8) {
        if y >= self.height() || x >= self.width() || n == 0 {
            return;
        }
        let n = if x + n >= self.width() { self.width() - x } else { n };
        let c = c.components();
        let row = self.rbuf.row_mut(y);
        for p in row[x * Self::BPP .. (x + n) * Self::BPP].chunks_mut(Self::BPP) {
            p.copy_from_slice(&c);
        }
    }
    /// Draw a line from `(x1,y1)` to `(x2,y2)` of color `c`, both end points included
    ///
    /// Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
    ///
    /// Line is Aliased (not-anti-aliased); pixels outside the image are dropped
    ///
    ///     use quadfill::{Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::new(5,5).unwrap();
    ///     pix.fill(Rgb8::white());
    ///     pix.line(0, 0, 4, 4, Rgb8::black());
    ///     assert_eq!(pix.get((0,0)), Rgb8::black());
    ///     assert_eq!(pix.get((2,2)), Rgb8::black());
    ///     assert_eq!(pix.get((4,4)), Rgb8::black());
    ///     assert_eq!(pix.get((4,0)), Rgb8::white());
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, c: Rgb8) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut error = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.copy_pixel(x, y, c);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * error;
            if e2 >= dy {
                error += dy;
                x += sx;
            }
            if e2 <= dx {
                error += dx;
                y += sy;
            }
        }
    }
    /// Write the image to `filename`, format chosen by extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(self.as_bytes(), self.width(), self.height(), filename)
    }
}
