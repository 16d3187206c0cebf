
use crate::pixfmt::Pixfmt;
use crate::color::Rgb8;
use crate::error::Result;
use crate::Surface;

use std::cmp::min;
use std::cmp::max;
use std::path::Path;

/// Rendering Base
///
/// Clips all drawing to the underlying [Pixfmt]
///
/// [Pixfmt]: ../pixfmt/struct.Pixfmt.html
#[derive(Debug,Clone)]
pub struct RenderingBase {
    pub pixf: Pixfmt,
}

impl RenderingBase {
    /// Create a new Rendering Base from a Pixel Format
    pub fn new(pixf: Pixfmt) -> RenderingBase {
        RenderingBase { pixf }
    }
    /// Create a new Rendering Base with its own `width` x `height` image
    pub fn with_size(width: usize, height: usize) -> Result<RenderingBase> {
        Ok(Self::new(Pixfmt::new(width, height)?))
    }
    /// Inclusive pixel limits as (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    /// Copy a horizontal run of pixels from `x1` to `x2` inclusive
    ///
    /// End points may be given in either order
    pub fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, c: Rgb8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        self.pixf.copy_hline(x1 as usize, y as usize, (x2 - x1 + 1) as usize, c);
    }
    /// Color of pixel at (`x`,`y`)
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        self.pixf.get(id)
    }
    /// Raw component data
    pub fn as_bytes(&self) -> &[u8] {
        self.pixf.as_bytes()
    }
    /// Write the image to `filename`
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        self.pixf.to_file(filename)
    }
}

impl Surface for RenderingBase {
    fn width(&self) -> usize {
        self.pixf.width()
    }
    fn height(&self) -> usize {
        self.pixf.height()
    }
    fn clear(&mut self, color: Rgb8) {
        self.pixf.fill(color);
    }
    fn hline(&mut self, x1: f64, y: f64, x2: f64, color: Rgb8) {
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        self.copy_hline(x1.round() as i64, y.round() as i64, x2.round() as i64, color);
    }
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb8) {
        self.pixf.line(x1.round() as i64, y1.round() as i64,
                       x2.round() as i64, y2.round() as i64, color);
    }
    /// Midpoint circle, eight octants per step
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb8) {
        let (cx, cy) = (x.round() as i64, y.round() as i64);
        let r = radius.round() as i64;
        if r <= 0 {
            self.pixf.copy_pixel(cx, cy, color);
            return;
        }
        let (mut dx, mut dy) = (r, 0);
        let mut err = 1 - r;
        while dx >= dy {
            for &(px, py) in &[( dx,  dy), ( dy,  dx), (-dy,  dx), (-dx,  dy),
                               (-dx, -dy), (-dy, -dx), ( dy, -dx), ( dx, -dy)] {
                self.pixf.copy_pixel(cx + px, cy + py, color);
            }
            dy += 1;
            if err < 0 {
                err += 2 * dy + 1;
            } else {
                dx -= 1;
                err += 2 * (dy - dx) + 1;
            }
        }
    }
}
