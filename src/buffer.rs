//! Row-major pixel storage behind a Pixfmt

use std::ops::{Index, IndexMut, Range};

/// Component bytes of an image, one row after another
#[derive(Debug,Clone)]
pub(crate) struct RenderingBuffer {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Zeroed buffer of `width` x `height` pixels, `bpp` bytes each
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer { data: vec![0u8; width * height * bpp], width, height, bpp }
    }
    /// Bytes of row `y`
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let n = self.width * self.bpp;
        &mut self.data[y * n .. (y + 1) * n]
    }
    fn pixel(&self, (x, y): (usize, usize)) -> Range<usize> {
        assert!(x < self.width && y < self.height,
                "pixel ({},{}) outside {}x{}", x, y, self.width, self.height);
        let i = (y * self.width + x) * self.bpp;
        i .. i + self.bpp
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, id: (usize, usize)) -> &[u8] {
        let r = self.pixel(id);
        &self.data[r]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, id: (usize, usize)) -> &mut [u8] {
        let r = self.pixel(id);
        &mut self.data[r]
    }
}
