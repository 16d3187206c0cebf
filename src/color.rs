//! Colors

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Red Color (255,0,0), used for vertex handles
    pub fn red() -> Self {
        Self::new(255,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Components in memory order
    pub fn components(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
    /// Read a color from the first three bytes of `p`
    pub fn from_slice(p: &[u8]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<[u8;3]> for Rgb8 {
    fn from(c: [u8;3]) -> Rgb8 {
        Rgb8::new(c[0], c[1], c[2])
    }
}
impl From<Rgb8> for [u8;3] {
    fn from(c: Rgb8) -> [u8;3] {
        c.components()
    }
}
