//! Errors

use std::fmt;

/// Errors raised while building a scene or moving images to and from disk
///
/// Filling and drawing never fail; degenerate geometry is handled by
/// the scanline classification instead.
#[derive(Debug)]
pub enum Error {
    /// A quad refers to a vertex outside of the vertex store
    InvalidVertexIndex { quad: usize, index: usize, len: usize },
    /// A quad uses the same vertex twice
    DuplicateVertexIndex { quad: usize, index: usize },
    /// A vertex position is NaN or infinite
    NonFiniteVertex { index: usize },
    /// Surface created with zero width or height
    EmptySurface,
    /// Image encoding or decoding failed
    Image(image::ImageError),
    /// File access failed
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidVertexIndex { quad, index, len } =>
                write!(f, "quad {} refers to vertex {} but only {} vertices exist", quad, index, len),
            Error::DuplicateVertexIndex { quad, index } =>
                write!(f, "quad {} uses vertex {} more than once", quad, index),
            Error::NonFiniteVertex { index } =>
                write!(f, "vertex {} has a non-finite position", index),
            Error::EmptySurface =>
                write!(f, "cannot create a surface with 0 width or height"),
            Error::Image(e) => write!(f, "image error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
