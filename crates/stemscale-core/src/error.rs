//! Core error type
//!
//! Raised by image construction, pixel access, depth conversion and
//! histogram bookkeeping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is zero, or too large to address
    #[error("image size {width}x{height} is not usable")]
    InvalidDimension { width: u32, height: u32 },

    /// Bit depth that no image can have
    #[error("{0} bpp is not a supported image depth")]
    InvalidDepth(u32),

    /// Access past the end of a pixel row or histogram domain
    #[error("index {index} out of range 0..{len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Operation called on an image of the wrong depth
    #[error("operation not available on {0} bpp images")]
    UnsupportedDepth(u32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Failure while writing a diagnostic dump
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type of core operations
pub type Result<T> = std::result::Result<T, Error>;
