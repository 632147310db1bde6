//! I/O error type
//!
//! Codec failures from `png` and from the PNM reader are flattened into
//! strings so that callers see a single enum.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// Format, sample layout or depth this crate cannot handle
    #[error("unsupported image: {0}")]
    UnsupportedFormat(String),

    /// Truncated or malformed header or raster
    #[error("malformed image data: {0}")]
    InvalidData(String),

    #[error("cannot decode image: {0}")]
    DecodeError(String),

    #[error("cannot encode image: {0}")]
    EncodeError(String),

    /// Building the decoded `Pix` failed
    #[error(transparent)]
    Core(#[from] stemscale_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
