//! Error types for stemscale-sheet

use thiserror::Error;

use crate::SourceKey;

/// Errors raised while building or cleaning a sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stemscale_core::Error),

    /// A picture source does not match the picture dimensions
    #[error("{key:?} source is {actual_width}x{actual_height}, picture is {width}x{height}")]
    SourceMismatch {
        key: SourceKey,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for sheet operations
pub type SheetResult<T> = Result<T, SheetError>;
