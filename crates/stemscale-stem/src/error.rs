//! Error types for stemscale-stem

use stemscale_sheet::SourceKey;
use thiserror::Error;

/// Errors that can occur while measuring stems
#[derive(Debug, Error)]
pub enum StemError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stemscale_core::Error),

    /// Run extraction error
    #[error("run error: {0}")]
    Run(#[from] stemscale_run::RunError),

    /// Sheet model error
    #[error("sheet error: {0}")]
    Sheet(#[from] stemscale_sheet::SheetError),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] stemscale_io::IoError),

    /// The sheet picture lacks a required raster
    #[error("picture has no {0:?} source")]
    MissingSource(SourceKey),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for stem operations
pub type StemResult<T> = Result<T, StemError>;
