//! Error types for stemscale-run

use thiserror::Error;

/// Errors that can occur while extracting runs
#[derive(Debug, Error)]
pub enum RunError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stemscale_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for run operations
pub type RunResult<T> = Result<T, RunError>;
