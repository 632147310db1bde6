use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// A regression output could not be encoded or stored
    #[error("cannot write {path}: {message}")]
    ImageWrite { path: String, message: String },

    /// A synthetic page could not be allocated
    #[error("cannot build page: {0}")]
    Build(#[from] stemscale_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
