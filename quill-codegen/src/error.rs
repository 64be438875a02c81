use thiserror::Error;

/// Result type for construct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building constructs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid name '{0}'")]
    InvalidName(String),

    #[error("invalid parameter '{0}'")]
    InvalidParameter(String),

    #[error(transparent)]
    Type(#[from] quill_types::Error),
}
