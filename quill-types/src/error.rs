use thiserror::Error;

/// Result type for type-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at type construction or value coercion time.
///
/// Everything here is detected synchronously; a constructor that returns an
/// error never yields a usable half-built type. The one locally recovered
/// condition, a numeric value outside its type's range, is not an error at
/// all: `value_from` clamps it and `is_ok` reports the strict answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("struct requires a name")]
    MissingName,

    #[error("invalid name '{0}'")]
    InvalidName(String),

    #[error("invalid field name '{0}'")]
    InvalidFieldName(String),

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("expected {expected} values, got {got}")]
    ArgCount { expected: usize, got: usize },

    #[error("unknown struct fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    #[error("missing struct fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("cannot coerce {value} into {ty}")]
    Format { ty: String, value: String },
}
