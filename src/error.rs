//! Error types for table conversion and preprocessing operations.

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

/// Canonical result for tabprep operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Error type for every public operation in this crate.
///
/// Each variant carries the offending identifier (column name or strategy
/// string) or, for conversion failures, a description of what was wrong
/// with the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Input could not be turned into a rectangular table.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// A required argument was omitted or empty.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A referenced column does not exist in the table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// An enumerated option was given a value outside its domain.
    #[error("Unknown strategy: '{0}' is not defined")]
    UnknownStrategy(String),

    /// An aggregate was requested over a column with no present values.
    #[error("Empty column: '{0}' has no non-missing values")]
    EmptyColumn(String),

    /// A column has zero variance and cannot be standardized.
    #[error("Degenerate column: '{0}' has zero variance")]
    DegenerateColumn(String),
}

/// Fieldless discriminant of [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Conversion,
    MissingArgument,
    UnknownColumn,
    UnknownStrategy,
    EmptyColumn,
    DegenerateColumn,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Conversion => "ConversionError",
            ErrorKind::MissingArgument => "MissingArgumentError",
            ErrorKind::UnknownColumn => "UnknownColumnError",
            ErrorKind::UnknownStrategy => "UnknownStrategyError",
            ErrorKind::EmptyColumn => "EmptyColumnError",
            ErrorKind::DegenerateColumn => "DegenerateColumnError",
        };
        f.write_str(name)
    }
}

impl TransformError {
    /// The kind of failure, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Conversion(_) => ErrorKind::Conversion,
            TransformError::MissingArgument(_) => ErrorKind::MissingArgument,
            TransformError::UnknownColumn(_) => ErrorKind::UnknownColumn,
            TransformError::UnknownStrategy(_) => ErrorKind::UnknownStrategy,
            TransformError::EmptyColumn(_) => ErrorKind::EmptyColumn,
            TransformError::DegenerateColumn(_) => ErrorKind::DegenerateColumn,
        }
    }

    /// The column name or strategy string the error refers to.
    ///
    /// For `Conversion` and `MissingArgument` this is the message.
    pub fn subject(&self) -> &str {
        match self {
            TransformError::Conversion(s)
            | TransformError::MissingArgument(s)
            | TransformError::UnknownColumn(s)
            | TransformError::UnknownStrategy(s)
            | TransformError::EmptyColumn(s)
            | TransformError::DegenerateColumn(s) => s,
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::Conversion(err.to_string())
    }
}

// Lets `Fill` itself be passed where `TryInto<Fill>` is expected.
impl From<Infallible> for TransformError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
