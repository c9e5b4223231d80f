//! Unified error type for lakelet operations.
//!
//! Callers get one [`Error`] enum instead of a mix of Polars, IO, and JSON
//! errors. Variants map to how the orchestrator treats a failure, not to the
//! library that produced it.

use polars::error::PolarsError;
use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for lakelet operations.
#[derive(Debug)]
pub enum Error {
    /// Schema declaration or cast failure (e.g. malformed date literal).
    Schema(String),
    /// Compute / expression evaluation error.
    Compute(String),
    /// I/O error (file not found, permission, etc.).
    Io(String),
    /// Resource not found (column, namespace, table).
    NotFound(String),
    /// Catalog error (invalid identifier, manifest corruption, save-mode conflict).
    Catalog(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(s) => write!(f, "schema error: {s}"),
            Error::Compute(s) => write!(f, "compute error: {s}"),
            Error::Io(s) => write!(f, "io error: {s}"),
            Error::NotFound(s) => write!(f, "not found: {s}"),
            Error::Catalog(s) => write!(f, "catalog error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<PolarsError> for Error {
    fn from(e: PolarsError) -> Self {
        let msg = e.to_string();
        match &e {
            PolarsError::ColumnNotFound(_) => Error::NotFound(msg),
            PolarsError::SchemaMismatch(_) => Error::Schema(msg),
            PolarsError::InvalidOperation(_) => Error::Schema(msg),
            PolarsError::IO { .. } => Error::Io(msg),
            PolarsError::ComputeError(_) => Error::Compute(msg),
            _ => Error::Compute(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Catalog(e.to_string())
    }
}
