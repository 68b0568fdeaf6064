//! Errors raised while converting captured engine output into records.
//!
//! Comparison, hashing and rendering of [`DiagnosticRecord`]s never fail;
//! only turning raw text into typed fields can.
//!
//! [`DiagnosticRecord`]: crate::DiagnosticRecord

use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for field-level conversion of captured diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The captured severity text is neither a warning nor an error.
    #[error("unknown diagnostic level: `{0}`")]
    UnknownLevel(String),
}
