//! Canonical SQL engine diagnostics for differential testing.
//!
//! A differential test runs the same statements against several database
//! engines (or several times against one) and flags any run whose observed
//! warnings and errors disagree. This crate provides the value those runs
//! are compared through:
//!
//! - [`ErrorLevel`] - the ordered severity of a diagnostic
//! - [`DiagnosticRecord`] - one diagnostic (level, numeric code, message)
//!   with structural equality, a hash consistent with it, and a total order
//! - [`Error`] - failures when converting raw captured text into a record
//!
//! Unset fields are first-class: a record with no level or no message is
//! valid, compares equal only to records that are unset in the same place,
//! and sorts before any record that has the field set.
//!
//! # Example
//!
//! ```
//! # use sqlrift_diagnostic::{DiagnosticRecord, ErrorLevel};
//! let mut observed = vec![
//!     DiagnosticRecord::error(1064, "syntax error"),
//!     DiagnosticRecord::warning(1064, "syntax error"),
//!     DiagnosticRecord::default().with_code(1064),
//! ];
//! observed.sort();
//!
//! assert_eq!(observed[0].level(), None);
//! assert_eq!(observed[1].level(), Some(ErrorLevel::Warning));
//! assert_eq!(observed[2].level(), Some(ErrorLevel::Error));
//! assert_eq!(
//!     observed[2].to_string(),
//!     "Level: ERROR; Code: 1064; Message: syntax error."
//! );
//! ```

mod error;
mod level;
mod record;

pub use error::{Error, Result};
pub use level::ErrorLevel;
pub use record::DiagnosticRecord;
