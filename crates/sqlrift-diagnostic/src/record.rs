//! The canonical diagnostic value and its comparison protocol.
//!
//! [`DiagnosticRecord`] is what a differential test compares when deciding
//! whether two engines (or two runs) reported the same condition. Its
//! [`PartialEq`], [`Hash`] and [`Ord`] implementations are the whole
//! contract: callers sort, deduplicate and diff with them directly and never
//! re-derive tie-break rules of their own.

use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::level::ErrorLevel;

/// Rendered in place of an unset level or message.
const UNSET_PLACEHOLDER: &str = "null";

/// A single warning or error reported by a SQL engine.
///
/// The record is immutable once built. The `with_*` methods consume the
/// record and return an updated copy, so a value shared with comparison code
/// can never change underneath it.
///
/// # Ordering
///
/// Records are ordered by `code`, then `level`, then `message`. An unset
/// level or message sorts before any set one, and [`ErrorLevel::Warning`]
/// sorts before [`ErrorLevel::Error`]. Two records compare
/// [`Ordering::Equal`] exactly when they are `==`.
///
/// # Example
///
/// ```
/// # use sqlrift_diagnostic::{DiagnosticRecord, ErrorLevel};
/// let first = DiagnosticRecord::error(42, "syntax error");
/// let second = DiagnosticRecord::default()
///     .with_level(ErrorLevel::Error)
///     .with_code(42)
///     .with_message("syntax error");
///
/// assert_eq!(first, second);
/// assert_eq!(first.fingerprint(), second.fingerprint());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<ErrorLevel>,

    code: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl DiagnosticRecord {
    /// Create a record with every field supplied.
    pub fn new(level: Option<ErrorLevel>, code: i64, message: Option<String>) -> Self {
        Self {
            level,
            code,
            message,
        }
    }

    /// Create an error-level record.
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self::new(Some(ErrorLevel::Error), code, Some(message.into()))
    }

    /// Create a warning-level record.
    pub fn warning(code: i64, message: impl Into<String>) -> Self {
        Self::new(Some(ErrorLevel::Warning), code, Some(message.into()))
    }

    /// Convert the text fields scraped from engine output into a record.
    ///
    /// A missing or blank `level` leaves the level unset. The message is kept
    /// verbatim, so an empty message stays distinct from no message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLevel`] when `level` is neither a warning nor
    /// an error.
    ///
    /// [`Error::UnknownLevel`]: crate::Error::UnknownLevel
    pub fn from_raw(
        level: Option<&str>,
        code: i64,
        message: Option<&str>,
    ) -> crate::Result<Self> {
        let level = match level.filter(|text| !text.trim().is_empty()) {
            Some(text) => match text.parse::<ErrorLevel>() {
                Ok(level) => Some(level),
                Err(err) => {
                    debug!(code, level = text; "Rejected captured diagnostic");
                    return Err(err);
                }
            },
            None => None,
        };

        let record = Self::new(level, code, message.map(str::to_owned));
        trace!(record:?; "Captured diagnostic");
        Ok(record)
    }

    /// Set the level.
    pub fn with_level(mut self, level: ErrorLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Clear the level.
    pub fn without_level(mut self) -> Self {
        self.level = None;
        self
    }

    /// Set the code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Set the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Clear the message.
    pub fn without_message(mut self) -> Self {
        self.message = None;
        self
    }

    /// Get the level, if set.
    pub fn level(&self) -> Option<ErrorLevel> {
        self.level
    }

    /// Get the code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Get the message, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if both levels are unset, or both are set and equal.
    pub fn same_level(&self, other: &Self) -> bool {
        self.level == other.level
    }

    /// Returns `true` if the codes are equal and the messages are either both
    /// unset or both set to the same text.
    pub fn same_code_and_message(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }

    /// Equality against a value of unknown type.
    ///
    /// Returns `false` for `None` or for anything that is not a
    /// [`DiagnosticRecord`]; otherwise the same answer as `==`.
    pub fn same_observation(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }

    /// Deterministic integer hash of `(level, code, message)`.
    ///
    /// Equal records always produce equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for DiagnosticRecord {
    fn eq(&self, other: &Self) -> bool {
        self.same_level(other) && self.same_code_and_message(other)
    }
}

impl Eq for DiagnosticRecord {}

impl Hash for DiagnosticRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
        self.code.hash(state);
        self.message.hash(state);
    }
}

impl PartialOrd for DiagnosticRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiagnosticRecord {
    // `None` sorts before `Some`, so unset fields sort first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.level.map_or(UNSET_PLACEHOLDER, |level| level.as_str());
        let message = self.message.as_deref().unwrap_or(UNSET_PLACEHOLDER);
        write!(f, "Level: {level}; Code: {}; Message: {message}.", self.code)
    }
}
