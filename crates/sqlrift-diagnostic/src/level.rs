//! Severity levels for engine diagnostics.
//!
//! This module defines the fixed, ordered set of severities a SQL engine can
//! attach to a diagnostic.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The severity level of a diagnostic.
///
/// The declaration order is the ordering: [`ErrorLevel::Warning`] sorts
/// before [`ErrorLevel::Error`]. Sorted diagnostic sets depend on this, so
/// the variants must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorLevel {
    /// An advisory condition; the statement still ran.
    Warning,

    /// The engine rejected or aborted the statement.
    Error,
}

impl ErrorLevel {
    /// Every level, in sort order.
    pub const ALL: [ErrorLevel; 2] = [ErrorLevel::Warning, ErrorLevel::Error];

    /// Returns the canonical upper-case name (e.g., "WARNING").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Warning => "WARNING",
            ErrorLevel::Error => "ERROR",
        }
    }

    /// Returns `true` if this is an error level.
    pub fn is_error(&self) -> bool {
        matches!(self, ErrorLevel::Error)
    }

    /// Returns `true` if this is a warning level.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorLevel::Warning)
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLevel {
    type Err = Error;

    /// Parses the severity text engines print, ignoring case and surrounding
    /// whitespace. `warn` and `err` are accepted as short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "warn" => Ok(ErrorLevel::Warning),
            "error" | "err" => Ok(ErrorLevel::Error),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(ErrorLevel::Warning.to_string(), "WARNING");
        assert_eq!(ErrorLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_level_predicates() {
        assert!(ErrorLevel::Error.is_error());
        assert!(!ErrorLevel::Error.is_warning());
        assert!(ErrorLevel::Warning.is_warning());
        assert!(!ErrorLevel::Warning.is_error());
    }

    #[test]
    fn test_warning_sorts_before_error() {
        assert!(ErrorLevel::Warning < ErrorLevel::Error);

        let mut levels = vec![ErrorLevel::Error, ErrorLevel::Warning, ErrorLevel::Error];
        levels.sort();
        assert_eq!(
            levels,
            [ErrorLevel::Warning, ErrorLevel::Error, ErrorLevel::Error]
        );
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = ErrorLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, ErrorLevel::ALL);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("WARNING".parse::<ErrorLevel>(), Ok(ErrorLevel::Warning));
        assert_eq!("warn".parse::<ErrorLevel>(), Ok(ErrorLevel::Warning));
        assert_eq!(" Error\n".parse::<ErrorLevel>(), Ok(ErrorLevel::Error));
        assert_eq!("ERR".parse::<ErrorLevel>(), Ok(ErrorLevel::Error));
    }

    #[test]
    fn test_level_from_str_rejects_unknown() {
        assert_eq!(
            "NOTICE".parse::<ErrorLevel>(),
            Err(Error::UnknownLevel("NOTICE".to_string()))
        );
        assert!("".parse::<ErrorLevel>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for level in ErrorLevel::ALL {
            assert_eq!(level.to_string().parse::<ErrorLevel>(), Ok(level));
        }
    }
}
