// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error type shared by every crate of the float64 operation suite.
//!
//! Numeric results such as NaN or infinity are never errors. The only
//! failures are lookup failures at the name boundary and wrong argument
//! counts, plus configuration parsing.

use core::fmt;

use crate::{codes, kinds::ErrorKind};

/// `Error` categories for suite operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Runtime lookup errors
    Runtime   = 7,
    /// Parse errors
    Parse     = 10,
    /// Parameter-related errors (wrong argument count)
    Parameter = 18,
}

impl ErrorCategory {
    /// Short lowercase name used in `Display` output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Parse => "parse",
            Self::Parameter => "parameter",
        }
    }
}

/// Main error type.
///
/// `category`, `code` and `message` are fixed per kind; `kind` carries the
/// dynamic details (operation name, expected and actual arity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
    /// Structured details
    pub kind:     ErrorKind,
}

impl Error {
    /// Create an error from its structured kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        let (category, code, message) = match &kind {
            ErrorKind::UnknownOperation { .. } => {
                (ErrorCategory::Runtime, codes::UNKNOWN_OPERATION, "Unknown operation")
            },
            ErrorKind::ArityMismatch { .. } => {
                (ErrorCategory::Parameter, codes::ARITY_MISMATCH, "Arity mismatch")
            },
            ErrorKind::InvalidLogLevel { .. } => {
                (ErrorCategory::Parse, codes::INVALID_LOG_LEVEL, "Invalid log level")
            },
        };
        Self { category, code, message, kind }
    }

    /// The host asked for a name that is not exported by the suite
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperation { name: name.into() })
    }

    /// The host passed `got` arguments to an operation taking `expected`
    #[must_use]
    pub fn arity_mismatch(operation: &'static str, expected: usize, got: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { operation, expected, got })
    }

    /// A configured log level string was not recognised
    pub fn invalid_log_level(level: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLogLevel { level: level.into() })
    }

    /// Check if this is an unknown operation error
    #[must_use]
    pub fn is_unknown_operation(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownOperation { .. })
    }

    /// Check if this is an arity mismatch error
    #[must_use]
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ArityMismatch { .. })
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][E{:04}] {}: {}", self.category.as_str(), self.code, self.message, self.kind)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation() {
        let error = Error::unknown_operation("cube");
        assert!(error.is_unknown_operation());
        assert!(!error.is_arity_mismatch());
        assert_eq!(error.category, ErrorCategory::Runtime);
        assert_eq!(error.code, codes::UNKNOWN_OPERATION);
        assert_eq!(error.kind, ErrorKind::UnknownOperation { name: "cube".to_string() });
    }

    #[test]
    fn test_arity_mismatch() {
        let error = Error::arity_mismatch("add", 2, 3);
        assert!(error.is_arity_mismatch());
        assert_eq!(error.category, ErrorCategory::Parameter);
        assert_eq!(error.code, codes::ARITY_MISMATCH);
        assert_eq!(
            error.kind,
            ErrorKind::ArityMismatch { operation: "add", expected: 2, got: 3 }
        );
    }

    #[test]
    fn test_display() {
        let error = Error::arity_mismatch("minimum", 3, 1);
        assert_eq!(
            error.to_string(),
            "[parameter][E2021] Arity mismatch: minimum expects 3 argument(s), got 1"
        );

        let error = Error::unknown_operation("cube");
        assert_eq!(error.to_string(), "[runtime][E2018] Unknown operation: cube");
    }

    #[test]
    fn test_invalid_log_level() {
        let error = Error::invalid_log_level("loud");
        assert!(error.is_parse_error());
        assert_eq!(error.code, codes::INVALID_LOG_LEVEL);
    }
}
