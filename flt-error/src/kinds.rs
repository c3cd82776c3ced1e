// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error kind definitions

use core::fmt;

/// Structured detail attached to an [`Error`](crate::Error)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No operation is exported under `name`
    UnknownOperation {
        /// Name requested by the host
        name: String,
    },
    /// Argument count does not match the operation's arity
    ArityMismatch {
        /// Exported name of the operation
        operation: &'static str,
        /// Declared arity
        expected:  usize,
        /// Number of arguments supplied
        got:       usize,
    },
    /// Log level string could not be parsed
    InvalidLogLevel {
        /// Rejected input
        level: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperation { name } => f.write_str(name),
            Self::ArityMismatch { operation, expected, got } => {
                write!(f, "{operation} expects {expected} argument(s), got {got}")
            },
            Self::InvalidLogLevel { level } => write!(f, "'{level}'"),
        }
    }
}
