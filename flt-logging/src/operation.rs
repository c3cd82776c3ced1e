// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Log record emitted by the suite.

use crate::level::LogLevel;

/// A single log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogOperation {
    /// Log level
    pub level:     LogLevel,
    /// Log message
    pub message:   String,
    /// Exported name of the operation involved, if it resolved
    pub operation: Option<&'static str>,
}

impl LogOperation {
    /// Create a new log record
    #[must_use]
    pub const fn new(level: LogLevel, message: String) -> Self {
        Self { level, message, operation: None }
    }

    /// Create a new log record tied to a resolved operation
    pub fn with_operation<S: Into<String>>(
        level: LogLevel,
        message: S,
        operation: &'static str,
    ) -> Self {
        Self { level, message: message.into(), operation: Some(operation) }
    }
}
