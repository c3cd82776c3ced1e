// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Log handler for suite evaluations.

use core::fmt;

use crate::{level::LogLevel, operation::LogOperation};

/// Function type for handling log operations
pub type LogHandler = Box<dyn Fn(LogOperation) + Send + Sync>;

/// A handler paired with its minimum level.
///
/// Set up once at build time and never mutated afterwards, so a shared
/// sink needs no locking.
pub struct LogSink {
    level:   LogLevel,
    handler: Option<LogHandler>,
}

impl LogSink {
    /// Create a sink forwarding records at or above `level` to `handler`
    pub fn new<F>(level: LogLevel, handler: F) -> Self
    where
        F: Fn(LogOperation) + Send + Sync + 'static,
    {
        Self { level, handler: Some(Box::new(handler)) }
    }

    /// A sink that drops every record
    #[must_use]
    pub const fn disabled() -> Self {
        Self { level: LogLevel::Off, handler: None }
    }

    /// Replace the minimum level, keeping the handler
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Minimum level forwarded
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// True if a record at `level` would reach the handler
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.is_some() && self.level.allows(level)
    }

    /// Forward `operation` if its level passes the filter
    pub fn handle_log(&self, operation: LogOperation) {
        if let Some(handler) = &self.handler {
            if self.level.allows(operation.level) {
                handler(operation);
            }
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("level", &self.level)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_disabled_sink() {
        let sink = LogSink::disabled();
        assert!(!sink.enabled(LogLevel::Error));

        // Logging without handler should not panic
        sink.handle_log(LogOperation::new(LogLevel::Error, "dropped".to_string()));
    }

    #[test]
    fn test_level_filter() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = Arc::clone(&received);

        let sink = LogSink::new(LogLevel::Debug, move |op: LogOperation| {
            received_clone.lock().unwrap().push(op);
        });
        assert!(sink.enabled(LogLevel::Debug));
        assert!(!sink.enabled(LogLevel::Trace));
        assert!(sink.enabled(LogLevel::Error));

        sink.handle_log(LogOperation::new(LogLevel::Trace, "filtered".to_string()));
        sink.handle_log(LogOperation::with_operation(LogLevel::Debug, "kept", "add"));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].message, "kept");
        assert_eq!(received[0].operation, Some("add"));
    }
}
