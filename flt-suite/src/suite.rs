// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Name-based invocation of the operation table.
//!
//! A [`Suite`] is immutable once built, so a single instance can be shared
//! across threads without locking.

use std::borrow::Cow;

use flt_logging::{LogLevel, LogOperation, LogSink};

use crate::{
    operation::{Operation, OperationInfo},
    prelude::{Error, FloatBits64, Result},
};

/// Module name used when none is configured
pub const DEFAULT_MODULE_NAME: &str = "arithmetic-float64";

static DEFAULT_SUITE: Suite =
    Suite { module_name: Cow::Borrowed(DEFAULT_MODULE_NAME), sink: LogSink::disabled() };

/// The float64 operation suite as seen by a host
#[derive(Debug)]
pub struct Suite {
    module_name: Cow<'static, str>,
    sink:        LogSink,
}

impl Default for Suite {
    fn default() -> Self {
        Self { module_name: Cow::Borrowed(DEFAULT_MODULE_NAME), sink: LogSink::disabled() }
    }
}

impl Suite {
    /// Shared suite with the default configuration and no log handler
    #[must_use]
    pub fn global() -> &'static Suite {
        &DEFAULT_SUITE
    }

    /// Start configuring a suite
    #[must_use]
    pub fn builder() -> SuiteBuilder {
        SuiteBuilder::new()
    }

    /// Module name this suite reports in its log records
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Minimum level forwarded to the log handler
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.sink.level()
    }

    /// Resolve `name` and evaluate it on `args`.
    ///
    /// # Errors
    ///
    /// Returns an unknown operation error if `name` is not exported, or an
    /// arity mismatch error if `args.len()` differs from its arity.
    pub fn invoke(&self, name: &str, args: &[f64]) -> Result<f64> {
        let operation = self.resolve(name)?;
        match operation.evaluate(args) {
            Ok(result) => {
                self.trace(operation, || {
                    format!("{operation}{args:?} = {:?}", FloatBits64::from_float(result))
                });
                Ok(result)
            },
            Err(error) => {
                self.report(&error, Some(operation));
                Err(error)
            },
        }
    }

    /// Bit-pattern variant of [`Suite::invoke`].
    ///
    /// # Errors
    ///
    /// Same as [`Suite::invoke`].
    pub fn invoke_bits(&self, name: &str, args: &[FloatBits64]) -> Result<FloatBits64> {
        let operation = self.resolve(name)?;
        match operation.evaluate_bits(args) {
            Ok(result) => {
                self.trace(operation, || format!("{operation}{args:?} = {result:?}"));
                Ok(result)
            },
            Err(error) => {
                self.report(&error, Some(operation));
                Err(error)
            },
        }
    }

    /// Every exported `(name, arity)` pair, in export order
    pub fn list_operations(&self) -> impl ExactSizeIterator<Item = OperationInfo> + use<> {
        Operation::ALL.into_iter().map(Operation::info)
    }

    fn resolve(&self, name: &str) -> Result<Operation> {
        Operation::from_name(name).ok_or_else(|| {
            let error = Error::unknown_operation(name);
            self.report(&error, None);
            error
        })
    }

    fn trace(&self, operation: Operation, message: impl FnOnce() -> String) {
        #[cfg(feature = "log")]
        let log_enabled = log::log_enabled!(log::Level::Trace);
        #[cfg(not(feature = "log"))]
        let log_enabled = false;

        let sink_enabled = self.sink.enabled(LogLevel::Trace);
        if !log_enabled && !sink_enabled {
            return;
        }
        let message = message();

        #[cfg(feature = "log")]
        log::trace!("{}: {}", self.module_name, message);

        if sink_enabled {
            self.sink.handle_log(LogOperation::with_operation(
                LogLevel::Trace,
                message,
                operation.name(),
            ));
        }
    }

    fn report(&self, error: &Error, operation: Option<Operation>) {
        #[cfg(feature = "log")]
        log::debug!("{}: {}", self.module_name, error);

        if self.sink.enabled(LogLevel::Debug) {
            let record = match operation {
                Some(op) => LogOperation::with_operation(LogLevel::Debug, error.to_string(), op.name()),
                None => LogOperation::new(LogLevel::Debug, error.to_string()),
            };
            self.sink.handle_log(record);
        }
    }
}

/// Builder for a configured [`Suite`]
#[derive(Debug)]
pub struct SuiteBuilder {
    module_name: Cow<'static, str>,
    log_level:   Option<LogLevel>,
    sink:        LogSink,
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteBuilder {
    /// Builder with the default module name and no handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            module_name: Cow::Borrowed(DEFAULT_MODULE_NAME),
            log_level:   None,
            sink:        LogSink::disabled(),
        }
    }

    /// Set the module name reported in log records
    #[must_use]
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Cow::Owned(name.into());
        self
    }

    /// Set the minimum level forwarded to the log handler
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Parse and set the minimum log level
    ///
    /// # Errors
    ///
    /// Returns a parse error if `level` is not a known level name.
    pub fn with_log_level_str(self, level: &str) -> Result<Self> {
        Ok(self.with_log_level(level.parse()?))
    }

    /// Install the handler receiving log records.
    ///
    /// Without an explicit [`SuiteBuilder::with_log_level`] the handler
    /// receives every record, `Trace` included.
    #[must_use]
    pub fn with_log_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(LogOperation) + Send + Sync + 'static,
    {
        self.sink = LogSink::new(LogLevel::Trace, handler);
        self
    }

    /// Finish configuration
    #[must_use]
    pub fn build(self) -> Suite {
        let sink = match self.log_level {
            Some(level) => self.sink.with_level(level),
            None => self.sink,
        };
        Suite { module_name: self.module_name, sink }
    }
}
