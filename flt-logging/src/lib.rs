// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! # Float Suite Logging
//!
//! Log records produced while the suite evaluates operations, and the
//! callback type a host installs to receive them.

#![forbid(unsafe_code)] // Rule 2
#![warn(missing_docs)]

pub use flt_error::{Error, Result};

/// Log handler callback type.
pub mod handler;
/// Log levels.
pub mod level;
/// Log records.
pub mod operation;

pub use handler::{LogHandler, LogSink};
pub use level::LogLevel;
pub use operation::LogOperation;
