// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `flt-suite`

pub use flt_error::{codes, Error, ErrorCategory, ErrorKind, Result};
pub use flt_logging::{LogLevel, LogOperation};
pub use flt_math::FloatBits64;

pub use crate::{
    operation::{Operation, OperationInfo},
    suite::{Suite, SuiteBuilder},
};
