// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the float64 operation suite.
//!
//! # Error Categories
//!
//! ## Runtime and Parameter Errors (2000-2999)
//! - Unknown operation name (category `Runtime`)
//! - Argument count does not match the operation's arity (category
//!   `Parameter`)
//!
//! ## Parse Errors (4000-4999)
//! - Invalid log level configuration
//!
//! # Usage
//!
//! ```
//! use flt_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::arity_mismatch("add", 2, 1);
//! assert_eq!(error.category, ErrorCategory::Parameter);
//! assert_eq!(error.code, codes::ARITY_MISMATCH);
//! ```

#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub use errors::{Error, ErrorCategory};
pub use kinds::ErrorKind;

/// A specialized `Result` type for suite operations.
pub type Result<T> = core::result::Result<T, Error>;
