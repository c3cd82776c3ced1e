// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)] // Rule 2
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

//! Float64 operation suite.
//!
//! A fixed table of pure IEEE-754 double precision operations, looked up by
//! exported name and invoked with an arity check. NaN and the infinities are
//! ordinary results; the only failures are an unknown name and a wrong
//! argument count.
//!
//! ## Usage
//!
//! ```rust
//! use flt_suite::{invoke, list_operations};
//!
//! assert_eq!(invoke("power", &[4.0, 1.5]).unwrap(), 8.0);
//! assert!(invoke("divide", &[0.0, 0.0]).unwrap().is_nan());
//! assert!(invoke("cube", &[2.0]).unwrap_err().is_unknown_operation());
//! assert_eq!(list_operations().len(), 23);
//! ```

pub mod operation;
pub mod prelude;
pub mod suite;

pub use operation::{Operation, OperationInfo, MAX_ARITY};
pub use prelude::*;
pub use suite::{Suite, SuiteBuilder, DEFAULT_MODULE_NAME};

/// Invoke `name` on the shared default suite.
///
/// # Errors
///
/// See [`Suite::invoke`].
pub fn invoke(name: &str, args: &[f64]) -> Result<f64> {
    Suite::global().invoke(name, args)
}

/// Invoke `name` on raw bit patterns using the shared default suite.
///
/// # Errors
///
/// See [`Suite::invoke_bits`].
pub fn invoke_bits(name: &str, args: &[FloatBits64]) -> Result<FloatBits64> {
    Suite::global().invoke_bits(name, args)
}

/// Every exported `(name, arity)` pair, in export order.
pub fn list_operations() -> impl ExactSizeIterator<Item = OperationInfo> {
    Suite::global().list_operations()
}
