// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! IEEE-754 double precision primitives.
//!
//! Every function in [`ops`] is total: NaN and the infinities are ordinary
//! return values. Arithmetic, rounding and `sqrt` are correctly rounded and
//! therefore bit-exact; the transcendentals defer to the platform math
//! library and are only guaranteed on special values, domains and ranges.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_arithmetic, clippy::float_cmp)]

pub mod float_bits;
pub mod ops;

pub use float_bits::FloatBits64;
pub use ops::*;
