// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Wrapper type for f64 with bit-pattern based equality and hashing.

use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Wrapper for f64 that implements Hash, `PartialEq`, and Eq based on bit
/// patterns.
///
/// Two NaNs with the same payload compare equal, and `+0.0` differs from
/// `-0.0`, which is what conformance checks on float results need.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct FloatBits64(pub u64);

impl FloatBits64 {
    /// Canonical quiet NaN (sign 0, exponent all 1s, significand MSB 1)
    pub const NAN: Self = FloatBits64(0x7ff8_0000_0000_0000);
    /// Positive zero
    pub const POSITIVE_ZERO: Self = FloatBits64(0);
    /// Negative zero
    pub const NEGATIVE_ZERO: Self = FloatBits64(0x8000_0000_0000_0000);

    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

    /// Creates a new `FloatBits64` from an `f64` value.
    #[must_use]
    pub fn from_float(val: f64) -> Self {
        Self(val.to_bits())
    }

    /// Returns the `f64` value represented by this `FloatBits64`.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Returns the underlying `u64` bits of this `FloatBits64`.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Creates a `FloatBits64` from raw `u64` bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// True if the sign bit is set, including for `-0.0` and negative NaNs.
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & Self::SIGN_MASK != 0
    }

    /// True for any NaN bit pattern.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    /// Number of representable doubles between `self` and `other`.
    ///
    /// `+0.0` and `-0.0` are zero apart. Returns `u64::MAX` when either side
    /// is NaN.
    #[must_use]
    pub fn ulp_distance(self, other: Self) -> u64 {
        if self.is_nan() || other.is_nan() {
            return u64::MAX;
        }
        let a = i128::from(self.ordered());
        let b = i128::from(other.ordered());
        u64::try_from((a - b).unsigned_abs()).unwrap_or(u64::MAX)
    }

    // Maps sign-magnitude bits onto a monotonic integer line.
    fn ordered(self) -> i64 {
        let magnitude = (self.0 & !Self::SIGN_MASK) as i64;
        if self.is_sign_negative() { -magnitude } else { magnitude }
    }
}

impl From<f64> for FloatBits64 {
    fn from(val: f64) -> Self {
        Self::from_float(val)
    }
}

impl From<FloatBits64> for f64 {
    fn from(bits: FloatBits64) -> Self {
        bits.value()
    }
}

impl Hash for FloatBits64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for FloatBits64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatBits64({:?} = {:#018x})", self.value(), self.0)
    }
}
