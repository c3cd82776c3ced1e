// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Float64 operations.
//!
//! The `f64_*` functions are plain IEEE-754 arithmetic or thin wrappers
//! around the platform math library. The `wasm_f64_*` functions pin the
//! WebAssembly instruction semantics where Rust's own `f64` methods differ
//! (NaN handling in `min`/`max`).

// Arithmetic

/// IEEE-754 addition.
#[must_use]
#[inline]
pub fn f64_add(a: f64, b: f64) -> f64 {
    a + b
}

/// IEEE-754 subtraction.
#[must_use]
#[inline]
pub fn f64_sub(a: f64, b: f64) -> f64 {
    a - b
}

/// IEEE-754 multiplication.
#[must_use]
#[inline]
pub fn f64_mul(a: f64, b: f64) -> f64 {
    a * b
}

/// IEEE-754 division. Division by a signed zero yields a signed infinity;
/// `0/0` and `inf/inf` yield NaN.
#[must_use]
#[inline]
pub fn f64_div(a: f64, b: f64) -> f64 {
    a / b
}

/// Truncating remainder (C `fmod`): the result carries the sign of the
/// dividend and `x % 0` is NaN.
#[must_use]
#[inline]
pub fn f64_rem(a: f64, b: f64) -> f64 {
    a % b
}

// Sign and rounding

/// Negation: flips the sign bit, including on zero and NaN.
#[must_use]
#[inline]
pub fn wasm_f64_neg(a: f64) -> f64 {
    -a
}

/// Absolute value: clears the sign bit.
#[must_use]
#[inline]
pub fn wasm_f64_abs(a: f64) -> f64 {
    a.abs()
}

/// Round toward positive infinity.
#[must_use]
#[inline]
pub fn wasm_f64_ceil(a: f64) -> f64 {
    a.ceil()
}

/// Round toward negative infinity.
#[must_use]
#[inline]
pub fn wasm_f64_floor(a: f64) -> f64 {
    a.floor()
}

/// Square root. Negative inputs yield NaN, `-0.0` yields `-0.0`.
#[must_use]
#[inline]
pub fn wasm_f64_sqrt(a: f64) -> f64 {
    a.sqrt()
}

// Min / max

/// `f64.min`: NaN if either operand is NaN, and `-0.0` is smaller than
/// `+0.0`.
#[must_use]
pub fn wasm_f64_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        // Arithmetic on a NaN operand keeps its payload quiet.
        return a + b;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_negative() { a } else { b };
    }
    if a < b { a } else { b }
}

/// `f64.max`: NaN if either operand is NaN, and `+0.0` is larger than
/// `-0.0`.
#[must_use]
pub fn wasm_f64_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return a + b;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_negative() { b } else { a };
    }
    if a > b { a } else { b }
}

// Transcendentals

/// Cosine, argument in radians.
#[must_use]
#[inline]
pub fn f64_cos(a: f64) -> f64 {
    a.cos()
}

/// Sine, argument in radians.
#[must_use]
#[inline]
pub fn f64_sin(a: f64) -> f64 {
    a.sin()
}

/// Tangent, argument in radians.
#[must_use]
#[inline]
pub fn f64_tan(a: f64) -> f64 {
    a.tan()
}

/// Arc cosine in `[0, pi]`; NaN outside `[-1, 1]`.
#[must_use]
#[inline]
pub fn f64_acos(a: f64) -> f64 {
    a.acos()
}

/// Arc sine in `[-pi/2, pi/2]`; NaN outside `[-1, 1]`.
#[must_use]
#[inline]
pub fn f64_asin(a: f64) -> f64 {
    a.asin()
}

/// Arc tangent in `(-pi/2, pi/2)`.
#[must_use]
#[inline]
pub fn f64_atan(a: f64) -> f64 {
    a.atan()
}

/// Quadrant-correct `atan2(y, x)`, result in `[-pi, pi]`.
#[must_use]
#[inline]
pub fn f64_atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

/// `e^a`.
#[must_use]
#[inline]
pub fn f64_exp(a: f64) -> f64 {
    a.exp()
}

/// Natural logarithm. `ln(0) = -inf`, negative inputs yield NaN.
#[must_use]
#[inline]
pub fn f64_ln(a: f64) -> f64 {
    a.ln()
}

/// `base^exponent` with ECMAScript `Math.pow` special cases.
///
/// Differs from C `pow` in two places: a NaN exponent always yields NaN
/// (C returns 1 for `pow(1, NaN)`), and `(+-1)^(+-inf)` is NaN (C returns 1).
/// A zero exponent yields 1 for every base, NaN included.
#[must_use]
pub fn f64_pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return exponent;
    }
    if exponent == 0.0 {
        return 1.0;
    }
    if exponent.is_infinite() && base.abs() == 1.0 {
        return f64::NAN;
    }
    base.powf(exponent)
}
