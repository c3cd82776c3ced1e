// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The closed set of exported float64 operations.
//!
//! String names only appear at the lookup boundary ([`Operation::from_name`]);
//! everything past it dispatches on the enum.

use core::{fmt, str::FromStr};

use flt_math as math;

use crate::prelude::{Error, FloatBits64, Result};

/// Maximum arity of any exported operation
pub const MAX_ARITY: usize = 3;

/// An exported float64 operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// Constant `4.2`
    Number,
    /// Sign-bit flip
    Negate,
    /// `x + y`
    Add,
    /// `x - y`
    Subtract,
    /// `x * y`
    Multiply,
    /// `x / y`
    Divide,
    /// Truncating remainder, sign of the dividend
    Modulo,
    /// `|x|`
    Absolute,
    /// Round toward positive infinity
    CeilNumber,
    /// Round toward negative infinity
    FloorNumber,
    /// `sqrt(x)`
    SquareRoot,
    /// `cos(x)`
    Cosine,
    /// `sin(x)`
    Sine,
    /// `tan(x)`
    Tangent,
    /// `acos(x)`
    Arccosine,
    /// `asin(x)`
    Arcsine,
    /// `atan(x)`
    Arctangent,
    /// `atan2(x, y)`
    Arctangent2,
    /// `e^x`
    Exponential,
    /// `ln(x)`
    Logarithm,
    /// `x^y`
    Power,
    /// NaN-propagating minimum of three values
    Minimum,
    /// NaN-propagating maximum of three values
    Maximum,
}

/// Name and arity of an exported operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationInfo {
    /// Exported name
    pub name:  &'static str,
    /// Number of f64 arguments
    pub arity: usize,
}

impl Operation {
    /// Every operation, in export order.
    pub const ALL: [Operation; 23] = [
        Self::Number,
        Self::Negate,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Absolute,
        Self::CeilNumber,
        Self::FloorNumber,
        Self::SquareRoot,
        Self::Cosine,
        Self::Sine,
        Self::Tangent,
        Self::Arccosine,
        Self::Arcsine,
        Self::Arctangent,
        Self::Arctangent2,
        Self::Exponential,
        Self::Logarithm,
        Self::Power,
        Self::Minimum,
        Self::Maximum,
    ];

    /// Exported name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Negate => "negate",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Absolute => "absolute",
            Self::CeilNumber => "ceilNumber",
            Self::FloorNumber => "floorNumber",
            Self::SquareRoot => "squareRoot",
            Self::Cosine => "cosine",
            Self::Sine => "sine",
            Self::Tangent => "tangent",
            Self::Arccosine => "arccosine",
            Self::Arcsine => "arcsine",
            Self::Arctangent => "arctangent",
            Self::Arctangent2 => "arctangent2",
            Self::Exponential => "exponential",
            Self::Logarithm => "logarithm",
            Self::Power => "power",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }

    /// Number of f64 arguments the operation takes
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Number => 0,
            Self::Negate
            | Self::Absolute
            | Self::CeilNumber
            | Self::FloorNumber
            | Self::SquareRoot
            | Self::Cosine
            | Self::Sine
            | Self::Tangent
            | Self::Arccosine
            | Self::Arcsine
            | Self::Arctangent
            | Self::Exponential
            | Self::Logarithm => 1,
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::Arctangent2
            | Self::Power => 2,
            Self::Minimum | Self::Maximum => 3,
        }
    }

    /// Name and arity pair
    #[must_use]
    pub const fn info(self) -> OperationInfo {
        OperationInfo { name: self.name(), arity: self.arity() }
    }

    /// Resolve an exported name. Names are case sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Evaluate with an arity check.
    ///
    /// # Errors
    ///
    /// Returns an arity mismatch error if `args.len()` differs from
    /// [`Operation::arity`]. NaN and infinite results are never errors.
    pub fn evaluate(self, args: &[f64]) -> Result<f64> {
        if args.len() != self.arity() {
            return Err(Error::arity_mismatch(self.name(), self.arity(), args.len()));
        }
        let mut operands = [0.0; MAX_ARITY];
        operands[..args.len()].copy_from_slice(args);
        Ok(self.apply(operands))
    }

    /// Evaluate on raw bit patterns, keeping NaN payloads and zero signs
    /// intact across the host boundary.
    ///
    /// # Errors
    ///
    /// Same as [`Operation::evaluate`].
    pub fn evaluate_bits(self, args: &[FloatBits64]) -> Result<FloatBits64> {
        if args.len() != self.arity() {
            return Err(Error::arity_mismatch(self.name(), self.arity(), args.len()));
        }
        let mut operands = [0.0; MAX_ARITY];
        for (slot, bits) in operands.iter_mut().zip(args) {
            *slot = bits.value();
        }
        Ok(FloatBits64::from_float(self.apply(operands)))
    }

    // Unused trailing operands are ignored.
    fn apply(self, [x, y, z]: [f64; MAX_ARITY]) -> f64 {
        match self {
            Self::Number => 4.2,
            Self::Negate => math::wasm_f64_neg(x),
            Self::Add => math::f64_add(x, y),
            Self::Subtract => math::f64_sub(x, y),
            Self::Multiply => math::f64_mul(x, y),
            Self::Divide => math::f64_div(x, y),
            Self::Modulo => math::f64_rem(x, y),
            Self::Absolute => math::wasm_f64_abs(x),
            Self::CeilNumber => math::wasm_f64_ceil(x),
            Self::FloorNumber => math::wasm_f64_floor(x),
            Self::SquareRoot => math::wasm_f64_sqrt(x),
            Self::Cosine => math::f64_cos(x),
            Self::Sine => math::f64_sin(x),
            Self::Tangent => math::f64_tan(x),
            Self::Arccosine => math::f64_acos(x),
            Self::Arcsine => math::f64_asin(x),
            Self::Arctangent => math::f64_atan(x),
            Self::Arctangent2 => math::f64_atan2(x, y),
            Self::Exponential => math::f64_exp(x),
            Self::Logarithm => math::f64_ln(x),
            Self::Power => math::f64_pow(x, y),
            Self::Minimum => math::wasm_f64_min(math::wasm_f64_min(x, y), z),
            Self::Maximum => math::wasm_f64_max(math::wasm_f64_max(x, y), z),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_operation(s))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_are_unique_and_resolve() {
        let names: HashSet<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Operation::from_name("ceilNumber"), Some(Operation::CeilNumber));
        assert_eq!(Operation::from_name("ceilnumber"), None);
        assert_eq!(Operation::from_name(""), None);
        assert!("cube".parse::<Operation>().unwrap_err().is_unknown_operation());
    }

    #[test]
    fn test_arity_bounds() {
        assert!(Operation::ALL.iter().all(|op| op.arity() <= MAX_ARITY));
        assert_eq!(Operation::Number.arity(), 0);
        assert_eq!(Operation::Arctangent2.arity(), 2);
        assert_eq!(Operation::Maximum.info(), OperationInfo { name: "maximum", arity: 3 });
    }

    #[test]
    fn test_evaluate_arity_mismatch() {
        let err = Operation::Add.evaluate(&[1.0]).unwrap_err();
        assert!(err.is_arity_mismatch());

        let err = Operation::Number.evaluate(&[1.0]).unwrap_err();
        assert!(err.is_arity_mismatch());

        let err = Operation::Minimum.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(err.is_arity_mismatch());
    }

    #[test]
    fn test_evaluate_bits_keeps_signed_zero() {
        let result = Operation::Negate.evaluate_bits(&[FloatBits64::POSITIVE_ZERO]).unwrap();
        assert_eq!(result, FloatBits64::NEGATIVE_ZERO);

        let result = Operation::SquareRoot.evaluate_bits(&[FloatBits64::NEGATIVE_ZERO]).unwrap();
        assert_eq!(result, FloatBits64::NEGATIVE_ZERO);
    }

    #[test]
    fn test_three_way_min_max_zero_ordering() {
        let min = Operation::Minimum.evaluate(&[0.0, -0.0, 0.0]).unwrap();
        assert_eq!(min.to_bits(), (-0.0f64).to_bits());
        let max = Operation::Maximum.evaluate(&[-0.0, 0.0, -0.0]).unwrap();
        assert_eq!(max.to_bits(), 0.0f64.to_bits());
    }
}
