// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::float_cmp)]
//! Conformance scenarios for the exported arithmetic-float64 module.

use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

use flt_suite::{invoke, FloatBits64};

/// Transcendentals come from the platform libm; allow a couple of ULPs.
const TRANSCENDENTAL_ULPS: u64 = 2;

fn call(name: &str, args: &[f64]) -> f64 {
    invoke(name, args).unwrap()
}

fn assert_bits_eq(actual: f64, expected: f64) {
    assert_eq!(
        FloatBits64::from_float(actual),
        FloatBits64::from_float(expected),
        "expected {expected:?}, got {actual:?}"
    );
}

fn assert_ulps(actual: f64, expected: f64) {
    let distance = FloatBits64::from_float(actual).ulp_distance(FloatBits64::from_float(expected));
    assert!(
        distance <= TRANSCENDENTAL_ULPS,
        "expected {expected:?}, got {actual:?} ({distance} ulps apart)"
    );
}

#[test]
fn test_number() {
    assert_eq!(call("number", &[]), 4.2);
}

#[test]
fn test_arithmetic() {
    assert_bits_eq(call("negate", &[0.1]), -0.1);
    assert_eq!(call("add", &[0.1, 0.5]), 0.6);
    assert_eq!(call("subtract", &[0.1, 0.5]), -0.4);
    assert_eq!(call("multiply", &[0.1, 0.5]), 0.05);
    assert_eq!(call("divide", &[0.1, 0.5]), 0.2);
}

#[test]
fn test_add_special_values() {
    assert!(call("add", &[0.1, f64::NAN]).is_nan());
    assert_eq!(call("add", &[0.1, f64::INFINITY]), f64::INFINITY);
    assert!(call("add", &[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
}

#[test]
fn test_divide_by_signed_zero() {
    assert_eq!(call("divide", &[0.1, 0.0]), f64::INFINITY);
    assert_eq!(call("divide", &[0.1, -0.0]), f64::NEG_INFINITY);
    assert!(call("divide", &[0.0, -0.0]).is_nan());
    assert!(call("divide", &[f64::INFINITY, f64::INFINITY]).is_nan());
}

#[test]
fn test_divide_zero_quotient_sign() {
    assert_bits_eq(call("divide", &[-0.0, 2.0]), -0.0);
    assert_bits_eq(call("divide", &[0.0, -2.0]), -0.0);
    assert_bits_eq(call("divide", &[-0.0, -2.0]), 0.0);
    assert_bits_eq(call("divide", &[1.0, f64::NEG_INFINITY]), -0.0);
}

#[test]
fn test_modulo() {
    assert_eq!(call("modulo", &[0.1, 0.03]), 0.010000000000000009);
    assert!(call("modulo", &[0.1, 0.0]).is_nan());
    assert!(call("modulo", &[-3.0, -0.0]).is_nan());
    assert_eq!(call("modulo", &[-5.5, 2.0]), -1.5);
}

#[test]
fn test_absolute_and_rounding() {
    assert_eq!(call("absolute", &[-4.2]), 4.2);
    assert_eq!(call("absolute", &[4.2]), 4.2);
    assert_bits_eq(call("absolute", &[-0.0]), 0.0);
    assert_eq!(call("ceilNumber", &[4.2]), 5.0);
    assert_eq!(call("floorNumber", &[4.2]), 4.0);
}

#[test]
fn test_square_root() {
    assert_eq!(call("squareRoot", &[0.09]), 0.3);
    assert_bits_eq(call("squareRoot", &[-0.0]), -0.0);
    assert!(call("squareRoot", &[-0.09]).is_nan());
}

#[test]
fn test_trigonometry() {
    assert_ulps(call("cosine", &[PI]), -1.0);
    assert_ulps(call("sine", &[FRAC_PI_2]), 1.0);
    assert_ulps(call("tangent", &[FRAC_PI_4]), 0.9999999999999999);
}

#[test]
fn test_inverse_trigonometry() {
    assert_ulps(call("arccosine", &[-1.0]), PI);
    assert_ulps(call("arcsine", &[1.0]), FRAC_PI_2);
    assert!(call("arcsine", &[1.000_000_1]).is_nan());
    assert!(call("arccosine", &[-1.5]).is_nan());
    assert_ulps(call("arctangent", &[1.0]), FRAC_PI_4);
    assert_ulps(call("arctangent2", &[1.0, 0.0]), FRAC_PI_2);
    assert_ulps(call("arctangent2", &[0.0, -1.0]), PI);
    assert_ulps(call("arctangent2", &[-0.0, -1.0]), -PI);
}

#[test]
fn test_exponential_and_logarithm() {
    assert_ulps(call("exponential", &[1.0]), E);
    assert_ulps(call("logarithm", &[E]), 1.0);
    assert_eq!(call("logarithm", &[0.0]), f64::NEG_INFINITY);
    assert!(call("logarithm", &[-1.0]).is_nan());
}

#[test]
fn test_power() {
    assert_eq!(call("power", &[4.0, 1.5]), 8.0);
    assert_eq!(call("power", &[0.0, 0.0]), 1.0);
    assert!(call("power", &[-2.0, 0.5]).is_nan());
}

#[test]
fn test_minimum_maximum() {
    assert_eq!(call("minimum", &[0.1, -0.2, 0.3]), -0.2);
    assert_eq!(call("maximum", &[0.1, -0.2, 0.3]), 0.3);
    assert!(call("minimum", &[0.1, f64::NAN, 0.3]).is_nan());
    assert!(call("maximum", &[f64::INFINITY, 0.0, f64::NAN]).is_nan());
    assert_eq!(call("minimum", &[f64::NEG_INFINITY, 0.0, 1.0]), f64::NEG_INFINITY);
}
