// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for the float64 operation suite

// Runtime and parameter error codes (2000-2999)
/// Requested operation name is not part of the suite
pub const UNKNOWN_OPERATION: u16 = 2018;
/// Operation was invoked with the wrong number of arguments
pub const ARITY_MISMATCH: u16 = 2021;

// Configuration error codes (4000-4999)
/// Log level string could not be parsed
pub const INVALID_LOG_LEVEL: u16 = 4001;
