// ============================================================================
// Numeric Module
// Q32.32 fixed-point scalar core
// ============================================================================
//
// This module provides:
// - Fixed: signed 64-bit Q32.32 scalar (32 integer bits, 32 fractional bits)
// - NumericError: error types for the checked conversion boundary
//
// Design principles:
// - Raw two's-complement comparison equals numeric comparison
// - Wrapping, unchecked arithmetic (determinism over safety nets)
// - The only fallible operation is decimal-to-fixed conversion
// - No floating point anywhere past the conversion boundary

mod errors;
mod fixed;

pub use errors::{NumericError, NumericResult};
pub use fixed::Fixed;
