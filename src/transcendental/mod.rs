// ============================================================================
// Transcendental Module
// Trigonometric, exponential, and root functions over Q32.32
// ============================================================================
//
// This module extends `Fixed` with:
// - Exact precomputed constants (pi family, e family, conversion factors)
// - Primitive kernels: sin, atan, asin, exp, ln, sqrt, sqrt_extended
// - Derived identities: cos, tan, the reciprocal trig family, acos, the
//   hyperbolic family, pow, and degree/radian conversion
//
// Everything is polynomial evaluation over embedded 32.32 bit patterns.
// No lookup tables, no floating point, no runtime-computed constants: the
// same input bits produce the same output bits on every machine.
//
// Out-of-domain inputs follow the crate's unchecked policy: they produce
// deterministic values (usually zero) rather than errors or traps.

mod consts;
mod derived;
mod primitives;
