// ============================================================================
// Lockstep Math Library
// Deterministic Q32.32 fixed-point arithmetic for simulation code
// ============================================================================

//! # Lockstep Math
//!
//! A deterministic fixed-point numeric core for game simulation: Q32.32
//! scalar arithmetic, a transcendental layer built on it, and 2D/3D vector
//! geometry built on both.
//!
//! Every operation is a pure integer computation over exact precomputed
//! constants, so results are bit-identical across hardware, compilers, and
//! optimization levels. IEEE floating point cannot make that guarantee; this
//! crate trades range (±2^31 whole units) and resolution (2^-32) for it.
//!
//! ## Policies
//!
//! - **Wrapping, unchecked arithmetic.** Overflow, underflow, division by
//!   zero, and out-of-domain transcendental inputs are deliberately not
//!   detected at runtime. The only checked, reported failures are in
//!   decimal-to-fixed conversion ([`Fixed::from_decimal`]).
//! - **No runtime-computed constants.** π and every conversion factor is an
//!   embedded 32.32 bit pattern.
//! - **Value semantics.** [`Fixed`], [`FixedVec2`], and [`FixedVec3`] are
//!   `Copy` types; apart from the named in-place mutators (`set`,
//!   `set_normalize`, `add_vec2`) every operation returns a new value.
//!
//! [`Fixed`]: numeric::Fixed
//! [`Fixed::from_decimal`]: numeric::Fixed::from_decimal
//! [`FixedVec2`]: vector::FixedVec2
//! [`FixedVec3`]: vector::FixedVec3
//!
//! ## Example
//!
//! ```rust
//! use lockstep_math::prelude::*;
//!
//! let v = FixedVec2::from_decimal(3.0, 4.0, 0)?;
//! assert_eq!(v.magnitude(), Fixed::from_int(5));
//!
//! let angle = Fixed::PI.to_degrees();
//! assert!((angle.to_f64() - 180.0).abs() < 1e-6);
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;
pub mod transcendental;
pub mod vector;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Fixed, NumericError, NumericResult};
    pub use crate::vector::{FixedVec2, FixedVec3};
}

// ============================================================================
// Debug-Only Invariant Checks
// ============================================================================

/// Assert a documented-but-unchecked precondition when the `debug-checks`
/// feature is enabled. Compiles to nothing otherwise, so release builds keep
/// the unchecked-arithmetic policy and its exact output bits.
#[cfg(feature = "debug-checks")]
macro_rules! debug_invariant {
    ($($arg:tt)*) => {
        debug_assert!($($arg)*);
    };
}

#[cfg(not(feature = "debug-checks"))]
macro_rules! debug_invariant {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_invariant;
