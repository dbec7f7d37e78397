// ============================================================================
// Fixed-Point Scalar
// Signed 64-bit Q32.32 value with wrapping, unchecked arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::debug_invariant;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Number of fractional bits in the representation.
const FRAC_BITS: u32 = 32;

/// Mask selecting the 32 fractional bits.
const FRAC_MASK: i64 = 0xFFFF_FFFF;

/// Scale factors for decimal conversion, 10^0 through 10^6.
const DECIMAL_SCALE: [i64; 7] = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000];

/// Q32.32 fixed-point scalar.
///
/// The raw `i64` represents `raw / 2^32`: 32 signed integer bits, 32
/// fractional bits. Any 64-bit pattern is a legal value; there is no NaN or
/// infinity state. Two's complement is monotonic, so comparing raw integers
/// is the same as comparing values (the derived `Ord` relies on this).
///
/// # Arithmetic Policy
///
/// Addition, subtraction, negation, and multiplication wrap on overflow;
/// division by zero produces a deterministic garbage value rather than a
/// trap. Nothing in the arithmetic path branches on "bad" inputs; that is
/// what keeps results bit-identical everywhere and the hot path cheap. The
/// `debug-checks` feature adds assertions for testing; it must stay off in
/// any build whose outputs are compared across machines.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Fixed(i64);

impl Fixed {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << FRAC_BITS);

    /// Negative one (-1.0)
    pub const NEG_ONE: Self = Self(-(1 << FRAC_BITS));

    /// Two (2.0)
    pub const TWO: Self = Self(2 << FRAC_BITS);

    /// One half (0.5)
    pub const HALF: Self = Self(1 << (FRAC_BITS - 1));

    /// Maximum representable value, just under 2^31
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value, -2^31
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the raw Q32.32 bit pattern.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer. Values outside ±2^31 wrap.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self((value as i64) << FRAC_BITS)
    }

    /// Convert a decimal with up to `precision` fractional digits.
    ///
    /// The input is scaled by `10^precision`, rounded half-away-from-zero to
    /// an integer, and re-expressed as that integer exactly divided (integer
    /// division) by the scale. This is the only entry point where floating
    /// point is allowed to touch a `Fixed`, and the only fallible operation
    /// in the crate.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision > 6`
    /// - `OutOfRange` if the scaled magnitude is >= 1e9
    /// - `PrecisionLoss` if the rounded scaled value deviates from the true
    ///   scaled value by more than 0.2, i.e. the input carried digits beyond
    ///   `precision`
    pub fn from_decimal(value: f64, precision: u32) -> NumericResult<Self> {
        let Some(&scale) = DECIMAL_SCALE.get(precision as usize) else {
            tracing::debug!(precision, "decimal conversion rejected: unsupported precision");
            return Err(NumericError::InvalidPrecision);
        };
        let scaled = value * scale as f64;
        if scaled.abs() >= 1e9 {
            tracing::debug!(value, precision, "decimal conversion rejected: out of range");
            return Err(NumericError::OutOfRange);
        }
        let rounded = if scaled > 0.0 {
            (scaled + 0.5) as i64
        } else {
            (scaled - 0.5) as i64
        };
        if (scaled - rounded as f64).abs() > 0.2 {
            tracing::debug!(value, precision, "decimal conversion rejected: precision loss");
            return Err(NumericError::PrecisionLoss);
        }
        Ok(Self((rounded << FRAC_BITS) / scale))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw Q32.32 bit pattern.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Extract the integer word. Rounds toward negative infinity (an
    /// arithmetic shift, matching `int_part`).
    #[inline]
    pub const fn to_int(self) -> i32 {
        (self.0 >> FRAC_BITS) as i32
    }

    /// Integer part: the fractional bits masked to zero.
    ///
    /// For negative values this rounds toward negative infinity; `-1.5`
    /// becomes `-2.0`. Together with `frac_part` it decomposes a value as
    /// `x = int_part(x) + frac_part(x)`.
    #[inline]
    pub const fn int_part(self) -> Self {
        Self(self.0 & !FRAC_MASK)
    }

    /// Fractional part: the integer bits masked to zero. Always in `[0, 1)`.
    #[inline]
    pub const fn frac_part(self) -> Self {
        Self(self.0 & FRAC_MASK)
    }

    /// Convert to `f64`. For display and debugging at the host boundary
    /// only; simulation logic must never round-trip through floats.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC_BITS) as f64
    }

    // ========================================================================
    // Arithmetic Helpers
    // ========================================================================

    /// Multiply by `2^n` (arithmetic left shift), `0 <= n <= 31`.
    #[inline]
    pub fn mul_pow2(self, n: u32) -> Self {
        debug_invariant!(n <= 31, "mul_pow2 shift out of range: {n}");
        Self(self.0.wrapping_shl(n))
    }

    /// Divide by `2^n` (arithmetic right shift), `0 <= n <= 31`.
    #[inline]
    pub fn div_pow2(self, n: u32) -> Self {
        debug_invariant!(n <= 31, "div_pow2 shift out of range: {n}");
        Self(self.0.wrapping_shr(n))
    }

    /// Reciprocal, `1 / self`.
    ///
    /// Newton-Raphson from a power-of-two seed: six multiplicative
    /// refinements take the seed to full Q32.32 precision (the error
    /// squares every step). There is no division instruction anywhere in
    /// it, and no zero check: `recip(0)` is a deterministic garbage value,
    /// never a trap. Reciprocals with magnitude beyond 2^31 overflow.
    pub fn recip(self) -> Self {
        let (v, negative) = if self.0 < 0 {
            (self.0.wrapping_neg(), true)
        } else {
            (self.0, false)
        };

        // Power-of-two estimate just below the true reciprocal.
        let mut seed = u64::MAX;
        let mut bits = v;
        while bits != 0 {
            seed >>= 1;
            bits >>= 1;
        }

        let v = Self(v);
        let mut est = Self(seed as i64);
        for _ in 0..6 {
            est = est * (Self::TWO - v * est);
        }

        if negative {
            -est
        } else {
            est
        }
    }

    /// Largest value with no fractional bits not greater than `self`.
    #[inline]
    pub fn floor(self) -> Self {
        // Masking rounds toward negative infinity already.
        self.int_part()
    }

    /// Smallest value with no fractional bits not less than `self`.
    #[inline]
    pub fn ceil(self) -> Self {
        let t = self.int_part();
        if t.0 < self.0 {
            Self(t.0.wrapping_add(Self::ONE.0))
        } else {
            t
        }
    }

    /// Two-sided clamp. `lo <= hi` is assumed, not checked.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        debug_invariant!(lo.0 <= hi.0, "clamp bounds are inverted");
        if self.0 < lo.0 {
            lo
        } else if self.0 > hi.0 {
            hi
        } else {
            self
        }
    }

    /// Absolute value. `MIN` has no positive counterpart and wraps.
    #[inline]
    pub fn abs(self) -> Self {
        if self.0 < 0 {
            Self(self.0.wrapping_neg())
        } else {
            self
        }
    }

    /// Smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Self;

    /// Q32.32 multiply: sign split out, magnitudes multiplied wide, sign
    /// reapplied.
    ///
    /// The unsigned 128-bit product shifted right by 32 reproduces exactly
    /// the bits of the reference integer/fraction cross-term decomposition:
    /// everything above bit 95 is discarded as overflow, everything below
    /// bit 32 as underflow. Because truncation happens on the magnitude,
    /// inexact products round toward zero in both directions.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let wide = (self.0.unsigned_abs() as u128) * (rhs.0.unsigned_abs() as u128);
        let magnitude = (wide >> FRAC_BITS) as u64 as i64;
        if negative {
            Self(magnitude.wrapping_neg())
        } else {
            Self(magnitude)
        }
    }
}

impl Div for Fixed {
    type Output = Self;

    /// Reciprocal-based division: `x * recip(y)`, never a hardware divide.
    /// Division by zero is undefined and unchecked.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        debug_invariant!(rhs.0 != 0, "fixed-point division by zero");
        self * rhs.recip()
    }
}

impl Rem for Fixed {
    type Output = Self;

    /// Remainder on the raw representation.
    ///
    /// # Panics
    /// Panics if `rhs` is zero (the reference bindings rejected a zero
    /// modulus at the boundary).
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_rem(rhs.0))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Fixed {
    /// Renders `raw / 2^32` to six decimal digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({}, raw={:#x})", self, self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Fixed::ONE.raw_value(), 0x1_0000_0000);
        assert_eq!(Fixed::NEG_ONE.raw_value(), -0x1_0000_0000);
        assert_eq!(Fixed::HALF.raw_value(), 0x8000_0000);
        assert_eq!(Fixed::ZERO, Fixed::default());
    }

    #[test]
    fn test_from_int_round_trip() {
        assert_eq!(Fixed::from_int(7).to_int(), 7);
        assert_eq!(Fixed::from_int(-7).to_int(), -7);
        assert_eq!(Fixed::from_int(0), Fixed::ZERO);
    }

    #[test]
    fn test_to_int_floors() {
        let x = Fixed::from_int(1) + Fixed::HALF;
        assert_eq!(x.to_int(), 1);
        let y = Fixed::from_int(-2) + Fixed::HALF; // -1.5
        assert_eq!(y.to_int(), -2);
    }

    #[test]
    fn test_from_decimal_exact_half() {
        let x = Fixed::from_decimal(0.5, 1).unwrap();
        assert_eq!(x, Fixed::HALF);
    }

    #[test]
    fn test_from_decimal_precision_loss() {
        assert_eq!(
            Fixed::from_decimal(1.2345, 2),
            Err(NumericError::PrecisionLoss)
        );
        // Same value converts fine with enough digits.
        assert!(Fixed::from_decimal(1.2345, 4).is_ok());
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert_eq!(
            Fixed::from_decimal(2_000_000_000.0, 0),
            Err(NumericError::OutOfRange)
        );
        // Magnitude check applies to negative values too.
        assert_eq!(
            Fixed::from_decimal(-2_000_000_000.0, 0),
            Err(NumericError::OutOfRange)
        );
        // Precision scales the limit down.
        assert_eq!(
            Fixed::from_decimal(1_000_000.0, 6),
            Err(NumericError::OutOfRange)
        );
    }

    #[test]
    fn test_from_decimal_invalid_precision() {
        assert_eq!(
            Fixed::from_decimal(1.0, 7),
            Err(NumericError::InvalidPrecision)
        );
    }

    #[test]
    fn test_from_decimal_round_trip_sample() {
        let x = Fixed::from_decimal(123.456789, 6).unwrap();
        assert!((x.to_f64() - 123.456789).abs() < 2f64.powi(-32));
        let y = Fixed::from_decimal(-0.000001, 6).unwrap();
        assert!((y.to_f64() + 0.000001).abs() < 2f64.powi(-32));
    }

    #[test]
    fn test_add_sub_neg_wrap() {
        let a = Fixed::from_int(3);
        let b = Fixed::from_int(5);
        assert_eq!(a + b, Fixed::from_int(8));
        assert_eq!(a - b, Fixed::from_int(-2));
        assert_eq!(-a, Fixed::from_int(-3));
        // Wrapping, not trapping.
        assert_eq!(Fixed::MAX + Fixed::from_raw(1), Fixed::MIN);
        assert_eq!(-Fixed::MIN, Fixed::MIN);
    }

    #[test]
    fn test_mul_exact_small_values() {
        let a = Fixed::from_int(1) + Fixed::HALF; // 1.5
        assert_eq!(a * a, Fixed::from_int(2) + Fixed::from_raw(0x4000_0000)); // 2.25
        assert_eq!(a * -a, -(a * a));
        assert_eq!(a * Fixed::ZERO, Fixed::ZERO);
        assert_eq!(a * Fixed::ONE, a);
    }

    #[test]
    fn test_mul_truncates_toward_zero() {
        // Smallest positive value squared underflows to zero, and so does
        // its negation: truncation acts on the magnitude, not the raw.
        let eps = Fixed::from_raw(1);
        assert_eq!(eps * eps, Fixed::ZERO);
        assert_eq!(-eps * eps, Fixed::ZERO);

        // An inexact product has the same magnitude in all four sign
        // combinations.
        let a = Fixed::ONE / Fixed::from_int(3);
        let b = Fixed::ONE / Fixed::from_int(7);
        assert_eq!(-a * b, -(a * b));
        assert_eq!(a * -b, -(a * b));
        assert_eq!(-a * -b, a * b);
    }

    #[test]
    fn test_recip() {
        let half = Fixed::from_int(2).recip();
        assert!((half.to_f64() - 0.5).abs() < 1e-8);
        let r3 = Fixed::from_int(3).recip();
        assert!((r3.to_f64() - 1.0 / 3.0).abs() < 1e-8);
        let neg = Fixed::from_int(-4).recip();
        assert!((neg.to_f64() + 0.25).abs() < 1e-8);
    }

    #[test]
    fn test_div() {
        let q = Fixed::from_int(10) / Fixed::from_int(2);
        assert!((q.to_f64() - 5.0).abs() < 1e-7);
        let t = Fixed::ONE / Fixed::from_int(3);
        assert!((t.to_f64() - 1.0 / 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_pow2_shifts() {
        let x = Fixed::from_int(3);
        assert_eq!(x.mul_pow2(4), Fixed::from_int(48));
        assert_eq!(x.div_pow2(1), Fixed::from_int(1) + Fixed::HALF);
        assert_eq!(Fixed::from_int(-3).div_pow2(1), Fixed::from_int(-2) + Fixed::HALF);
    }

    #[test]
    fn test_floor_ceil() {
        let x = Fixed::from_int(1) + Fixed::HALF;
        assert_eq!(x.floor(), Fixed::from_int(1));
        assert_eq!(x.ceil(), Fixed::from_int(2));

        let y = Fixed::from_int(-2) + Fixed::HALF; // -1.5
        assert_eq!(y.floor(), Fixed::from_int(-2));
        assert_eq!(y.ceil(), Fixed::from_int(-1));

        let z = Fixed::from_int(4);
        assert_eq!(z.floor(), z);
        assert_eq!(z.ceil(), z);
    }

    #[test]
    fn test_int_frac_decomposition() {
        let y = Fixed::from_int(-2) + Fixed::HALF; // -1.5
        assert_eq!(y.int_part(), Fixed::from_int(-2));
        assert_eq!(y.frac_part(), Fixed::HALF);
        assert_eq!(y.int_part() + y.frac_part(), y);
    }

    #[test]
    fn test_clamp_min_max_abs() {
        let lo = Fixed::from_int(-1);
        let hi = Fixed::ONE;
        assert_eq!(Fixed::from_int(5).clamp(lo, hi), hi);
        assert_eq!(Fixed::from_int(-5).clamp(lo, hi), lo);
        assert_eq!(Fixed::HALF.clamp(lo, hi), Fixed::HALF);

        assert_eq!(Fixed::from_int(2).min(Fixed::from_int(3)), Fixed::from_int(2));
        assert_eq!(Fixed::from_int(2).max(Fixed::from_int(3)), Fixed::from_int(3));
        assert_eq!(Fixed::from_int(-2).abs(), Fixed::from_int(2));
        assert_eq!(Fixed::from_int(2).abs(), Fixed::from_int(2));
    }

    #[test]
    fn test_rem() {
        let x = Fixed::from_int(3) + Fixed::HALF;
        let r = x % Fixed::from_int(2);
        assert_eq!(r, Fixed::from_int(1) + Fixed::HALF);
    }

    #[test]
    fn test_ordering_matches_raw() {
        assert!(Fixed::from_int(-1) < Fixed::ZERO);
        assert!(Fixed::ZERO < Fixed::from_raw(1));
        assert!(Fixed::MIN < Fixed::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fixed::from_int(1).to_string(), "1.000000");
        assert_eq!(Fixed::HALF.to_string(), "0.500000");
        let x = Fixed::from_decimal(-1.5, 1).unwrap();
        assert_eq!(x.to_string(), "-1.500000");
        assert_eq!(Fixed::from_decimal(0.1, 1).unwrap().to_string(), "0.100000");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use quickcheck::quickcheck;

        quickcheck! {
            fn prop_add_commutes(a: i64, b: i64) -> bool {
                let (a, b) = (Fixed::from_raw(a), Fixed::from_raw(b));
                a + b == b + a
            }

            fn prop_sub_antisymmetric(a: i64, b: i64) -> bool {
                let (a, b) = (Fixed::from_raw(a), Fixed::from_raw(b));
                a - b == -(b - a)
            }

            fn prop_compare_matches_raw(a: i64, b: i64) -> bool {
                (Fixed::from_raw(a) < Fixed::from_raw(b)) == (a < b)
            }

            fn prop_int_frac_recompose(a: i64) -> bool {
                let x = Fixed::from_raw(a);
                x.int_part() + x.frac_part() == x
            }
        }

        proptest! {
            #[test]
            fn prop_from_decimal_round_trip(
                mantissa in -999_999_999i64..=999_999_999i64,
                precision in 0u32..=6u32,
            ) {
                let value = mantissa as f64 / DECIMAL_SCALE[precision as usize] as f64;
                let converted = Fixed::from_decimal(value, precision).unwrap();
                // 2^-32 of conversion truncation plus the f64 representation
                // error of `value` itself.
                let tolerance = 2f64.powi(-32) + value.abs() * 2f64.powi(-48);
                prop_assert!((converted.to_f64() - value).abs() < tolerance);
            }

            #[test]
            fn prop_from_decimal_deterministic(
                mantissa in -999_999_999i64..=999_999_999i64,
                precision in 0u32..=6u32,
            ) {
                let value = mantissa as f64 / DECIMAL_SCALE[precision as usize] as f64;
                let a = Fixed::from_decimal(value, precision).unwrap();
                let b = Fixed::from_decimal(value, precision).unwrap();
                prop_assert_eq!(a.raw_value(), b.raw_value());
            }

            #[test]
            fn prop_mul_matches_cross_term_decomposition(a in any::<i64>(), b in any::<i64>()) {
                // Independent model: split each magnitude into 32-bit
                // halves, assemble the cross terms that survive the 32.32
                // window, and reapply the sign at the end.
                let (ma, mb) = (a.unsigned_abs(), b.unsigned_abs());
                let (ah, al) = (ma >> 32, ma & 0xFFFF_FFFF);
                let (bh, bl) = (mb >> 32, mb & 0xFFFF_FFFF);
                let magnitude = (ah * bh)
                    .wrapping_shl(32)
                    .wrapping_add(ah * bl)
                    .wrapping_add(al * bh)
                    .wrapping_add((al * bl) >> 32) as i64;
                let expected = if (a < 0) != (b < 0) {
                    magnitude.wrapping_neg()
                } else {
                    magnitude
                };
                let product = Fixed::from_raw(a) * Fixed::from_raw(b);
                prop_assert_eq!(product.raw_value(), expected);
            }

            #[test]
            fn prop_mul_is_sign_symmetric(a in any::<i64>(), b in any::<i64>()) {
                let (a, b) = (Fixed::from_raw(a), Fixed::from_raw(b));
                prop_assert_eq!(-a * b, -(a * b));
                prop_assert_eq!(a * -b, -(a * b));
            }
        }
    }
}
