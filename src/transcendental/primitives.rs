// ============================================================================
// Transcendental Primitives
// Polynomial kernels: sin, atan, asin, exp, ln, sqrt
// ============================================================================

use super::consts::recip_of;
use crate::numeric::Fixed;

// Taylor ladder for sin about zero. Each rung is the ratio between
// consecutive factorials: 6 = 2*3, 20 = 4*5, ... 156 = 12*13, so the nested
// form reproduces x - x^3/3! + x^5/5! - ... through the x^13 term.
const SIN_LADDER: [Fixed; 6] = [
    recip_of(6),
    recip_of(20),
    recip_of(42),
    recip_of(72),
    recip_of(110),
    recip_of(156),
];

// Taylor ladder for cos about zero: 2 = 1*2, 12 = 3*4, ... 132 = 11*12,
// covering through the x^12 term.
const COS_LADDER: [Fixed; 6] = [
    recip_of(2),
    recip_of(12),
    recip_of(30),
    recip_of(56),
    recip_of(90),
    recip_of(132),
];

// Odd-harmonic coefficients for arctangent, x - x^3/3 + x^5/5 - ...
// through the x^27 term. After octant reduction the argument magnitude is
// at most tan(pi/8), so the tail beyond 1/27 is below one raw unit.
const ATAN_LADDER: [Fixed; 13] = [
    recip_of(3),
    recip_of(5),
    recip_of(7),
    recip_of(9),
    recip_of(11),
    recip_of(13),
    recip_of(15),
    recip_of(17),
    recip_of(19),
    recip_of(21),
    recip_of(23),
    recip_of(25),
    recip_of(27),
];

// Factorial reciprocals for exp, 1/1! through 1/12!. After range reduction
// the argument magnitude is at most ln(2)/2.
const EXP_LADDER: [Fixed; 12] = [
    recip_of(1),
    recip_of(2),
    recip_of(3),
    recip_of(4),
    recip_of(5),
    recip_of(6),
    recip_of(7),
    recip_of(8),
    recip_of(9),
    recip_of(10),
    recip_of(11),
    recip_of(12),
];

// Odd-harmonic coefficients for the atanh form of ln, through the t^23
// term. After mantissa normalization t = (m-1)/(m+1) is below 1/3.
const LN_LADDER: [Fixed; 11] = [
    recip_of(3),
    recip_of(5),
    recip_of(7),
    recip_of(9),
    recip_of(11),
    recip_of(13),
    recip_of(15),
    recip_of(17),
    recip_of(19),
    recip_of(21),
    recip_of(23),
];

/// sin on the reduced interval `[-pi/4, pi/4]`.
fn sin_kernel(x: Fixed) -> Fixed {
    let x2 = x * x;
    let mut acc = Fixed::ONE;
    for &c in SIN_LADDER.iter().rev() {
        acc = Fixed::ONE - x2 * c * acc;
    }
    x * acc
}

/// cos on the reduced interval `[-pi/4, pi/4]`.
fn cos_kernel(x: Fixed) -> Fixed {
    let x2 = x * x;
    let mut acc = Fixed::ONE;
    for &c in COS_LADDER.iter().rev() {
        acc = Fixed::ONE - x2 * c * acc;
    }
    acc
}

/// atan on `[0, tan(pi/8)]`.
fn atan_kernel(x: Fixed) -> Fixed {
    let x2 = x * x;
    let (&seed, rest) = ATAN_LADDER.split_last().unwrap_or((&Fixed::ZERO, &[]));
    let mut acc = seed;
    for &c in rest.iter().rev() {
        acc = c - x2 * acc;
    }
    x * (Fixed::ONE - x2 * acc)
}

/// e^r on `[-ln(2)/2, ln(2)/2]`.
fn exp_kernel(r: Fixed) -> Fixed {
    let mut acc = Fixed::ONE;
    for &c in EXP_LADDER.iter().rev() {
        acc = Fixed::ONE + r * c * acc;
    }
    acc
}

/// ln on the normalized mantissa `[1, 2)`, via the atanh identity
/// `ln(m) = 2 * atanh((m - 1) / (m + 1))`.
fn ln_kernel(m: Fixed) -> Fixed {
    let t = (m - Fixed::ONE) / (m + Fixed::ONE);
    let t2 = t * t;
    let (&seed, rest) = LN_LADDER.split_last().unwrap_or((&Fixed::ZERO, &[]));
    let mut acc = seed;
    for &c in rest.iter().rev() {
        acc = c + t2 * acc;
    }
    (t * (Fixed::ONE + t2 * acc)).mul_pow2(1)
}

/// Bit-by-bit integer square root of a 128-bit value. Returns the floor of
/// the true root; the operand never exceeds 96 bits here.
fn isqrt_u128(mut n: u128) -> u64 {
    let mut res: u128 = 0;
    let mut bit: u128 = 1 << 94;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if n >= res + bit {
            n -= res + bit;
            res = (res >> 1) + bit;
        } else {
            res >>= 1;
        }
        bit >>= 2;
    }
    res as u64
}

impl Fixed {
    /// Sine of an angle in radians.
    ///
    /// The angle is reduced to the nearest quarter turn with the exact
    /// `TWO_OVER_PI` and `FRAC_PI_2` constants, then a Taylor kernel covers
    /// the residual eighth of a turn. Any angle is accepted; reduction
    /// quality degrades for magnitudes far beyond a few turns, as the
    /// quarter-turn multiple amplifies the constant's 2^-32 truncation.
    pub fn sin(self) -> Self {
        // Nearest quarter-turn index, rounding half up.
        let quadrant = (self * Self::TWO_OVER_PI + Self::HALF).floor();
        let x = self - quadrant * Self::FRAC_PI_2;
        match quadrant.to_int() & 3 {
            0 => sin_kernel(x),
            1 => cos_kernel(x),
            2 => -sin_kernel(x),
            _ => -cos_kernel(x),
        }
    }

    /// Arctangent, in radians in `(-pi/2, pi/2)`.
    ///
    /// Reduction runs in three stages, each an exact identity: oddness
    /// folds to non-negative input, `atan(x) = pi/2 - atan(1/x)` folds to
    /// `[0, 1]`, and `atan(x) = pi/4 + atan((x-1)/(x+1))` folds to
    /// `[0, tan(pi/8)]` where the odd series converges fast.
    pub fn atan(self) -> Self {
        if self < Self::ZERO {
            return -(-self).atan();
        }
        if self > Self::ONE {
            return Self::FRAC_PI_2 - self.recip().atan();
        }
        if self > Self::TAN_FRAC_PI_8 {
            let folded = (self - Self::ONE) / (self + Self::ONE);
            return Self::FRAC_PI_4 + folded.atan();
        }
        atan_kernel(self)
    }

    /// Arcsine, in radians in `[-pi/2, pi/2]`.
    ///
    /// Computed as `atan(x / sqrt(1 - x^2))`. Inputs at or beyond ±1 clamp
    /// to ±pi/2.
    pub fn asin(self) -> Self {
        if self >= Self::ONE {
            return Self::FRAC_PI_2;
        }
        if self <= Self::NEG_ONE {
            return -Self::FRAC_PI_2;
        }
        (self / (Self::ONE - self * self).sqrt()).atan()
    }

    /// Natural exponential, e^x.
    ///
    /// Reduced by `n = round(x * log2(e))` so the residual fits one Taylor
    /// kernel, then scaled by `2^n` with a shift. Arguments large enough to
    /// overflow saturate to `MAX`; arguments below the representable range
    /// flush to `ZERO`.
    pub fn exp(self) -> Self {
        let n = (self * Self::LOG2_E + Self::HALF).floor().to_int();
        if n > 31 {
            return Self::MAX;
        }
        if n < -32 {
            return Self::ZERO;
        }
        let r = self - Self::from_int(n) * Self::LN_2;
        let k = exp_kernel(r);
        if n >= 0 {
            // The kernel value can reach sqrt(2), so the topmost scale step
            // may still overflow; saturate instead of wrapping negative.
            if k.raw_value() > (i64::MAX >> n) {
                return Self::MAX;
            }
            k.mul_pow2(n as u32)
        } else {
            Self::from_raw(k.raw_value() >> -n)
        }
    }

    /// Natural logarithm.
    ///
    /// The input is normalized to a mantissa in `[1, 2)` by inspecting its
    /// leading bit, an atanh-form series handles the mantissa, and the
    /// binary exponent contributes an exact multiple of `LN_2`. Zero and
    /// negative inputs return `ZERO` (the domain is unchecked).
    pub fn ln(self) -> Self {
        if self.raw_value() <= 0 {
            return Self::ZERO;
        }
        let exponent = 31 - self.raw_value().leading_zeros() as i32;
        let mantissa = if exponent >= 0 {
            Self::from_raw(self.raw_value() >> exponent)
        } else {
            Self::from_raw(self.raw_value() << -exponent)
        };
        Self::from_int(exponent) * Self::LN_2 + ln_kernel(mantissa)
    }

    /// Square root, truncated to 32.32.
    ///
    /// Exact integer square root of the raw value widened by 32 bits, so
    /// the result is the true root rounded toward zero at full resolution.
    /// Zero and negative inputs return `ZERO`.
    pub fn sqrt(self) -> Self {
        if self.raw_value() <= 0 {
            return Self::ZERO;
        }
        Self::from_raw(isqrt_u128((self.raw_value() as u128) << 32) as i64)
    }

    /// Square root reading the raw value as unsigned.
    ///
    /// A sum of squares near the top of the range can wrap into negative
    /// raw territory; reinterpreting the bits as a 64-bit magnitude
    /// recovers the intended value, extending the usable input range to
    /// just under 2^32. Used by vector magnitudes.
    pub fn sqrt_extended(self) -> Self {
        let wide = (self.raw_value() as u64 as u128) << 32;
        Self::from_raw(isqrt_u128(wide) as i64)
    }
}

// ============================================================================
// Tests
// ============================================================================
