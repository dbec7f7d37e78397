// ============================================================================
// Transcendental Constants
// Exact precomputed 32.32 bit patterns
// ============================================================================

use crate::numeric::Fixed;

/// Exact Q32.32 reciprocal of a small integer, `floor(2^32 / n)`.
///
/// Series coefficients throughout the transcendental kernels are built from
/// this at compile time, so they are bit-exact by construction rather than
/// transcribed.
pub(crate) const fn recip_of(n: i64) -> Fixed {
    Fixed::from_raw((1i64 << 32) / n)
}

/// Mathematical constants, truncated to 32.32.
///
/// These are embedded bit patterns, never computed at runtime; each is the
/// true value rounded toward zero at 2^-32 resolution. Derived relations
/// that hold exactly in the representation are relied on elsewhere:
/// `TWO_PI = 2 * PI`, `PI = 2 * FRAC_PI_2`, and `FRAC_PI_2 = 2 * FRAC_PI_4`
/// are all exact raw doublings.
impl Fixed {
    /// pi
    pub const PI: Self = Self::from_raw(0x3_243F_6A88);

    /// 2 * pi, one full turn
    pub const TWO_PI: Self = Self::from_raw(0x6_487E_D510);

    /// pi / 2
    pub const FRAC_PI_2: Self = Self::from_raw(0x1_921F_B544);

    /// pi / 4
    pub const FRAC_PI_4: Self = Self::from_raw(0xC90F_DAA2);

    /// 2 / pi, the quadrant-reduction factor
    pub const TWO_OVER_PI: Self = Self::from_raw(0xA2F9_836E);

    /// Euler's number e
    pub const E: Self = Self::from_raw(0x2_B7E1_5162);

    /// ln(2)
    pub const LN_2: Self = Self::from_raw(0xB172_17F7);

    /// log2(e)
    pub const LOG2_E: Self = Self::from_raw(0x1_7154_7652);

    /// sqrt(2)
    pub const SQRT_2: Self = Self::from_raw(0x1_6A09_E667);

    /// tan(pi / 8), the octant-reduction threshold for arctangent
    pub const TAN_FRAC_PI_8: Self = Self::from_raw(0x6A09_E667);

    /// Degrees per radian, 180 / pi
    pub const DEG_PER_RAD: Self = Self::from_raw(0x39_4BB8_34C7);

    /// Radians per degree, pi / 180
    pub const RAD_PER_DEG: Self = Self::from_raw(0x477_D1A8);
}
