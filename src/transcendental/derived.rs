// ============================================================================
// Derived Transcendentals
// Identities layered over the primitive kernels
// ============================================================================

use crate::numeric::Fixed;

impl Fixed {
    /// Cosine of an angle in radians, as a quarter-turn phase shift of sin.
    #[inline]
    pub fn cos(self) -> Self {
        (self + Self::FRAC_PI_2).sin()
    }

    /// Tangent. Undefined (and unchecked) at odd multiples of pi/2, where
    /// the cosine underflows to zero.
    #[inline]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Secant, `1 / cos`.
    #[inline]
    pub fn sec(self) -> Self {
        self.cos().recip()
    }

    /// Cosecant, `1 / sin`.
    #[inline]
    pub fn csc(self) -> Self {
        self.sin().recip()
    }

    /// Cotangent, `cos / sin`.
    #[inline]
    pub fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    /// Arccosine, in radians in `[0, pi]`. Inputs beyond ±1 clamp along
    /// with [`asin`](Self::asin).
    #[inline]
    pub fn acos(self) -> Self {
        Self::FRAC_PI_2 - self.asin()
    }

    /// Hyperbolic sine, `(e^x - e^-x) / 2`.
    #[inline]
    pub fn sinh(self) -> Self {
        (self.exp() - (-self).exp()).div_pow2(1)
    }

    /// Hyperbolic cosine, `(e^x + e^-x) / 2`.
    #[inline]
    pub fn cosh(self) -> Self {
        (self.exp() + (-self).exp()).div_pow2(1)
    }

    /// Hyperbolic tangent, `(e^2x - 1) / (e^2x + 1)`.
    #[inline]
    pub fn tanh(self) -> Self {
        let e2x = self.mul_pow2(1).exp();
        (e2x - Self::ONE) / (e2x + Self::ONE)
    }

    /// Hyperbolic secant, `2e^x / (e^2x + 1)`.
    #[inline]
    pub fn sech(self) -> Self {
        self.exp().mul_pow2(1) / (self.mul_pow2(1).exp() + Self::ONE)
    }

    /// Hyperbolic cosecant, `2e^x / (e^2x - 1)`.
    #[inline]
    pub fn csch(self) -> Self {
        self.exp().mul_pow2(1) / (self.mul_pow2(1).exp() - Self::ONE)
    }

    /// Hyperbolic cotangent, `(e^2x + 1) / (e^2x - 1)`.
    #[inline]
    pub fn coth(self) -> Self {
        let e2x = self.mul_pow2(1).exp();
        (e2x + Self::ONE) / (e2x - Self::ONE)
    }

    /// General power, `x^y = e^(y * ln(x))`.
    ///
    /// Defined for positive bases. A non-positive base follows the
    /// unchecked `ln` path (which yields zero) and so produces `ONE`.
    #[inline]
    pub fn pow(self, exponent: Self) -> Self {
        (exponent * self.ln()).exp()
    }

    /// Radians to degrees, a single multiply by the exact `DEG_PER_RAD`.
    #[inline]
    pub fn to_degrees(self) -> Self {
        self * Self::DEG_PER_RAD
    }

    /// Degrees to radians, a single multiply by the exact `RAD_PER_DEG`.
    #[inline]
    pub fn to_radians(self) -> Self {
        self * Self::RAD_PER_DEG
    }
}

// ============================================================================
// Tests
// ============================================================================
