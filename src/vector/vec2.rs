// ============================================================================
// FixedVec2
// 2D vector over the Q32.32 scalar
// ============================================================================

use crate::numeric::{Fixed, NumericResult};
use crate::vector::FixedVec3;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D fixed-point vector.
///
/// Component arithmetic follows the scalar's wrapping, unchecked policy.
/// Equality is exact per-component raw comparison, never tolerance-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedVec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedVec2 {
    /// The zero vector
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_int(x: i32, y: i32) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y))
    }

    /// Convert a pair of decimals, both at the same precision. Fails like
    /// [`Fixed::from_decimal`] if either component does.
    pub fn from_decimal(x: f64, y: f64, precision: u32) -> NumericResult<Self> {
        Ok(Self::new(
            Fixed::from_decimal(x, precision)?,
            Fixed::from_decimal(y, precision)?,
        ))
    }

    /// Project a 3D vector onto the ground plane: `(x, z)`, height dropped.
    #[inline]
    pub const fn from_ground(v: FixedVec3) -> Self {
        Self::new(v.x, v.z)
    }

    /// The 90-degree counterclockwise perpendicular, `(-y, x)`.
    #[inline]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Ground-plane perpendicular of a 3D vector, `(-z, x)`.
    #[inline]
    pub fn normal_from_ground(v: FixedVec3) -> Self {
        Self::new(-v.z, v.x)
    }

    // ========================================================================
    // Products and Magnitudes
    // ========================================================================

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y
    }

    /// Scalar pseudo-cross, `x1*y2 - y1*x2`. Positive when `other` lies
    /// counterclockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> Fixed {
        self.x * other.y - self.y * other.x
    }

    /// Squared magnitude, `dot(v, v)`. May wrap for component magnitudes
    /// beyond ~46340 whole units; `magnitude` still reads the wrapped bits
    /// correctly.
    #[inline]
    pub fn sqr_magnitude(self) -> Fixed {
        self.dot(self)
    }

    /// Euclidean length, via the extended square root so a wrapped sum of
    /// squares still resolves.
    #[inline]
    pub fn magnitude(self) -> Fixed {
        self.sqr_magnitude().sqrt_extended()
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn sqr_distance(self, other: Self) -> Fixed {
        (other - self).sqr_magnitude()
    }

    /// Distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> Fixed {
        (other - self).magnitude()
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero. Never divides by zero, never fails.
    pub fn normalize(self) -> Self {
        let m = self.magnitude();
        if m > Fixed::ZERO {
            self * m.recip()
        } else {
            Self::ZERO
        }
    }

    /// In-place [`normalize`](Self::normalize).
    #[inline]
    pub fn set_normalize(&mut self) {
        *self = self.normalize();
    }

    /// In-place component overwrite.
    #[inline]
    pub fn set(&mut self, x: Fixed, y: Fixed) {
        self.x = x;
        self.y = y;
    }

    // ========================================================================
    // Blending and Extrema
    // ========================================================================

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, to: Self, t: Fixed) -> Self {
        self.lerp_unclamped(to, t.clamp(Fixed::ZERO, Fixed::ONE))
    }

    /// Linear interpolation without clamping; `t` outside `[0, 1]`
    /// extrapolates.
    #[inline]
    pub fn lerp_unclamped(self, to: Self, t: Fixed) -> Self {
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Hadamard (component-wise) product.
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise minimum over a sequence, seeded from the largest
    /// representable components. An empty sequence yields `(MAX, MAX)`.
    pub fn min<I: IntoIterator<Item = Self>>(vectors: I) -> Self {
        vectors.into_iter().fold(
            Self::new(Fixed::MAX, Fixed::MAX),
            |acc, v| Self::new(acc.x.min(v.x), acc.y.min(v.y)),
        )
    }

    /// Component-wise maximum over a sequence, seeded from the smallest
    /// representable components. An empty sequence yields `(MIN, MIN)`.
    pub fn max<I: IntoIterator<Item = Self>>(vectors: I) -> Self {
        vectors.into_iter().fold(
            Self::new(Fixed::MIN, Fixed::MIN),
            |acc, v| Self::new(acc.x.max(v.x), acc.y.max(v.y)),
        )
    }

    /// Unsigned angle between two directions, in degrees in `[0, 180]`.
    ///
    /// Both operands are normalized as copies, the dot is clamped to
    /// `[-1, 1]` so rounding can never push it outside arccosine's domain,
    /// and the result converts through the exact degree factor.
    pub fn angle_degrees(self, other: Self) -> Fixed {
        let d = self
            .normalize()
            .dot(other.normalize())
            .clamp(Fixed::NEG_ONE, Fixed::ONE);
        d.acos().to_degrees()
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for FixedVec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FixedVec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for FixedVec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

/// Broadcast add: the scalar joins both components.
impl Add<Fixed> for FixedVec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

/// Broadcast subtract.
impl Sub<Fixed> for FixedVec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul<Fixed> for FixedVec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Fixed> for FixedVec2 {
    type Output = Self;

    /// Scalar divide, one reciprocal shared by both components.
    #[inline]
    fn div(self, rhs: Fixed) -> Self::Output {
        self * rhs.recip()
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// ============================================================================
// Tests
// ============================================================================
