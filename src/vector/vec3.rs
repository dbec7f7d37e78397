// ============================================================================
// FixedVec3
// 3D vector (Y-up) with a ground-plane operation family
// ============================================================================

use crate::numeric::{Fixed, NumericResult};
use crate::vector::FixedVec2;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 3D fixed-point vector under the Y-up convention: `y` is height, and the
/// ground plane is spanned by `x` and `z`.
///
/// The `vec2_*` family computes 2D results from the ground-plane projection
/// without building an intermediate [`FixedVec2`], which is how pathing and
/// separation code usually wants distances: horizontal only, height ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedVec3 {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

impl FixedVec3 {
    /// The zero vector
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
        z: Fixed::ZERO,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_int(x: i32, y: i32, z: i32) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y), Fixed::from_int(z))
    }

    /// Convert a triple of decimals, all at the same precision. Fails like
    /// [`Fixed::from_decimal`] if any component does.
    pub fn from_decimal(x: f64, y: f64, z: f64, precision: u32) -> NumericResult<Self> {
        Ok(Self::new(
            Fixed::from_decimal(x, precision)?,
            Fixed::from_decimal(y, precision)?,
            Fixed::from_decimal(z, precision)?,
        ))
    }

    /// Lift a 2D vector onto the ground plane at height zero.
    #[inline]
    pub const fn from_ground(v: FixedVec2) -> Self {
        Self::new(v.x, Fixed::ZERO, v.y)
    }

    /// Copy with the height component forced to zero.
    #[inline]
    pub const fn clone_zero_y(self) -> Self {
        Self::new(self.x, Fixed::ZERO, self.z)
    }

    /// The 90-degree ground-plane perpendicular, `(-z, 0, x)`: rotates the
    /// `(x, z)` projection a quarter turn and drops the height.
    #[inline]
    pub fn ground_normal(self) -> Self {
        Self::new(-self.z, Fixed::ZERO, self.x)
    }

    // ========================================================================
    // Products and Magnitudes
    // ========================================================================

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, standard determinant expansion.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared magnitude, `dot(v, v)`.
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
    // Ground-Plane Family
    // ========================================================================

    /// Ground-plane dot, `x1*x2 + z1*z2`.
    #[inline]
    pub fn vec2_dot(self, other: Self) -> Fixed {
        self.x * other.x + self.z * other.z
    }

    /// Ground-plane pseudo-cross, `x1*z2 - z1*x2`.
    #[inline]
    pub fn vec2_cross(self, other: Self) -> Fixed {
        self.x * other.z - self.z * other.x
    }

    /// Ground-plane squared magnitude, height ignored.
    #[inline]
    pub fn vec2_sqr_magnitude(self) -> Fixed {
        self.vec2_dot(self)
    }

    /// Ground-plane magnitude, height ignored.
    #[inline]
    pub fn vec2_magnitude(self) -> Fixed {
        self.vec2_sqr_magnitude().sqrt_extended()
    }

    /// Ground-plane squared distance to `other`.
    #[inline]
    pub fn vec2_sqr_distance(self, other: Self) -> Fixed {
        (other - self).vec2_sqr_magnitude()
    }

    /// Ground-plane distance to `other`, height ignored.
    #[inline]
    pub fn vec2_distance(self, other: Self) -> Fixed {
        (other - self).vec2_magnitude()
    }

    /// Add a 2D vector into the ground-plane components in place: `v.x`
    /// into `x`, `v.y` into `z`. The height is untouched. This is the one
    /// mutator in the surface that takes a different vector type than its
    /// receiver; the mapping follows the ground-plane convention.
    #[inline]
    pub fn add_vec2(&mut self, v: FixedVec2) {
        self.x = self.x + v.x;
        self.z = self.z + v.y;
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
    pub fn set(&mut self, x: Fixed, y: Fixed, z: Fixed) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    // ========================================================================
    // Blending and Extrema
    // ========================================================================

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, to: Self, t: Fixed) -> Self {
        self.lerp_unclamped(to, t.clamp(Fixed::ZERO, Fixed::ONE))
    }

    /// Linear interpolation without clamping.
    #[inline]
    pub fn lerp_unclamped(self, to: Self, t: Fixed) -> Self {
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Hadamard (component-wise) product.
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise minimum over a sequence, seeded from the largest
    /// representable components.
    pub fn min<I: IntoIterator<Item = Self>>(vectors: I) -> Self {
        vectors.into_iter().fold(
            Self::new(Fixed::MAX, Fixed::MAX, Fixed::MAX),
            |acc, v| Self::new(acc.x.min(v.x), acc.y.min(v.y), acc.z.min(v.z)),
        )
    }

    /// Component-wise maximum over a sequence, seeded from the smallest
    /// representable components.
    pub fn max<I: IntoIterator<Item = Self>>(vectors: I) -> Self {
        vectors.into_iter().fold(
            Self::new(Fixed::MIN, Fixed::MIN, Fixed::MIN),
            |acc, v| Self::new(acc.x.max(v.x), acc.y.max(v.y), acc.z.max(v.z)),
        )
    }

    /// Unsigned angle between two directions, in degrees in `[0, 180]`.
    /// Same contract as [`FixedVec2::angle_degrees`].
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

impl Add for FixedVec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for FixedVec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for FixedVec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Broadcast add: the scalar joins all three components.
impl Add<Fixed> for FixedVec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

/// Broadcast subtract.
impl Sub<Fixed> for FixedVec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<Fixed> for FixedVec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Fixed) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<Fixed> for FixedVec3 {
    type Output = Self;

    /// Scalar divide, one reciprocal shared by all components.
    #[inline]
    fn div(self, rhs: Fixed) -> Self::Output {
        self * rhs.recip()
    }
}

impl fmt::Display for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

// ============================================================================
// Tests
// ============================================================================
