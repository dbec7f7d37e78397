// ============================================================================
// Vector Module
// 2D and 3D fixed-point vector geometry
// ============================================================================
//
// This module provides:
// - FixedVec2: 2D vector over the Q32.32 scalar
// - FixedVec3: 3D vector (Y-up) with a parallel ground-plane operation
//   family that projects onto (x, z)
//
// Both are plain value types. Apart from the three named in-place mutators
// (`set`, `set_normalize`, and FixedVec3's `add_vec2`) every operation
// returns a new value and leaves its operands untouched, so aliasing the
// same vector on both sides of a binary operation is always safe.

mod vec2;
mod vec3;

pub use vec2::FixedVec2;
pub use vec3::FixedVec3;
