//! Tolerance constants for the rotation and transform algebra.
//!
//! Every numeric threshold in the crate lives here under a name. The values are
//! not interchangeable: several of them are deliberately different orders of
//! magnitude, and algorithms depend on those exact values. Do not unify them.

/// Degeneracy and singularity tolerance, single precision.
///
/// Governs singular-matrix detection, axis degeneracy in
/// `Quaternion::from_rotation_between` and `Quaternion::axis_angle`, the
/// zero-projection test in `Quaternion::angle_around`, and `try_normalized`.
pub const EPSILON_F32: f32 = 1.0e-6;

/// Degeneracy and singularity tolerance, double precision.
///
/// Same role as [`EPSILON_F32`], scaled to f64's extra mantissa bits.
pub const EPSILON_F64: f64 = 1.0e-10;

/// Slerp's linear-blend fallback threshold on `1 - |dot|`.
///
/// Below this the interpolation angle is too small for the `1/sin(theta)`
/// weights and slerp degrades to a component lerp. Shared by both precisions
/// and distinct from the general epsilon: tightening it to `EPSILON` would
/// push the exact path into the `0/0` region it exists to avoid.
pub const SLERP_LINEAR_THRESHOLD: f64 = 1.0e-4;

/// `Quaternion::pow`'s linearized-coefficient threshold on `|theta|`.
///
/// Below this the `sin(alpha*theta)/sin(theta)` ratio is replaced by its
/// limit `alpha`. Shared by both precisions.
pub const POW_LINEAR_THRESHOLD: f64 = 1.0e-3;

/// Gimbal-pole detection threshold on the `y*x + z*w` term.
///
/// A heuristic band around the exact singularity at 0.5, not an epsilon
/// comparison. Widening or narrowing it changes which orientations take the
/// pole-specific Euler closed forms, so the value is load-bearing.
pub const GIMBAL_POLE_LIMIT: f64 = 0.499;
