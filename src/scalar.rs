//! Scalar precision abstraction.
//!
//! One generic implementation serves both `f32` and `f64`. The trait extends
//! `num_traits::Float` (zero/one/sqrt/abs/min/max/ceil/floor/trig/comparisons)
//! with the named constants the rotation algebra needs, so no algorithm
//! hard-codes a literal or a precision.

use std::fmt::{Debug, Display};

use num_traits::Float;

use crate::precision;

/// Floating scalar the whole kernel is generic over.
///
/// Implemented for `f32` and `f64`. The tolerance constants differ per
/// precision where the underlying mantissa width warrants it; the fallback
/// thresholds (`SLERP_LINEAR_THRESHOLD`, `POW_LINEAR_THRESHOLD`,
/// `GIMBAL_POLE_LIMIT`) are the same in both precisions.
pub trait Scalar: Float + Debug + Display + Default + 'static {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const HALF_PI: Self;
    /// Multiply by this to convert degrees to radians (pi / 180).
    const RAD_PER_DEG: Self;
    /// Multiply by this to convert radians to degrees (180 / pi).
    const DEG_PER_RAD: Self;
    /// Degeneracy/singularity tolerance. See [`crate::precision`].
    const EPSILON: Self;
    /// Slerp linear-fallback threshold on `1 - |dot|`.
    const SLERP_LINEAR_THRESHOLD: Self;
    /// `pow` linearized-coefficient threshold on `|theta|`.
    const POW_LINEAR_THRESHOLD: Self;
    /// Gimbal-pole detection band limit.
    const GIMBAL_POLE_LIMIT: Self;

    /// Clamp into `[lo, hi]`.
    #[inline]
    fn clamped(self, lo: Self, hi: Self) -> Self {
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = std::f32::consts::PI;
    const HALF_PI: Self = std::f32::consts::FRAC_PI_2;
    const RAD_PER_DEG: Self = std::f32::consts::PI / 180.0;
    const DEG_PER_RAD: Self = 180.0 / std::f32::consts::PI;
    const EPSILON: Self = precision::EPSILON_F32;
    const SLERP_LINEAR_THRESHOLD: Self = precision::SLERP_LINEAR_THRESHOLD as f32;
    const POW_LINEAR_THRESHOLD: Self = precision::POW_LINEAR_THRESHOLD as f32;
    const GIMBAL_POLE_LIMIT: Self = precision::GIMBAL_POLE_LIMIT as f32;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = std::f64::consts::PI;
    const HALF_PI: Self = std::f64::consts::FRAC_PI_2;
    const RAD_PER_DEG: Self = std::f64::consts::PI / 180.0;
    const DEG_PER_RAD: Self = 180.0 / std::f64::consts::PI;
    const EPSILON: Self = precision::EPSILON_F64;
    const SLERP_LINEAR_THRESHOLD: Self = precision::SLERP_LINEAR_THRESHOLD;
    const POW_LINEAR_THRESHOLD: Self = precision::POW_LINEAR_THRESHOLD;
    const GIMBAL_POLE_LIMIT: Self = precision::GIMBAL_POLE_LIMIT;
}
