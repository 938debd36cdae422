//! Angle type tagged with its unit.
//!
//! Everything in the crate is radians-first; degrees exist only as a
//! conversion at the boundary.

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// An angle in radians.
///
/// A tagged scalar: wrapping the raw value keeps degree/radian mixups out of
/// call sites without costing anything at runtime. Finiteness is not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians<T>(pub T);

/// Creates an angle from a value in radians.
#[inline]
pub fn radians<T: Scalar>(value: T) -> Radians<T> {
    Radians(value)
}

/// Creates an angle from a value in degrees.
#[inline]
pub fn degrees<T: Scalar>(value: T) -> Radians<T> {
    Radians(value * T::RAD_PER_DEG)
}

impl<T: Scalar> Radians<T> {
    /// The zero angle.
    #[inline]
    pub fn zero() -> Self {
        Radians(T::ZERO)
    }

    /// A half turn (pi radians).
    #[inline]
    pub fn half_turn() -> Self {
        Radians(T::PI)
    }

    /// Returns the raw value in radians.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Returns the value converted to degrees.
    #[inline]
    pub fn to_degrees(self) -> T {
        self.0 * T::DEG_PER_RAD
    }

    #[inline]
    pub fn sin(self) -> T {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> T {
        self.0.cos()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Radians(self.0.abs())
    }

    /// True if the two angles differ by at most `tolerance` radians.
    #[inline]
    pub fn is_equal(self, other: Self, tolerance: T) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl<T: Scalar> Add for Radians<T> {
    type Output = Radians<T>;

    #[inline]
    fn add(self, other: Self) -> Self {
        Radians(self.0 + other.0)
    }
}

impl<T: Scalar> Sub for Radians<T> {
    type Output = Radians<T>;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Radians(self.0 - other.0)
    }
}

impl<T: Scalar> Neg for Radians<T> {
    type Output = Radians<T>;

    #[inline]
    fn neg(self) -> Self {
        Radians(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Radians<T> {
    type Output = Radians<T>;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Radians(self.0 * scalar)
    }
}

impl<T: Scalar> Div<T> for Radians<T> {
    type Output = Radians<T>;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Radians(self.0 / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let a = degrees(180.0_f64);
        assert!((a.value() - std::f64::consts::PI).abs() < 1e-12);
        assert!((a.to_degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_radians_round_trip() {
        let a = radians(1.25_f32);
        assert!((degrees(a.to_degrees()).value() - 1.25).abs() < 1e-5);
    }

    #[test]
    fn test_arithmetic() {
        let a = radians(1.0_f64) + radians(0.5);
        assert_eq!(a.value(), 1.5);
        assert_eq!((a - radians(0.5)).value(), 1.0);
        assert_eq!((-radians(2.0_f64)).value(), -2.0);
        assert_eq!((radians(2.0_f64) * 0.5).value(), 1.0);
        assert_eq!((radians(2.0_f64) / 2.0).value(), 1.0);
    }

    #[test]
    fn test_ordering() {
        assert!(radians(0.5_f64) < radians(1.0));
    }
}
