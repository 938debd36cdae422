//! 4D vector, used for homogeneous coordinates.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec3;
use crate::{GimbalError, Result};

/// A 4D vector. The `w` component distinguishes positions (1) from
/// directions (0) under a homogeneous transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Vec4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
    }

    /// A position: `w = 1`.
    #[inline]
    pub fn from_point(p: Vec3<T>) -> Self {
        Self::new(p.x, p.y, p.z, T::ONE)
    }

    /// A direction: `w = 0`.
    #[inline]
    pub fn from_direction(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ZERO)
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncated(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length2(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length2().sqrt()
    }

    #[inline]
    pub fn scaled(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Divides by the length. A zero vector propagates NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Checked normalization: `None` below the degeneracy tolerance.
    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        if len < T::EPSILON {
            None
        } else {
            Some(self / len)
        }
    }

    /// True if every component differs by at most `tolerance`.
    #[inline]
    pub fn is_equal(self, other: Self, tolerance: T) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
            && (self.w - other.w).abs() <= tolerance
    }

    /// Checked component access (0 = x, 1 = y, 2 = z, 3 = w).
    pub fn component(self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(GimbalError::OutOfBounds { index, dim: 4 }),
        }
    }
}

impl<T: Scalar> Add for Vec4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: Scalar> Sub for Vec4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: Scalar> Neg for Vec4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, s: T) -> Self {
        self.scaled(s)
    }
}

impl<T: Scalar> Div<T> for Vec4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl<T: Scalar> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index {} out of range [0,3]", index),
        }
    }
}
