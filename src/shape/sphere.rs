//! Sphere.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec3;

/// A sphere defined by center and radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sphere<T> {
    pub center: Vec3<T>,
    pub radius: T,
}

impl<T: Scalar> Sphere<T> {
    #[inline]
    pub fn new(center: Vec3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    pub fn volume(&self) -> T {
        // 4/3 * pi * r^3
        let four_thirds = (T::TWO + T::TWO) / (T::ONE + T::TWO);
        four_thirds * T::PI * self.radius * self.radius * self.radius
    }

    pub fn surface_area(&self) -> T {
        (T::TWO + T::TWO) * T::PI * self.radius * self.radius
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec3<T>) -> bool {
        self.center.distance2(p) <= self.radius * self.radius
    }

    /// True if the two spheres share any point.
    pub fn overlaps(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        self.center.distance2(other.center) <= r * r
    }
}
