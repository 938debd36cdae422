//! Circle in the plane.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec2;

/// A circle defined by center and radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle<T> {
    pub center: Vec2<T>,
    pub radius: T,
}

impl<T: Scalar> Circle<T> {
    #[inline]
    pub fn new(center: Vec2<T>, radius: T) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> T {
        T::PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> T {
        T::TWO * T::PI * self.radius
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec2<T>) -> bool {
        self.center.distance2(p) <= self.radius * self.radius
    }

    /// True if the two circles share any point.
    pub fn overlaps(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        self.center.distance2(other.center) <= r * r
    }
}
