//! Axis-aligned cuboid.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec3;

/// An axis-aligned box anchored at its minimum corner, with non-negative
/// extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cuboid<T> {
    pub min: Vec3<T>,
    pub size: Vec3<T>,
}

impl<T: Scalar> Cuboid<T> {
    #[inline]
    pub fn new(min: Vec3<T>, size: Vec3<T>) -> Self {
        Self { min, size }
    }

    /// Builds the box spanning two arbitrary corners.
    pub fn from_corners(a: Vec3<T>, b: Vec3<T>) -> Self {
        let min = Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        Self::new(min, max - min)
    }

    #[inline]
    pub fn max(&self) -> Vec3<T> {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec3<T> {
        self.min + self.size.scaled(T::HALF)
    }

    pub fn volume(&self) -> T {
        self.size.x * self.size.y * self.size.z
    }

    pub fn surface_area(&self) -> T {
        let s = self.size;
        T::TWO * (s.x * s.y + s.y * s.z + s.z * s.x)
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec3<T>) -> bool {
        let max = self.max();
        p.x >= self.min.x
            && p.x <= max.x
            && p.y >= self.min.y
            && p.y <= max.y
            && p.z >= self.min.z
            && p.z <= max.z
    }

    /// True if the two boxes share any point.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x <= b_max.x
            && a_max.x >= other.min.x
            && self.min.y <= b_max.y
            && a_max.y >= other.min.y
            && self.min.z <= b_max.z
            && a_max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let c = Cuboid::from_corners(Vec3::new(2.0_f64, -1.0, 5.0), Vec3::new(0.0, 3.0, 4.0));
        assert!(c.min.is_equal(Vec3::new(0.0, -1.0, 4.0), 1e-12));
        assert!(c.max().is_equal(Vec3::new(2.0, 3.0, 5.0), 1e-12));
    }

    #[test]
    fn test_contains_and_overlaps() {
        let a = Cuboid::new(Vec3::<f64>::zero(), Vec3::new(2.0, 2.0, 2.0));
        assert!(a.contains(Vec3::new(1.0, 1.0, 2.0)));
        assert!(!a.contains(Vec3::new(1.0, 1.0, 2.1)));
        let b = Cuboid::new(Vec3::new(1.5, 1.5, 1.5), Vec3::new(1.0, 1.0, 1.0));
        let c = Cuboid::new(Vec3::new(3.0, 3.0, 3.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_measures() {
        let c = Cuboid::new(Vec3::<f64>::zero(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c.volume(), 6.0);
        assert_eq!(c.surface_area(), 22.0);
        assert!(c.center().is_equal(Vec3::new(0.5, 1.0, 1.5), 1e-12));
    }
}
