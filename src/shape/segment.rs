//! Line segment.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec3;

/// A line segment between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment<T> {
    pub a: Vec3<T>,
    pub b: Vec3<T>,
}

impl<T: Scalar> Segment<T> {
    #[inline]
    pub fn new(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length2(&self) -> T {
        self.a.distance2(self.b)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.a.distance(self.b)
    }

    /// Unit direction from `a` to `b`. A degenerate segment propagates NaN.
    #[inline]
    pub fn direction(&self) -> Vec3<T> {
        (self.b - self.a).normalized()
    }

    /// Point at parameter `t`: `a` at 0, `b` at 1, extrapolated outside.
    #[inline]
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.a.lerp(self.b, t)
    }

    /// Distance from `p` to the closest point on the segment (the projection
    /// parameter is clamped to the segment).
    pub fn distance_to(&self, p: Vec3<T>) -> T {
        let ab = self.b - self.a;
        let len2 = ab.length2();
        if len2 < T::EPSILON {
            return self.a.distance(p);
        }
        let t = (p - self.a).dot(ab) / len2;
        self.point_at(t.clamped(T::ZERO, T::ONE)).distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_direction() {
        let s = Segment::new(Vec3::new(1.0_f64, 0.0, 0.0), Vec3::new(4.0, 4.0, 0.0));
        assert_eq!(s.length(), 5.0);
        assert!(s.direction().is_equal(Vec3::new(0.6, 0.8, 0.0), 1e-12));
    }

    #[test]
    fn test_point_at() {
        let s = Segment::new(Vec3::<f64>::zero(), Vec3::new(2.0, 0.0, 0.0));
        assert!(s.point_at(0.5).is_equal(Vec3::new(1.0, 0.0, 0.0), 1e-12));
        assert!(s.point_at(1.5).is_equal(Vec3::new(3.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        let s = Segment::new(Vec3::<f64>::zero(), Vec3::new(2.0, 0.0, 0.0));
        assert!((s.distance_to(Vec3::new(1.0, 3.0, 0.0)) - 3.0).abs() < 1e-12);
        assert!((s.distance_to(Vec3::new(-3.0, 4.0, 0.0)) - 5.0).abs() < 1e-12);
        assert!((s.distance_to(Vec3::new(5.0, 4.0, 0.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let s = Segment::new(Vec3::new(1.0_f64, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!((s.distance_to(Vec3::new(1.0, 1.0, 3.0)) - 2.0).abs() < 1e-12);
    }
}
