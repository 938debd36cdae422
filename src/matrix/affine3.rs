//! 2D affine transform matrix.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::angle::Radians;
use crate::matrix::Matrix3;
use crate::scalar::Scalar;
use crate::vector::Vec2;
use crate::{GimbalError, Result};

/// A 3x3 matrix restricted to 2D affine transforms: the bottom row is always
/// exactly `[0, 0, 1]`.
///
/// ```text
/// | m00 m01 tx |
/// | m10 m11 ty |
/// |  0   0   1 |
/// ```
///
/// Keeping this a separate type from [`Matrix3`] makes the cheap affine
/// arithmetic (2x2 determinant, closed-form inverse, short products)
/// unavailable on matrices that do not satisfy the bottom-row assumption.
/// The field is private so the invariant cannot be broken by construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix3<T> {
    m: [[T; 3]; 3],
}

impl<T: Scalar> Default for AffineMatrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> AffineMatrix3<T> {
    fn from_parts(m00: T, m01: T, tx: T, m10: T, m11: T, ty: T) -> Self {
        Self {
            m: [
                [m00, m01, tx],
                [m10, m11, ty],
                [T::ZERO, T::ZERO, T::ONE],
            ],
        }
    }

    pub fn identity() -> Self {
        Self::from_parts(T::ONE, T::ZERO, T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    pub fn from_translation(t: Vec2<T>) -> Self {
        Self::from_parts(T::ONE, T::ZERO, t.x, T::ZERO, T::ONE, t.y)
    }

    /// Counter-clockwise rotation about the origin.
    pub fn from_rotation(angle: Radians<T>) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::from_parts(c, -s, T::ZERO, s, c, T::ZERO)
    }

    pub fn from_scale(s: Vec2<T>) -> Self {
        Self::from_parts(s.x, T::ZERO, T::ZERO, T::ZERO, s.y, T::ZERO)
    }

    /// Translation, rotation, and scale composed as `T * R * S`.
    pub fn from_trs(t: Vec2<T>, angle: Radians<T>, s: Vec2<T>) -> Self {
        let c = angle.cos();
        let sn = angle.sin();
        Self::from_parts(c * s.x, -sn * s.y, t.x, sn * s.x, c * s.y, t.y)
    }

    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> T {
        self.m[row][col]
    }

    /// Affine product `self * other`: only the upper 2x3 block is computed;
    /// the bottom row stays `[0, 0, 1]` by construction.
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self::from_parts(
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
            a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
            a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
        )
    }

    /// Applies the transform to a position (translation included).
    pub fn transform_point(&self, p: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    /// Applies the linear part only (no translation).
    pub fn transform_vector(&self, v: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    /// Determinant of the upper-left 2x2 block, which is the determinant of
    /// the whole matrix given the fixed bottom row.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Closed-form affine inverse, cheaper than the general adjugate. Fails
    /// with [`GimbalError::SingularMatrix`] when `|det|` is below the
    /// degeneracy tolerance.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < T::EPSILON {
            return Err(GimbalError::SingularMatrix);
        }
        let inv_det = T::ONE / det;
        let m = &self.m;
        Ok(Self::from_parts(
            m[1][1] * inv_det,
            -m[0][1] * inv_det,
            (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * inv_det,
            -m[1][0] * inv_det,
            m[0][0] * inv_det,
            (m[1][0] * m[0][2] - m[0][0] * m[1][2]) * inv_det,
        ))
    }

    #[inline]
    pub fn translation(&self) -> Vec2<T> {
        Vec2::new(self.m[0][2], self.m[1][2])
    }

    /// The rotation angle of the linear part, assuming a rotation times a
    /// positive scale.
    #[inline]
    pub fn rotation(&self) -> Radians<T> {
        Radians(self.m[1][0].atan2(self.m[0][0]))
    }

    /// Per-column norms of the linear part. Non-negative by construction.
    pub fn scale(&self) -> Vec2<T> {
        Vec2::new(
            Vec2::new(self.m[0][0], self.m[1][0]).length(),
            Vec2::new(self.m[0][1], self.m[1][1]).length(),
        )
    }

    /// Widens into a general [`Matrix3`].
    pub fn to_general(&self) -> Matrix3<T> {
        Matrix3 { m: self.m }
    }

    /// Exports all 9 components in column-major order, bottom row emitted as
    /// exact constants.
    pub fn to_array(&self) -> [T; 9] {
        let m = &self.m;
        [
            m[0][0], m[1][0], T::ZERO,
            m[0][1], m[1][1], T::ZERO,
            m[0][2], m[1][2], T::ONE,
        ]
    }

    /// Exports the 2x3 affine block in column-major order.
    pub fn to_affine_array(&self) -> [T; 6] {
        let m = &self.m;
        [m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2]]
    }

    /// True if every component differs by at most `tolerance`.
    pub fn is_equal(&self, other: &Self, tolerance: T) -> bool {
        for i in 0..2 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar> Mul for AffineMatrix3<T> {
    type Output = AffineMatrix3<T>;

    fn mul(self, other: Self) -> Self {
        AffineMatrix3::mul(&self, &other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{degrees, radians};

    const TOL: f64 = 1e-10;

    #[test]
    fn test_translate_point_not_vector() {
        let t = AffineMatrix3::from_translation(Vec2::new(3.0_f64, -1.0));
        let p = Vec2::new(1.0, 1.0);
        assert!(t.transform_point(p).is_equal(Vec2::new(4.0, 0.0), TOL));
        assert!(t.transform_vector(p).is_equal(p, TOL));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = AffineMatrix3::from_rotation(degrees(90.0_f64));
        let p = r.transform_point(Vec2::unit_x());
        assert!(p.is_equal(Vec2::unit_y(), TOL));
    }

    #[test]
    fn test_compose_translate_after_rotate() {
        let r = AffineMatrix3::from_rotation(degrees(90.0_f64));
        let t = AffineMatrix3::from_translation(Vec2::new(5.0, 0.0));
        // t * r rotates first, then translates.
        let p = AffineMatrix3::mul(&t, &r).transform_point(Vec2::unit_x());
        assert!(p.is_equal(Vec2::new(5.0, 1.0), TOL));
    }

    #[test]
    fn test_trs_decompose() {
        let m = AffineMatrix3::from_trs(
            Vec2::new(2.0_f64, -3.0),
            radians(0.7),
            Vec2::new(1.5, 0.25),
        );
        assert!(m.translation().is_equal(Vec2::new(2.0, -3.0), TOL));
        assert!((m.rotation().value() - 0.7).abs() < TOL);
        assert!(m.scale().is_equal(Vec2::new(1.5, 0.25), TOL));
    }

    #[test]
    fn test_invert_round_trip() {
        let m = AffineMatrix3::from_trs(
            Vec2::new(1.0_f64, 2.0),
            radians(-0.4),
            Vec2::new(2.0, 3.0),
        );
        let inv = m.invert().unwrap();
        assert!(AffineMatrix3::mul(&m, &inv).is_equal(&AffineMatrix3::identity(), TOL));
        let p = Vec2::new(0.3, -0.9);
        assert!(inv.transform_point(m.transform_point(p)).is_equal(p, TOL));
    }

    #[test]
    fn test_singular_scale_detected() {
        let m = AffineMatrix3::from_scale(Vec2::new(1.0_f64, 0.0));
        assert!(matches!(m.invert(), Err(GimbalError::SingularMatrix)));
    }

    #[test]
    fn test_column_major_exports() {
        let m = AffineMatrix3::from_parts(1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.to_array(), [1.0, 4.0, 0.0, 2.0, 5.0, 0.0, 3.0, 6.0, 1.0]);
        assert_eq!(m.to_affine_array(), [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_to_general_agrees() {
        let m = AffineMatrix3::from_trs(
            Vec2::new(1.0_f64, 1.0),
            radians(0.3),
            Vec2::new(2.0, 2.0),
        );
        let g = m.to_general();
        let p = Vec2::new(0.5, -0.5);
        let gp = g.transform(crate::vector::Vec3::new(p.x, p.y, 1.0));
        assert!(m.transform_point(p).is_equal(Vec2::new(gp.x, gp.y), TOL));
        assert!((g.determinant() - m.determinant()).abs() < TOL);
    }
}
