//! General 3x3 matrix.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::angle::Radians;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vec3;
use crate::{GimbalError, Result};

/// A 3x3 matrix, row-major in memory: `m[row][col]`.
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// | m20 m21 m22 |
/// ```
///
/// No orthonormality invariant is stored: the rotation factories produce
/// rotation matrices, but arbitrary component construction is legal and the
/// rotation-extraction methods then return approximations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3<T> {
    pub m: [[T; 3]; 3],
}

impl<T: Scalar> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Creates a matrix from 9 values in row-major order.
    pub fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self {
            m: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    pub fn identity() -> Self {
        Self::from_scale(Vec3::one())
    }

    pub fn from_rows(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::new(c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z)
    }

    pub fn from_scale(s: Vec3<T>) -> Self {
        let o = T::ZERO;
        Self::new(s.x, o, o, o, s.y, o, o, o, s.z)
    }

    /// Rotation matrix from a quaternion, via the standard outer-product
    /// expansion. The quaternion is normalized first.
    pub fn from_rotation(q: Quaternion<T>) -> Self {
        let q = q.normalized();
        let xs = q.x * T::TWO;
        let ys = q.y * T::TWO;
        let zs = q.z * T::TWO;
        let wx = q.w * xs;
        let wy = q.w * ys;
        let wz = q.w * zs;
        let xx = q.x * xs;
        let xy = q.x * ys;
        let xz = q.x * zs;
        let yy = q.y * ys;
        let yz = q.y * zs;
        let zz = q.z * zs;

        Self::new(
            T::ONE - (yy + zz), xy - wz, xz + wy,
            xy + wz, T::ONE - (xx + zz), yz - wx,
            xz - wy, yz + wx, T::ONE - (xx + yy),
        )
    }

    /// Rotation of `angle` about `axis` (Rodrigues' formula). The axis is
    /// normalized here; a zero axis propagates NaN.
    pub fn from_axis_angle(axis: Vec3<T>, angle: Radians<T>) -> Self {
        let a = axis.normalized();
        let c = angle.cos();
        let s = angle.sin();
        let t = T::ONE - c;
        let (x, y, z) = (a.x, a.y, a.z);

        Self::new(
            t * x * x + c, t * x * y - s * z, t * x * z + s * y,
            t * x * y + s * z, t * y * y + c, t * y * z - s * x,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c,
        )
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec3<T> {
        Vec3::new(self.m[index][0], self.m[index][1], self.m[index][2])
    }

    #[inline]
    pub fn col(&self, index: usize) -> Vec3<T> {
        Vec3::new(self.m[0][index], self.m[1][index], self.m[2][index])
    }

    /// Matrix product `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = [[T::ZERO; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = T::ZERO;
                for k in 0..3 {
                    sum = sum + self.m[i][k] * other.m[k][j];
                }
                *cell = sum;
            }
        }
        Self { m: out }
    }

    /// Applies the matrix to a column vector.
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    pub fn transposed(&self) -> Self {
        Self::new(
            self.m[0][0], self.m[1][0], self.m[2][0],
            self.m[0][1], self.m[1][1], self.m[2][1],
            self.m[0][2], self.m[1][2], self.m[2][2],
        )
    }

    #[inline]
    pub fn trace(&self) -> T {
        self.m[0][0] + self.m[1][1] + self.m[2][2]
    }

    /// Full cofactor expansion.
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// General inverse via the adjugate. Fails with
    /// [`GimbalError::SingularMatrix`] when `|det|` is below the degeneracy
    /// tolerance; never returns a garbage inverse.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < T::EPSILON {
            return Err(GimbalError::SingularMatrix);
        }
        let m = &self.m;
        let inv_det = T::ONE / det;

        Ok(Self::new(
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ))
    }

    /// Extracts the rotation as a quaternion. Exact for pure rotation
    /// matrices, an approximation otherwise.
    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::from_axes(self.row(0), self.row(1), self.row(2))
    }

    /// Exports the components in column-major order. Wire contract for
    /// column-major consumers; the in-memory layout stays row-major.
    pub fn to_array(&self) -> [T; 9] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0],
            m[0][1], m[1][1], m[2][1],
            m[0][2], m[1][2], m[2][2],
        ]
    }

    /// Builds a matrix from a column-major array, the inverse of
    /// [`Matrix3::to_array`].
    pub fn from_col_array(a: &[T; 9]) -> Self {
        Self::new(a[0], a[3], a[6], a[1], a[4], a[7], a[2], a[5], a[8])
    }

    /// True if every component differs by at most `tolerance`.
    pub fn is_equal(&self, other: &Self, tolerance: T) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, other: Self) -> Self {
        Matrix3::mul(&self, &other)
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Matrix3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        self.transform(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{degrees, radians};

    const TOL: f64 = 1e-10;

    #[test]
    fn test_identity_transform() {
        let v = Vec3::new(3.0_f64, 4.0, 5.0);
        assert!(Matrix3::identity().transform(v).is_equal(v, TOL));
    }

    #[test]
    fn test_from_rotation_matches_quaternion() {
        let q = Quaternion::from_euler_angles(radians(0.4_f64), radians(-0.7), radians(1.3));
        let m = Matrix3::from_rotation(q);
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert!(m.transform(v).is_equal(q.rotate(v), 1e-9));
    }

    #[test]
    fn test_from_axis_angle_matches_quaternion() {
        let axis = Vec3::new(1.0_f64, 2.0, -1.0);
        let m = Matrix3::from_axis_angle(axis, degrees(47.0));
        let q = Quaternion::from_axis_angle(axis, degrees(47.0));
        let v = Vec3::new(-3.0, 0.5, 2.0);
        assert!(m.transform(v).is_equal(q.rotate(v), 1e-9));
    }

    #[test]
    fn test_quaternion_round_trip() {
        let q = Quaternion::from_euler_angles(radians(2.0_f64), radians(0.4), radians(-0.2));
        let back = Matrix3::from_rotation(q).to_quaternion();
        assert!(back.is_same_rotation(q, 1e-9));
    }

    #[test]
    fn test_determinant_of_rotation_is_one() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0_f64, 1.0, 1.0), radians(1.0));
        assert!((Matrix3::from_rotation(q).determinant() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_invert_round_trip() {
        let m = Matrix3::new(2.0_f64, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0);
        let inv = m.invert().unwrap();
        assert!(Matrix3::mul(&m, &inv).is_equal(&Matrix3::identity(), TOL));
    }

    #[test]
    fn test_singular_matrix_detected() {
        // Two identical rows, determinant exactly zero.
        let m = Matrix3::new(1.0_f64, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 1.0, 4.0);
        assert!(m.determinant().abs() < TOL);
        assert!(matches!(m.invert(), Err(GimbalError::SingularMatrix)));
    }

    #[test]
    fn test_transpose_of_rotation_is_inverse() {
        let q = Quaternion::from_axis_angle(Vec3::<f64>::unit_y(), radians(0.9));
        let m = Matrix3::from_rotation(q);
        assert!(Matrix3::mul(&m, &m.transposed()).is_equal(&Matrix3::identity(), TOL));
    }

    #[test]
    fn test_column_major_export() {
        let m = Matrix3::new(1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        // Columns concatenated, not rows.
        assert_eq!(m.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert!(Matrix3::from_col_array(&m.to_array()).is_equal(&m, 0.0));
    }

    #[test]
    fn test_rows_and_cols() {
        let m = Matrix3::new(1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert!(m.row(1).is_equal(Vec3::new(4.0, 5.0, 6.0), 0.0));
        assert!(m.col(2).is_equal(Vec3::new(3.0, 6.0, 9.0), 0.0));
        assert_eq!(m.trace(), 15.0);
    }
}
