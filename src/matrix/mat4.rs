//! 4x4 homogeneous transform matrix.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::angle::Radians;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vec3, Vec4};
use crate::{GimbalError, Result};

/// A 4x4 matrix, row-major in memory: `m[row][col]`.
///
/// ```text
/// | m00 m01 m02 m03 |
/// | m10 m11 m12 m13 |
/// | m20 m21 m22 m23 |
/// | m30 m31 m32 m33 |
/// ```
///
/// The TRS family (`from_trs`, `transform`, `untransform`, `translation`,
/// `scale`, `rotation`, `average`) assumes the affine convention: bottom row
/// `[0, 0, 0, 1]`. That assumption is not checked at runtime; a matrix with a
/// projective bottom row goes through [`Matrix4::project`] instead. The
/// general operations (`mul`, `determinant`, `invert`, `transform_vec4`)
/// make no such assumption.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4<T> {
    pub m: [[T; 4]; 4],
}

impl<T: Scalar> Default for Matrix4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Creates a matrix from 16 values in row-major order.
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    pub fn identity() -> Self {
        Self::from_scale(Vec3::one())
    }

    pub fn from_translation(t: Vec3<T>) -> Self {
        let mut out = Self::identity();
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    pub fn from_scale(s: Vec3<T>) -> Self {
        let o = T::ZERO;
        Self::new(
            s.x, o, o, o,
            o, s.y, o, o,
            o, o, s.z, o,
            o, o, o, T::ONE,
        )
    }

    /// Rotation matrix from a quaternion (normalized first), identity
    /// translation.
    pub fn from_rotation(q: Quaternion<T>) -> Self {
        Self::from_trs(Vec3::zero(), q, Vec3::one())
    }

    /// Rotation of `angle` about `axis`, identity translation. The axis is
    /// normalized here; a zero axis propagates NaN.
    pub fn from_axis_angle(axis: Vec3<T>, angle: Radians<T>) -> Self {
        Self::from_rotation(Quaternion::from_axis_angle(axis, angle))
    }

    /// Composes translation, rotation, and scale as `T * R * S`: the rotation
    /// block's columns are scaled, the translation sits in the last column.
    pub fn from_trs(t: Vec3<T>, r: Quaternion<T>, s: Vec3<T>) -> Self {
        let q = r.normalized();
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
        let o = T::ZERO;

        Self::new(
            s.x * (T::ONE - (yy + zz)), s.y * (xy - wz), s.z * (xz + wy), t.x,
            s.x * (xy + wz), s.y * (T::ONE - (xx + zz)), s.z * (yz - wx), t.y,
            s.x * (xz - wy), s.y * (yz + wx), s.z * (T::ONE - (xx + yy)), t.z,
            o, o, o, T::ONE,
        )
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec4<T> {
        Vec4::new(
            self.m[index][0],
            self.m[index][1],
            self.m[index][2],
            self.m[index][3],
        )
    }

    #[inline]
    pub fn col(&self, index: usize) -> Vec4<T> {
        Vec4::new(
            self.m[0][index],
            self.m[1][index],
            self.m[2][index],
            self.m[3][index],
        )
    }

    /// Matrix product `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = [[T::ZERO; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = T::ZERO;
                for k in 0..4 {
                    sum = sum + self.m[i][k] * other.m[k][j];
                }
                *cell = sum;
            }
        }
        Self { m: out }
    }

    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0][0], m[1][0], m[2][0], m[3][0],
            m[0][1], m[1][1], m[2][1], m[3][1],
            m[0][2], m[1][2], m[2][2], m[3][2],
            m[0][3], m[1][3], m[2][3], m[3][3],
        )
    }

    /// Full 4x4 determinant, computed from 2x2 sub-determinant pairs.
    pub fn determinant(&self) -> T {
        let m = &self.m;
        let s0 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let s1 = m[0][0] * m[1][2] - m[0][2] * m[1][0];
        let s2 = m[0][0] * m[1][3] - m[0][3] * m[1][0];
        let s3 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let s4 = m[0][1] * m[1][3] - m[0][3] * m[1][1];
        let s5 = m[0][2] * m[1][3] - m[0][3] * m[1][2];
        let c5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let c4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let c3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let c2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let c1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let c0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Determinant of the upper-left 3x3 block. For an affine matrix this
    /// equals the full determinant and is cheaper.
    pub fn determinant3(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// General inverse via the adjugate; makes no affine assumption. Fails
    /// with [`GimbalError::SingularMatrix`] when `|det|` is below the
    /// degeneracy tolerance; never returns a garbage inverse.
    pub fn invert(&self) -> Result<Self> {
        let m = &self.m;
        let s0 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let s1 = m[0][0] * m[1][2] - m[0][2] * m[1][0];
        let s2 = m[0][0] * m[1][3] - m[0][3] * m[1][0];
        let s3 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let s4 = m[0][1] * m[1][3] - m[0][3] * m[1][1];
        let s5 = m[0][2] * m[1][3] - m[0][3] * m[1][2];
        let c5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let c4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let c3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let c2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let c1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let c0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det.abs() < T::EPSILON {
            return Err(GimbalError::SingularMatrix);
        }
        let k = T::ONE / det;

        Ok(Self::new(
            (m[1][1] * c5 - m[1][2] * c4 + m[1][3] * c3) * k,
            (-m[0][1] * c5 + m[0][2] * c4 - m[0][3] * c3) * k,
            (m[3][1] * s5 - m[3][2] * s4 + m[3][3] * s3) * k,
            (-m[2][1] * s5 + m[2][2] * s4 - m[2][3] * s3) * k,
            (-m[1][0] * c5 + m[1][2] * c2 - m[1][3] * c1) * k,
            (m[0][0] * c5 - m[0][2] * c2 + m[0][3] * c1) * k,
            (-m[3][0] * s5 + m[3][2] * s2 - m[3][3] * s1) * k,
            (m[2][0] * s5 - m[2][2] * s2 + m[2][3] * s1) * k,
            (m[1][0] * c4 - m[1][1] * c2 + m[1][3] * c0) * k,
            (-m[0][0] * c4 + m[0][1] * c2 - m[0][3] * c0) * k,
            (m[3][0] * s4 - m[3][1] * s2 + m[3][3] * s0) * k,
            (-m[2][0] * s4 + m[2][1] * s2 - m[2][3] * s0) * k,
            (-m[1][0] * c3 + m[1][1] * c1 - m[1][2] * c0) * k,
            (m[0][0] * c3 - m[0][1] * c1 + m[0][2] * c0) * k,
            (-m[3][0] * s3 + m[3][1] * s1 - m[3][2] * s0) * k,
            (m[2][0] * s3 - m[2][1] * s1 + m[2][2] * s0) * k,
        ))
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Vec3<T> {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Per-column Euclidean norms of the 3x3 block.
    ///
    /// For a matrix built by [`Matrix4::from_trs`] this recovers the scale
    /// exactly, for any rotation. Always non-negative: a reflection (negative
    /// scale component) cannot be distinguished from its positive counterpart
    /// with a flipped rotation.
    pub fn scale(&self) -> Vec3<T> {
        Vec3::new(
            Vec3::new(self.m[0][0], self.m[1][0], self.m[2][0]).length(),
            Vec3::new(self.m[0][1], self.m[1][1], self.m[2][1]).length(),
            Vec3::new(self.m[0][2], self.m[1][2], self.m[2][2]).length(),
        )
    }

    /// Extracts the rotation as a quaternion: each column of the 3x3 block is
    /// divided by its norm, then the unit block is handed to the trace-based
    /// reconstruction. Exact for TRS matrices with positive scale,
    /// an approximation otherwise. A zero scale column propagates NaN.
    pub fn rotation(&self) -> Quaternion<T> {
        let s = self.scale();
        let m = &self.m;
        Quaternion::from_axes(
            Vec3::new(m[0][0] / s.x, m[0][1] / s.y, m[0][2] / s.z),
            Vec3::new(m[1][0] / s.x, m[1][1] / s.y, m[1][2] / s.z),
            Vec3::new(m[2][0] / s.x, m[2][1] / s.y, m[2][2] / s.z),
        )
    }

    /// Applies rotation and scale, then adds the translation. Affine
    /// assumption: the bottom row is ignored.
    pub fn transform(&self, p: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    /// Full homogeneous transform with perspective division.
    pub fn project(&self, p: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        let inv_w = T::ONE / w;
        Vec3::new(
            (m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3]) * inv_w,
            (m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3]) * inv_w,
            (m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3]) * inv_w,
        )
    }

    /// Applies only the 3x3 block (rotation and scale, no translation).
    pub fn rotate_vec(&self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Applies the transpose of the 3x3 block. Inverts [`Matrix4::rotate_vec`]
    /// only when the block is a pure rotation (no scale or shear); not
    /// checked at runtime.
    pub fn unrotate(&self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    /// Subtracts the translation, then applies the transposed block. Inverts
    /// [`Matrix4::transform`] only when the block is a pure rotation; not
    /// checked at runtime.
    pub fn untransform(&self, p: Vec3<T>) -> Vec3<T> {
        self.unrotate(p - self.translation())
    }

    /// Full 4-component transform, no assumptions.
    pub fn transform_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Blends two transforms: scale and translation are interpolated
    /// linearly, rotation spherically. `weight` is the fraction of `self`
    /// kept; `1 - weight` comes from `other`. Both matrices are assumed
    /// affine TRS.
    pub fn average(&self, other: &Self, weight: T) -> Self {
        let inv = T::ONE - weight;
        Self::from_trs(
            self.translation().scaled(weight) + other.translation().scaled(inv),
            self.rotation().slerp(other.rotation(), inv),
            self.scale().scaled(weight) + other.scale().scaled(inv),
        )
    }

    /// Weighted blend of several transforms: scale and translation are the
    /// weighted sums, rotation is the left-to-right product of per-matrix
    /// fractional rotations (see [`Quaternion::weighted_slerp`]), so the
    /// result depends on input order. Fails eagerly on empty or
    /// length-mismatched slices.
    pub fn average_all(matrices: &[Self], weights: &[T]) -> Result<Self> {
        if matrices.is_empty() {
            return Err(GimbalError::InvalidArgument(
                "average_all requires at least one matrix".into(),
            ));
        }
        if matrices.len() != weights.len() {
            return Err(GimbalError::InvalidArgument(format!(
                "average_all got {} matrices but {} weights",
                matrices.len(),
                weights.len()
            )));
        }
        let mut t = Vec3::zero();
        let mut s = Vec3::zero();
        let mut rotations = Vec::with_capacity(matrices.len());
        for (m, &w) in matrices.iter().zip(weights) {
            t = t + m.translation().scaled(w);
            s = s + m.scale().scaled(w);
            rotations.push(m.rotation());
        }
        let r = Quaternion::weighted_slerp(&rotations, weights)?;
        Ok(Self::from_trs(t, r, s))
    }

    /// Exports the components in column-major order. Wire contract for
    /// column-major consumers; the in-memory layout stays row-major.
    pub fn to_array(&self) -> [T; 16] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0], m[3][0],
            m[0][1], m[1][1], m[2][1], m[3][1],
            m[0][2], m[1][2], m[2][2], m[3][2],
            m[0][3], m[1][3], m[2][3], m[3][3],
        ]
    }

    /// Exports the 4x3 affine block (translation included, bottom row
    /// dropped) in column-major order.
    pub fn to_affine_array(&self) -> [T; 12] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0],
            m[0][1], m[1][1], m[2][1],
            m[0][2], m[1][2], m[2][2],
            m[0][3], m[1][3], m[2][3],
        ]
    }

    /// Builds a matrix from a column-major array, the inverse of
    /// [`Matrix4::to_array`].
    pub fn from_col_array(a: &[T; 16]) -> Self {
        Self::new(
            a[0], a[4], a[8], a[12],
            a[1], a[5], a[9], a[13],
            a[2], a[6], a[10], a[14],
            a[3], a[7], a[11], a[15],
        )
    }

    /// True if every component differs by at most `tolerance`.
    pub fn is_equal(&self, other: &Self, tolerance: T) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (self.m[i][j] - other.m[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar> Mul for Matrix4<T> {
    type Output = Matrix4<T>;

    fn mul(self, other: Self) -> Self {
        Matrix4::mul(&self, &other)
    }
}

impl<T: Scalar> Mul<Vec4<T>> for Matrix4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        self.transform_vec4(v)
    }
}
