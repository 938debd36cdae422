//! Quaternion rotation algebra.
//!
//! A quaternion `(x, y, z, w)` represents `w + xi + yj + zk` and encodes a 3D
//! rotation when its norm is 1. Construction goes through the factories
//! (axis-angle, Euler angles, two vectors, three axes, matrix extraction);
//! the rotation-interpretation methods (`rotate`, `roll`/`pitch`/`yaw`,
//! `angle`, `axis_angle`, `swing_twist`, `angle_around`) assume or enforce
//! unit norm, while the raw algebra (`mul`, `conjugate`, `add`) is valid for
//! any quaternion.
//!
//! Every value is immutable; every operation returns a fresh quaternion.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::angle::Radians;
use crate::matrix::{Matrix3, Matrix4};
use crate::scalar::Scalar;
use crate::vector::Vec3;
use crate::{GimbalError, Result};

/// Which gimbal pole an orientation sits on, if any.
///
/// Derived from the quaternion's `y*x + z*w` term against
/// [`crate::precision::GIMBAL_POLE_LIMIT`]; selects the closed form used for
/// Euler extraction near the +/-90 degree pitch singularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GimbalPole {
    /// Pitch locked at +90 degrees.
    North,
    /// Pitch locked at -90 degrees.
    South,
    /// Away from both poles.
    None,
}

impl GimbalPole {
    /// +1 for north, -1 for south, 0 for none.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            GimbalPole::North => 1,
            GimbalPole::South => -1,
            GimbalPole::None => 0,
        }
    }

    #[inline]
    fn factor<T: Scalar>(self) -> T {
        match self {
            GimbalPole::North => T::ONE,
            GimbalPole::South => -T::ONE,
            GimbalPole::None => T::ZERO,
        }
    }
}

/// A rotation decomposed into a unit axis and an angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle<T> {
    pub axis: Vec3<T>,
    pub angle: Radians<T>,
}

/// A rotation split around a chosen axis: `swing * twist` reconstructs the
/// original. `twist` is the component around the axis, `swing` the remainder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwingTwist<T> {
    pub swing: Quaternion<T>,
    pub twist: Quaternion<T>,
}

/// A quaternion `(x, y, z, w)` = `w + xi + yj + zk`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Rotation of `angle` about `axis`.
    ///
    /// The axis is normalized here, so callers may pass non-unit vectors.
    /// A zero axis yields NaN components; callers pre-validate.
    pub fn from_axis_angle(axis: Vec3<T>, angle: Radians<T>) -> Self {
        let a = axis.normalized();
        let half = angle.value() * T::HALF;
        let s = half.sin();
        Self::new(a.x * s, a.y * s, a.z * s, half.cos())
    }

    /// Rotation from Euler angles, composed y (yaw), then x (pitch), then
    /// z (roll), via the half-angle product expansion. Branch-free.
    pub fn from_euler_angles(yaw: Radians<T>, pitch: Radians<T>, roll: Radians<T>) -> Self {
        let hr = roll.value() * T::HALF;
        let shr = hr.sin();
        let chr = hr.cos();
        let hp = pitch.value() * T::HALF;
        let shp = hp.sin();
        let chp = hp.cos();
        let hy = yaw.value() * T::HALF;
        let shy = hy.sin();
        let chy = hy.cos();

        let chy_shp = chy * shp;
        let shy_chp = shy * chp;
        let chy_chp = chy * chp;
        let shy_shp = shy * shp;

        Self::new(
            chy_shp * chr + shy_chp * shr,
            shy_chp * chr - chy_shp * shr,
            chy_chp * shr - shy_shp * chr,
            chy_chp * chr + shy_shp * shr,
        )
    }

    /// The rotation carrying `from` onto `to`.
    ///
    /// Parallel same-facing inputs give the identity. Antiparallel inputs
    /// have no unique rotation plane, so a 180 degree turn is taken about an
    /// axis perpendicular to `from`: derived from the world X axis, or from
    /// the world Y axis when `from` is nearly aligned with X.
    pub fn from_rotation_between(from: Vec3<T>, to: Vec3<T>) -> Self {
        let a = from.normalized();
        let b = to.normalized();
        let d = a.dot(b);
        let c = a.cross(b);
        if c.length2() < T::EPSILON {
            if d >= T::ZERO {
                return Self::identity();
            }
            let mut axis = a.cross(Vec3::unit_x());
            if axis.length2() < T::EPSILON {
                axis = a.cross(Vec3::unit_y());
            }
            return Self::from_axis_angle(axis, Radians(T::PI));
        }
        Self::from_axis_angle(c, Radians(d.clamped(-T::ONE, T::ONE).acos()))
    }

    /// Reconstructs a rotation from three orthonormal axes, the rows of the
    /// equivalent rotation matrix.
    ///
    /// The axes are normalized first. Extraction branches on the trace, or on
    /// whichever diagonal term is largest, so the square root being divided by
    /// is never near zero.
    pub fn from_axes(x_axis: Vec3<T>, y_axis: Vec3<T>, z_axis: Vec3<T>) -> Self {
        let xa = x_axis.normalized();
        let ya = y_axis.normalized();
        let za = z_axis.normalized();
        let (xx, xy, xz) = (xa.x, xa.y, xa.z);
        let (yx, yy, yz) = (ya.x, ya.y, ya.z);
        let (zx, zy, zz) = (za.x, za.y, za.z);

        let trace = xx + yy + zz;
        if trace >= T::ZERO {
            let s = (trace + T::ONE).sqrt();
            let w = T::HALF * s;
            let k = T::HALF / s;
            Self::new((zy - yz) * k, (xz - zx) * k, (yx - xy) * k, w)
        } else if xx > yy && xx > zz {
            let s = (T::ONE + xx - yy - zz).sqrt();
            let x = T::HALF * s;
            let k = T::HALF / s;
            Self::new(x, (yx + xy) * k, (xz + zx) * k, (zy - yz) * k)
        } else if yy > zz {
            let s = (T::ONE + yy - xx - zz).sqrt();
            let y = T::HALF * s;
            let k = T::HALF / s;
            Self::new((yx + xy) * k, y, (zy + yz) * k, (xz - zx) * k)
        } else {
            let s = (T::ONE + zz - xx - yy).sqrt();
            let z = T::HALF * s;
            let k = T::HALF / s;
            Self::new((xz + zx) * k, (zy + yz) * k, z, (yx - xy) * k)
        }
    }

    /// Extracts the rotation of a 3x3 matrix. Exact for pure rotation
    /// matrices; an approximation otherwise.
    pub fn from_matrix(m: &Matrix3<T>) -> Self {
        Self::from_axes(m.row(0), m.row(1), m.row(2))
    }

    /// Extracts the rotation of the upper-left 3x3 block of a 4x4 matrix.
    pub fn from_matrix4(m: &Matrix4<T>) -> Self {
        Self::from_axes(
            m.row(0).truncated(),
            m.row(1).truncated(),
            m.row(2).truncated(),
        )
    }

    /// Hamilton product `self * other`: rotating by `other`, then by `self`.
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }

    /// `other * self`: rotating by `self`, then by `other`.
    #[inline]
    pub fn pre_mul(self, other: Self) -> Self {
        other.mul(self)
    }

    /// Component-wise sum. Not a rotation; an interpolation primitive.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    /// Component-wise scale. Not a rotation; an interpolation primitive.
    #[inline]
    pub fn scaled(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
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
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: `conjugate / length2`. Equal to the conjugate
    /// for unit quaternions. A zero quaternion propagates NaN/Inf.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate().scaled(T::ONE / self.length2())
    }

    /// Divides by the length. A zero quaternion propagates NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        self.scaled(T::ONE / self.length())
    }

    /// Checked normalization: `None` below the degeneracy tolerance.
    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        if len < T::EPSILON {
            None
        } else {
            Some(self.scaled(T::ONE / len))
        }
    }

    /// Rotates a vector. Assumes `self` is unit norm.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        // v' = 2(u.v)u + (w^2 - u.u)v + 2w(u x v), the expanded conjugation.
        let u = Vec3::new(self.x, self.y, self.z);
        let uv = u.dot(v);
        let uu = u.dot(u);
        u.scaled(T::TWO * uv) + v.scaled(self.w * self.w - uu) + u.cross(v).scaled(T::TWO * self.w)
    }

    /// Spherical interpolation from `self` (alpha 0) to `end` (alpha 1) along
    /// the shorter arc.
    ///
    /// Both operands are normalized internally; that is the contract, not an
    /// implementation detail. When the orientations are nearly parallel
    /// (`1 - |dot|` within the linear threshold) the exact spherical weights
    /// blow up and a normalized linear blend of the coefficients is returned
    /// instead.
    pub fn slerp(self, end: Self, alpha: T) -> Self {
        let start = self.normalized();
        let end = end.normalized();
        let d = start.dot(end);
        let abs_dot = d.abs();

        if T::ONE - abs_dot <= T::SLERP_LINEAR_THRESHOLD {
            let scale1 = if d < T::ZERO { -alpha } else { alpha };
            return start
                .scaled(T::ONE - alpha)
                .add(end.scaled(scale1))
                .normalized();
        }

        let theta = abs_dot.acos();
        let inv_sin_theta = T::ONE / theta.sin();
        let scale0 = ((T::ONE - alpha) * theta).sin() * inv_sin_theta;
        let mut scale1 = (alpha * theta).sin() * inv_sin_theta;
        if d < T::ZERO {
            scale1 = -scale1;
        }
        start.scaled(scale0).add(end.scaled(scale1))
    }

    /// Quaternion exponentiation: the magnitude becomes `len^alpha` and the
    /// rotation angle scales linearly with `alpha`. Near zero angle the
    /// `sin(alpha*theta)/sin(theta)` coefficient is replaced by its limit to
    /// avoid `0/0`. The result is renormalized to absorb floating error.
    pub fn pow(self, alpha: T) -> Self {
        let norm = self.length();
        let norm_exp = norm.powf(alpha);
        let theta = (self.w / norm).clamped(-T::ONE, T::ONE).acos();
        let coeff = if theta.abs() < T::POW_LINEAR_THRESHOLD {
            norm_exp * alpha / norm
        } else {
            norm_exp * (alpha * theta).sin() / (norm * theta.sin())
        };
        Self::new(
            self.x * coeff,
            self.y * coeff,
            self.z * coeff,
            norm_exp * (alpha * theta).cos(),
        )
        .normalized()
    }

    /// Weighted combination `(q0^w0) * (q1^w1) * ...`, normalized.
    ///
    /// This is a left-to-right product of fractional rotations, not a
    /// symmetric spherical average: the result depends on the order of the
    /// inputs. Fails eagerly on empty or length-mismatched slices.
    pub fn weighted_slerp(quaternions: &[Self], weights: &[T]) -> Result<Self> {
        if quaternions.is_empty() {
            return Err(GimbalError::InvalidArgument(
                "weighted_slerp requires at least one quaternion".into(),
            ));
        }
        if quaternions.len() != weights.len() {
            return Err(GimbalError::InvalidArgument(format!(
                "weighted_slerp got {} quaternions but {} weights",
                quaternions.len(),
                weights.len()
            )));
        }
        let mut out = quaternions[0].pow(weights[0]);
        for (q, &w) in quaternions.iter().zip(weights).skip(1) {
            out = out.mul(q.pow(w));
        }
        Ok(out.normalized())
    }

    /// Equal-weight form of [`Quaternion::weighted_slerp`].
    pub fn slerp_all(quaternions: &[Self]) -> Result<Self> {
        if quaternions.is_empty() {
            return Err(GimbalError::InvalidArgument(
                "slerp_all requires at least one quaternion".into(),
            ));
        }
        let w = T::ONE / T::from(quaternions.len()).unwrap_or(T::ONE);
        let mut out = quaternions[0].pow(w);
        for q in &quaternions[1..] {
            out = out.mul(q.pow(w));
        }
        Ok(out.normalized())
    }

    /// Which gimbal pole this orientation sits on, if any.
    ///
    /// Heuristic band on the `y*x + z*w` term, not an exact singularity test.
    pub fn gimbal_pole(self) -> GimbalPole {
        let t = self.y * self.x + self.z * self.w;
        if t > T::GIMBAL_POLE_LIMIT {
            GimbalPole::North
        } else if t < -T::GIMBAL_POLE_LIMIT {
            GimbalPole::South
        } else {
            GimbalPole::None
        }
    }

    /// Rotation about the z axis. Assumes unit norm.
    ///
    /// At a gimbal pole roll and yaw are coupled; the pole-specific closed
    /// form attributes the whole coupled term to roll.
    pub fn roll(self) -> Radians<T> {
        let pole = self.gimbal_pole();
        match pole {
            GimbalPole::None => Radians(
                (T::TWO * (self.w * self.z + self.y * self.x))
                    .atan2(T::ONE - T::TWO * (self.x * self.x + self.z * self.z)),
            ),
            _ => Radians(pole.factor::<T>() * T::TWO * self.y.atan2(self.w)),
        }
    }

    /// Rotation about the x axis. Assumes unit norm. The asin argument is
    /// clamped to tolerate floating overshoot.
    pub fn pitch(self) -> Radians<T> {
        let pole = self.gimbal_pole();
        match pole {
            GimbalPole::None => Radians(
                (T::TWO * (self.w * self.x - self.z * self.y))
                    .clamped(-T::ONE, T::ONE)
                    .asin(),
            ),
            _ => Radians(pole.factor::<T>() * T::HALF_PI),
        }
    }

    /// Rotation about the y axis. Assumes unit norm. Exactly zero at a
    /// gimbal pole, by convention.
    pub fn yaw(self) -> Radians<T> {
        match self.gimbal_pole() {
            GimbalPole::None => Radians(
                (T::TWO * (self.y * self.w + self.x * self.z))
                    .atan2(T::ONE - T::TWO * (self.y * self.y + self.x * self.x)),
            ),
            _ => Radians::zero(),
        }
    }

    /// The rotation angle, in `[0, 2*pi]`.
    pub fn angle(self) -> Radians<T> {
        let w = (self.w / self.length()).clamped(-T::ONE, T::ONE);
        Radians(T::TWO * w.acos())
    }

    /// Decomposes into a unit axis and an angle; the inverse of
    /// [`Quaternion::from_axis_angle`].
    ///
    /// Near the identity the `sqrt(1 - w^2)` denominator degenerates and the
    /// raw vector part is normalized directly instead; an exactly-identity
    /// input has no axis and propagates NaN.
    pub fn axis_angle(self) -> AxisAngle<T> {
        let q = self.normalized();
        let angle = Radians(T::TWO * q.w.clamped(-T::ONE, T::ONE).acos());
        let s = (T::ONE - q.w * q.w).sqrt();
        let v = Vec3::new(q.x, q.y, q.z);
        let axis = if s < T::EPSILON {
            v.normalized()
        } else {
            v / s
        };
        AxisAngle { axis, angle }
    }

    /// Splits the rotation around `axis` into twist (about the axis) and
    /// swing (the remainder), such that `swing * twist` reconstructs `self`.
    pub fn swing_twist(self, axis: Vec3<T>) -> SwingTwist<T> {
        let a = axis.normalized();
        let d = Vec3::new(self.x, self.y, self.z).dot(a);
        let mut twist = Self::new(a.x * d, a.y * d, a.z * d, self.w).normalized();
        if d < T::ZERO {
            twist = twist.scaled(-T::ONE);
        }
        let swing = self.mul(twist.conjugate());
        SwingTwist { swing, twist }
    }

    /// The rotation angle around `axis`, ignoring the swing component.
    /// Zero when the projection onto the axis carries no rotation.
    pub fn angle_around(self, axis: Vec3<T>) -> Radians<T> {
        let a = axis.normalized();
        let d = Vec3::new(self.x, self.y, self.z).dot(a);
        let l2 = a.scaled(d).length2() + self.w * self.w;
        if l2 < T::EPSILON * T::EPSILON {
            return Radians::zero();
        }
        let w = if d < T::ZERO { -self.w } else { self.w };
        Radians(T::TWO * (w / l2.sqrt()).clamped(-T::ONE, T::ONE).acos())
    }

    /// True if every component differs by at most `tolerance`.
    #[inline]
    pub fn is_equal(self, other: Self, tolerance: T) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
            && (self.w - other.w).abs() <= tolerance
    }

    /// True if this represents the same rotation as `other` (q and -q are the
    /// same orientation).
    #[inline]
    pub fn is_same_rotation(self, other: Self, tolerance: T) -> bool {
        self.is_equal(other, tolerance) || self.is_equal(other.scaled(-T::ONE), tolerance)
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Quaternion::mul(self, other)
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn add(self, other: Self) -> Self {
        Quaternion::add(self, other)
    }
}
