//! gimbal: geometry kernel for graphics and simulation code.
//!
//! Quaternions, 3x3/4x4 matrices, vectors, angles, and shape records, all
//! immutable `Copy` value types generic over scalar precision (`f32`/`f64`).
//! The heart of the crate is the rotation algebra: quaternion composition,
//! interpolation, and decomposition, with bidirectional matrix conversions
//! and the affine fast paths.
//!
//! Degenerate geometric inputs (zero-length axes and vectors) are not guarded
//! on the primary paths: they propagate NaN rather than cost every caller a
//! branch. The `try_*` variants are the checked alternatives.

pub mod angle;
pub mod matrix;
pub mod precision;
pub mod quaternion;
pub mod scalar;
pub mod shape;
pub mod vector;

// Re-exports for convenience
pub use angle::{degrees, radians, Radians};
pub use matrix::{AffineMatrix3, Matrix3, Matrix4};
pub use quaternion::{AxisAngle, GimbalPole, Quaternion, SwingTwist};
pub use scalar::Scalar;
pub use shape::{Circle, Cuboid, Rect, Segment, Sphere};
pub use vector::{Vec2, Vec3, Vec4};

/// Result type for gimbal operations
pub type Result<T> = std::result::Result<T, GimbalError>;

#[derive(Debug, thiserror::Error)]
pub enum GimbalError {
    /// A matrix inversion hit a determinant below the degeneracy tolerance.
    #[error("singular matrix")]
    SingularMatrix,

    /// An array argument was empty or length-mismatched. Raised before any
    /// computation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A component index outside the type's dimensionality.
    #[error("component index {index} out of range for {dim} components")]
    OutOfBounds { index: usize, dim: usize },
}
