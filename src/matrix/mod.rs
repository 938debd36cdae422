//! Matrix types.
//!
//! Storage is row-major in memory for all three types; every `to_array`-style
//! export is **column-major**, which is the wire contract graphics consumers
//! expect. Keep the two conventions straight: indexing here is `m[row][col]`.
//!
//! `AffineMatrix3` is a distinct type rather than a flag on `Matrix3`, so the
//! cheap affine arithmetic (which assumes a `[0, 0, 1]` bottom row) cannot be
//! applied to a general matrix by mistake.

mod affine3;
mod mat3;
mod mat4;

pub use affine3::AffineMatrix3;
pub use mat3::Matrix3;
pub use mat4::Matrix4;
