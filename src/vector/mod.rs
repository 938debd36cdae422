//! Vector value types.
//!
//! `Vec2`, `Vec3`, and `Vec4` double as points: the crate keeps one hierarchy
//! and treats a vector-as-position through the `distance`/`lerp` methods.
//!
//! Normalization comes in two flavors throughout: `normalized` divides by the
//! length unconditionally (a zero vector propagates NaN, callers pre-validate),
//! and `try_normalized` is the checked variant returning `None` below the
//! degeneracy tolerance.

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
