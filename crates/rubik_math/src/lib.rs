//! 3D Mathematics Library
//!
//! This crate provides the vector, rotation, matrix, and ray types for the
//! Rubik viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Rotor3`] - 3D rotation using geometric algebra
//! - [`mat4`] - Column-major 4x4 matrix helpers
//! - [`Ray`] - Ray with axis-aligned-box intersection for picking

mod vec3;
mod rotor3;
pub mod mat4;
pub mod ray;

pub use vec3::Vec3;
pub use rotor3::{Rotor3, RotationPlane};
pub use mat4::Mat4;
pub use ray::{Ray, RayHit};
