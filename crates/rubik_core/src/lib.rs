//! Core types for the Rubik viewer
//!
//! This crate provides the foundational types for the cube model:
//!
//! - [`Transform3`] - Position, rotation, and scale in 3D space
//! - [`Cubelet`] - One of the 26 pieces: lattice position, orientation, stickers
//! - [`Cube`] - Container for all cubelets with slice queries and twists
//! - [`CubeletHandle`] - Handle to a cubelet in the cube
//! - [`layout`] - The hard-coded position and sticker tables
//! - [`Axis`], [`Face`], [`Twist`] - Twist vocabulary
//! - [`SliceRotation`], [`TwistAnimation`] - Live slice rotation and snapping

mod transform;
mod cubelet;
mod cube;
mod twist;
pub mod layout;

pub use transform::Transform3;
pub use cubelet::{Cubelet, DirtyFlags};
pub use cube::{Cube, CubeletHandle};
pub use twist::{Axis, Face, SliceRotation, Twist, TwistAnimation};

// Re-export commonly used math types for convenience
pub use rubik_math::{Ray, RayHit, Rotor3, RotationPlane, Vec3};
