//! Rendering library for the Rubik viewer
//!
//! This crate provides the wgpu-based pipeline that draws the cube.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Orbit camera circling the cube
//! - [`pipeline::MeshPipeline`] - Lit, per-face-colored cubelet rendering
//! - [`pipeline::EdgePipeline`] - Black outline pass
//! - [`renderable::CubeGeometry`] - Converts the Cube into GPU buffers

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use rubik_core::{Axis, Cube, Cubelet, CubeletHandle, Face, Transform3};
pub use rubik_core::{SliceRotation, Twist, TwistAnimation};
pub use rubik_core::{Ray, Rotor3, Vec3};

// Re-export renderable for easy access
pub use renderable::{CubeGeometry, StickerPalette};
pub use camera::OrbitCamera;
