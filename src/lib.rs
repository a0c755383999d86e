//! Rubik - Interactive 3D Rubik's cube viewer
//!
//! A winit/wgpu application that renders the classic 26-piece cube, orbits
//! the camera around it, and turns pointer drags into slice twists.
//!
//! The crate exposes the application-level modules; the cube model, math,
//! rendering, and input handling live in the `rubik_core`, `rubik_math`,
//! `rubik_render`, and `rubik_input` workspace crates. The central handles a
//! sibling module works with are re-exported here: the camera, the scene, the
//! cubelet list, and the in-flight slice rotation.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;

pub use scene::{CubeScene, CubeSceneBuilder};
pub use rubik_core::{Axis, Cube, Cubelet, CubeletHandle, Face, SliceRotation, Twist, TwistAnimation};
pub use rubik_render::{CubeGeometry, OrbitCamera, StickerPalette};
pub use rubik_input::{OrbitController, TwistController};
