//! Input handling for the Rubik viewer
//!
//! This crate provides the two pointer-driven controllers:
//! orbiting the camera around the cube, and dragging a slice into a twist.

mod orbit_controller;
mod twist_controller;

pub use orbit_controller::{OrbitControl, OrbitController};
pub use twist_controller::{pick_cubelet, PickResult, TwistController};
