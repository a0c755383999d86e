//! Scene construction utilities
//!
//! This module provides a declarative API for assembling the cube scene.

mod scene_builder;

pub use scene_builder::{CubeScene, CubeSceneBuilder};
