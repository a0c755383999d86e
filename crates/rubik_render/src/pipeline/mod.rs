//! Rendering pipeline components
//!
//! Two passes draw the cube: a lit mesh pass for the cubelet faces and a
//! depth-biased line pass for the black edge outlines.

pub mod types;
pub mod mesh_pipeline;
pub mod edge_pipeline;

// Re-export types
pub use types::{EdgeUniforms, EdgeVertex, MeshVertex, SceneUniforms};

// Re-export pipelines
pub use mesh_pipeline::MeshPipeline;
pub use edge_pipeline::EdgePipeline;
