//! GPU-compatible data types for the cube pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A lit, colored vertex of a cubelet face
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// RGBA sticker or plastic color
    pub color: [f32; 4],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// A vertex of the edge outline pass (position only; color is uniform)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EdgeVertex {
    pub position: [f32; 3],
}

impl EdgeVertex {
    pub fn new(position: [f32; 3]) -> Self {
        Self { position }
    }
}

/// Uniforms for the mesh pass
/// Layout: 144 bytes total (must match mesh.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// View matrix (64 bytes)
    pub view: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub proj: [[f32; 4]; 4],
    /// Lighting parameters (16 bytes)
    pub ambient_strength: f32,
    pub headlight_strength: f32,
    pub fill_strength: f32,
    pub _padding: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view: rubik_math::mat4::IDENTITY,
            proj: rubik_math::mat4::IDENTITY,
            ambient_strength: 0.05,
            headlight_strength: 0.73,
            fill_strength: 0.19,
            _padding: 0.0,
        }
    }
}

/// Uniforms for the edge pass
/// Layout: 80 bytes total (must match edges.wgsl EdgeUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EdgeUniforms {
    /// Combined view-projection matrix (64 bytes)
    pub view_proj: [[f32; 4]; 4],
    /// Line color (16 bytes)
    pub color: [f32; 4],
}

impl Default for EdgeUniforms {
    fn default() -> Self {
        Self {
            view_proj: rubik_math::mat4::IDENTITY,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
