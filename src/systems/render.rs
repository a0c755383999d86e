//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh and edge pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use rubik_render::{
    context::RenderContext,
    camera::OrbitCamera,
    pipeline::{EdgePipeline, EdgeUniforms, MeshPipeline, SceneUniforms},
    CubeGeometry,
};
use rubik_math::mat4;
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    edge_pipeline: EdgePipeline,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, render_config: RenderingConfig, vsync: bool) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);
        let edge_pipeline = EdgePipeline::new(&context.device, context.config.format);

        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Self {
            context,
            mesh_pipeline,
            edge_pipeline,
            render_config,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Upload cube geometry to GPU
    pub fn upload_geometry(&mut self, geometry: &CubeGeometry) {
        self.mesh_pipeline
            .upload_mesh(&self.context.device, &geometry.vertices, &geometry.indices);
        self.edge_pipeline
            .upload_edges(&self.context.device, &geometry.edges);
        log::debug!(
            "Uploaded {} vertices, {} indices, {} edge vertices",
            geometry.vertex_count(),
            geometry.index_count(),
            geometry.edge_vertex_count()
        );
    }

    /// Render a single frame
    pub fn render_frame(&mut self, camera: &OrbitCamera) -> Result<(), RenderError> {
        let aspect = self.context.aspect_ratio();
        let view = camera.view_matrix();
        let proj = camera.proj_matrix(aspect);

        let uniforms = SceneUniforms {
            view,
            proj,
            ambient_strength: self.render_config.ambient_strength,
            headlight_strength: self.render_config.headlight_strength,
            fill_strength: self.render_config.fill_strength,
            _padding: 0.0,
        };
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        let edge_uniforms = EdgeUniforms {
            view_proj: mat4::mul(proj, view),
            color: self.render_config.edge_color,
        };
        self.edge_pipeline
            .update_uniforms(&self.context.queue, &edge_uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.mesh_pipeline.render(
            &mut encoder,
            &target,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );
        self.edge_pipeline
            .render(&mut encoder, &target, self.mesh_pipeline.depth_view());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
