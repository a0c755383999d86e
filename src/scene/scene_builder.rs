//! CubeSceneBuilder - Declarative cube scene construction
//!
//! Assembles the 26-piece cube from the core layout tables and bundles it
//! with the visual parameters the renderer and the pick tests need.

use rubik_core::Cube;
use rubik_render::StickerPalette;
use crate::config::CubeConfig;

/// The assembled scene: the cube plus its visual layout parameters
pub struct CubeScene {
    pub cube: Cube,
    pub palette: StickerPalette,
    pub spacing: f32,
    pub cubelet_size: f32,
}

/// Builder for the cube scene
///
/// # Example
/// ```ignore
/// let scene = CubeSceneBuilder::new()
///     .with_spacing(1.0)
///     .with_cubelet_size(0.96)
///     .build();
/// ```
pub struct CubeSceneBuilder {
    palette: StickerPalette,
    spacing: f32,
    cubelet_size: f32,
}

impl CubeSceneBuilder {
    /// Create a builder with the stock palette and layout
    pub fn new() -> Self {
        Self {
            palette: StickerPalette::default(),
            spacing: 1.0,
            cubelet_size: 0.96,
        }
    }

    /// Create a builder seeded from configuration
    pub fn from_config(config: &CubeConfig) -> Self {
        Self::new()
            .with_spacing(config.spacing)
            .with_cubelet_size(config.cubelet_size)
    }

    /// Set the distance between cubelet centers
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cubelet box size
    pub fn with_cubelet_size(mut self, size: f32) -> Self {
        self.cubelet_size = size;
        self
    }

    /// Replace the sticker palette
    pub fn with_palette(mut self, palette: StickerPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Assemble the solved cube with these parameters
    pub fn build(self) -> CubeScene {
        let cube = Cube::solved();
        log::info!(
            "Assembled cube scene: {} cubelets, spacing {}, size {}",
            cube.cubelet_count(),
            self.spacing,
            self.cubelet_size
        );

        CubeScene {
            cube,
            palette: self.palette,
            spacing: self.spacing,
            cubelet_size: self.cubelet_size,
        }
    }
}

impl Default for CubeSceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
