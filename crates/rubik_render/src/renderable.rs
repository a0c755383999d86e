//! Cube geometry - bridges the Cube model to GPU buffers
//!
//! Tessellates each cubelet into a lit box with per-face sticker colors plus
//! a black edge outline, applying the active slice rotation to the pieces it
//! covers. Rebuilt whenever the cube is dirty or a twist is in flight; at 26
//! boxes this is cheap enough to do every animated frame.

use rubik_core::{Cube, Cubelet, Face, SliceRotation, Transform3};
use rubik_math::{Rotor3, Vec3};
use crate::pipeline::{EdgeVertex, MeshVertex};

/// RGBA colors for the six sticker faces and the bare plastic
#[derive(Clone, Copy, Debug)]
pub struct StickerPalette {
    /// Colors indexed by [`Face::index`]
    pub faces: [[f32; 4]; 6],
    /// Color of unstickered sides
    pub plastic: [f32; 4],
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self {
            faces: [
                [1.0, 0.0, 0.0, 1.0],       // Right: red
                [0.867, 0.369, 0.0, 1.0],   // Left: orange
                [1.0, 1.0, 1.0, 1.0],       // Up: white
                [1.0, 1.0, 0.0, 1.0],       // Down: yellow
                [0.0, 1.0, 0.0, 1.0],       // Front: green
                [0.0, 0.0, 1.0, 1.0],       // Back: blue
            ],
            plastic: [0.867, 0.867, 0.867, 1.0],
        }
    }
}

impl StickerPalette {
    /// Color for a sticker slot; None is bare plastic
    pub fn color(&self, sticker: Option<Face>) -> [f32; 4] {
        match sticker {
            Some(face) => self.faces[face.index()],
            None => self.plastic,
        }
    }
}

/// Corners of a unit box, indexed by bit pattern (bit 0 = +x, 1 = +y, 2 = +z)
const CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Corner indices per face, counter-clockwise seen from outside,
/// in [`Face::index`] order
const FACE_CORNERS: [[usize; 4]; 6] = [
    [1, 3, 7, 5], // Right (+X)
    [0, 4, 6, 2], // Left (-X)
    [2, 6, 7, 3], // Up (+Y)
    [0, 1, 5, 4], // Down (-Y)
    [4, 5, 7, 6], // Front (+Z)
    [0, 2, 3, 1], // Back (-Z)
];

/// The 12 box edges as corner index pairs
const EDGE_PAIRS: [[usize; 2]; 12] = [
    [0, 1], [2, 3], [4, 5], [6, 7], // along X
    [0, 2], [1, 3], [4, 6], [5, 7], // along Y
    [0, 4], [1, 5], [2, 6], [3, 7], // along Z
];

/// GPU-ready geometry collected from the cube
pub struct CubeGeometry {
    /// Face vertices with world positions, normals, and colors
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into the vertex buffer
    pub indices: Vec<u32>,
    /// Outline line-list vertices
    pub edges: Vec<EdgeVertex>,
}

impl CubeGeometry {
    /// Create empty geometry
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Tessellate the whole cube
    ///
    /// `slice` is the in-flight twist, if any; its members rotate as a group
    /// around the cube center.
    pub fn from_cube(
        cube: &Cube,
        slice: Option<&SliceRotation>,
        palette: &StickerPalette,
        spacing: f32,
        cubelet_size: f32,
    ) -> Self {
        let mut result = Self {
            vertices: Vec::with_capacity(cube.cubelet_count() * 24),
            indices: Vec::with_capacity(cube.cubelet_count() * 36),
            edges: Vec::with_capacity(cube.cubelet_count() * 24),
        };

        for cubelet in cube.iter() {
            let group = slice
                .filter(|s| s.contains(cubelet.pos))
                .map(|s| s.rotor());
            result.add_cubelet(cubelet, group, palette, spacing, cubelet_size);
        }

        result
    }

    /// Add one cubelet's faces and outline
    pub fn add_cubelet(
        &mut self,
        cubelet: &Cubelet,
        group: Option<Rotor3>,
        palette: &StickerPalette,
        spacing: f32,
        cubelet_size: f32,
    ) {
        let rest = Vec3::new(
            cubelet.pos[0] as f32 * spacing,
            cubelet.pos[1] as f32 * spacing,
            cubelet.pos[2] as f32 * spacing,
        );

        // The slice group rotates the piece around the cube center, on top of
        // the piece's own accumulated orientation.
        let transform = match group {
            Some(g) => Transform3 {
                position: g.rotate(rest),
                rotation: g.compose(&cubelet.orientation),
                scale: cubelet_size,
            },
            None => Transform3 {
                position: rest,
                rotation: cubelet.orientation,
                scale: cubelet_size,
            },
        };

        for face in Face::ALL {
            let color = palette.color(cubelet.sticker(face));
            let normal = transform.transform_direction(face.normal());

            let base = self.vertices.len() as u32;
            for corner in FACE_CORNERS[face.index()] {
                let world = transform.transform_point(CORNERS[corner]);
                self.vertices.push(MeshVertex::new(
                    world.to_array(),
                    normal.to_array(),
                    color,
                ));
            }
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        for [a, b] in EDGE_PAIRS {
            let pa = transform.transform_point(CORNERS[a]);
            let pb = transform.transform_point(CORNERS[b]);
            self.edges.push(EdgeVertex::new(pa.to_array()));
            self.edges.push(EdgeVertex::new(pb.to_array()));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.edges.clear();
    }

    /// Number of face vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle indices
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of outline vertices
    #[inline]
    pub fn edge_vertex_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for CubeGeometry {
    fn default() -> Self {
        Self::new()
    }
}
