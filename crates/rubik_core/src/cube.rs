//! Cube container for cubelets
//!
//! The Cube manages the 26 pieces, answers slice-membership queries, and
//! applies committed twists.

use crate::cubelet::Cubelet;
use crate::layout;
use crate::twist::{Axis, Face, Twist};

/// A handle to a cubelet in the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeletHandle(usize);

impl CubeletHandle {
    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The cube: all cubelets plus twist bookkeeping
pub struct Cube {
    cubelets: Vec<Cubelet>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube {
    /// Build a solved cube from the layout tables
    pub fn solved() -> Self {
        Self {
            cubelets: layout::solved(),
        }
    }

    /// Build a cube from explicit pieces (for tests and tools)
    pub fn from_cubelets(cubelets: Vec<Cubelet>) -> Self {
        Self { cubelets }
    }

    /// Get a reference to a cubelet by handle
    pub fn get(&self, handle: CubeletHandle) -> Option<&Cubelet> {
        self.cubelets.get(handle.0)
    }

    /// Get a mutable reference to a cubelet by handle
    pub fn get_mut(&mut self, handle: CubeletHandle) -> Option<&mut Cubelet> {
        self.cubelets.get_mut(handle.0)
    }

    /// All cubelets as a slice
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// Number of cubelets
    #[inline]
    pub fn cubelet_count(&self) -> usize {
        self.cubelets.len()
    }

    /// Iterate over all cubelets
    pub fn iter(&self) -> impl Iterator<Item = &Cubelet> {
        self.cubelets.iter()
    }

    /// Iterate over handles and cubelets
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (CubeletHandle, &Cubelet)> {
        self.cubelets
            .iter()
            .enumerate()
            .map(|(i, c)| (CubeletHandle(i), c))
    }

    /// Handle of the cubelet currently at a lattice position
    pub fn find_at(&self, pos: [i8; 3]) -> Option<CubeletHandle> {
        self.cubelets
            .iter()
            .position(|c| c.pos == pos)
            .map(CubeletHandle)
    }

    /// Handles of all cubelets in a layer of an axis
    pub fn layer_members(&self, axis: Axis, layer: i8) -> Vec<CubeletHandle> {
        self.cubelets
            .iter()
            .enumerate()
            .filter(|(_, c)| c.pos[axis.index()] == layer)
            .map(|(i, _)| CubeletHandle(i))
            .collect()
    }

    /// Apply a committed twist, permuting member positions and orientations
    pub fn apply_twist(&mut self, twist: &Twist) {
        for cubelet in &mut self.cubelets {
            if cubelet.pos[twist.axis.index()] == twist.layer {
                cubelet.apply_quarter_turns(twist.axis, twist.quarters);
            }
        }
        log::debug!(
            "twist applied: {:?} layer {} x{}",
            twist.axis,
            twist.layer,
            twist.quarters
        );
    }

    /// Sticker colors currently showing on one world face (9 entries)
    pub fn face_colors(&self, face: Face) -> Vec<Option<Face>> {
        self.cubelets
            .iter()
            .filter(|c| c.pos[face.axis().index()] == face.sign())
            .map(|c| c.world_sticker(face))
            .collect()
    }

    /// Whether every face shows a single color
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            self.face_colors(face)
                .iter()
                .all(|s| *s == Some(face))
        })
    }

    /// Check if any cubelet is dirty
    pub fn has_dirty(&self) -> bool {
        self.cubelets.iter().any(|c| c.is_dirty())
    }

    /// Clear dirty flags on all cubelets
    pub fn clear_all_dirty(&mut self) {
        for cubelet in &mut self.cubelets {
            cubelet.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_cube() {
        let cube = Cube::solved();
        assert_eq!(cube.cubelet_count(), 26);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_layer_member_counts() {
        let cube = Cube::solved();
        // Outer layers hold 9 pieces; the middle layer has no core, so 8
        assert_eq!(cube.layer_members(Axis::X, 1).len(), 9);
        assert_eq!(cube.layer_members(Axis::X, -1).len(), 9);
        assert_eq!(cube.layer_members(Axis::X, 0).len(), 8);
        assert_eq!(cube.layer_members(Axis::Y, 0).len(), 8);
    }

    #[test]
    fn test_find_at() {
        let cube = Cube::solved();
        let handle = cube.find_at([1, 1, 1]).unwrap();
        assert!(cube.get(handle).unwrap().is_corner());
        assert!(cube.find_at([0, 0, 0]).is_none());
    }

    #[test]
    fn test_twist_moves_only_members() {
        let mut cube = Cube::solved();
        cube.clear_all_dirty();

        let before: Vec<[i8; 3]> = cube.iter().map(|c| c.pos).collect();
        cube.apply_twist(&Twist::new(Axis::Y, 1, 1));

        let mut moved = 0;
        for (i, c) in cube.iter().enumerate() {
            if c.pos != before[i] {
                moved += 1;
                assert_eq!(before[i][1], 1, "non-member moved");
            }
        }
        // The up-face center stays in place but still rotates; the other
        // 8 members change position.
        assert_eq!(moved, 8);
        assert!(cube.has_dirty());
    }

    #[test]
    fn test_four_twists_restore_solved() {
        let mut cube = Cube::solved();
        for _ in 0..4 {
            cube.apply_twist(&Twist::new(Axis::X, 1, 1));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_single_twist_unsolves() {
        let mut cube = Cube::solved();
        cube.apply_twist(&Twist::new(Axis::Z, 1, 1));
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_double_twist_equals_two_singles() {
        let mut a = Cube::solved();
        let mut b = Cube::solved();
        a.apply_twist(&Twist::new(Axis::X, -1, 2));
        b.apply_twist(&Twist::new(Axis::X, -1, 1));
        b.apply_twist(&Twist::new(Axis::X, -1, 1));

        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.pos, cb.pos);
        }
    }

    #[test]
    fn test_sticker_conservation() {
        let mut cube = Cube::solved();
        cube.apply_twist(&Twist::new(Axis::Y, 1, 1));
        cube.apply_twist(&Twist::new(Axis::X, -1, -1));
        cube.apply_twist(&Twist::new(Axis::Z, 0, 2));

        for face in Face::ALL {
            let colors = cube.face_colors(face);
            assert_eq!(colors.len(), 9);
            // Every outward-facing slot shows a colored sticker, never plastic
            assert!(colors.iter().all(|c| c.is_some()), "plastic on {:?}", face);
        }

        // Color counts are conserved across the whole cube
        for color in Face::ALL {
            let total: usize = Face::ALL
                .iter()
                .map(|&f| {
                    cube.face_colors(f)
                        .iter()
                        .filter(|s| **s == Some(color))
                        .count()
                })
                .sum();
            assert_eq!(total, 9, "expected 9 {:?} stickers showing", color);
        }
    }

    #[test]
    fn test_centers_stay_on_axis() {
        let mut cube = Cube::solved();
        cube.apply_twist(&Twist::new(Axis::Y, 1, 1));
        cube.apply_twist(&Twist::new(Axis::Z, -1, 1));
        cube.apply_twist(&Twist::new(Axis::X, 0, 3));

        for c in cube.iter().filter(|c| c.is_center()) {
            let nonzero: Vec<i8> = c.pos.iter().copied().filter(|&v| v != 0).collect();
            assert_eq!(nonzero.len(), 1);
        }
    }

    #[test]
    fn test_middle_layer_twist() {
        let mut cube = Cube::solved();
        cube.apply_twist(&Twist::new(Axis::Y, 0, 1));

        // Centers of the four side faces rotate around Y
        let front_center = cube.find_at([1, 0, 0]).unwrap();
        assert_eq!(
            cube.get(front_center).unwrap().world_sticker(Face::Right),
            Some(Face::Front)
        );
    }
}
