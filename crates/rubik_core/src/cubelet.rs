//! Cubelet: one of the 26 pieces of the cube
//!
//! A cubelet keeps its lattice position (components in {-1, 0, 1}), an
//! orientation rotor accumulated from quarter turns, and the sticker kit it
//! was assembled with. Stickers are indexed by *local* face; the orientation
//! carries them to their world-facing side, so the kit never changes after
//! assembly.

use bitflags::bitflags;
use rubik_math::Rotor3;
use crate::twist::{Axis, Face};

bitflags! {
    /// Flags indicating which parts of a cubelet have changed
    ///
    /// Used for dirty tracking so geometry is only rebuilt when something
    /// actually moved.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Position or orientation has changed
        const TRANSFORM = 1 << 0;
        /// All flags set - cubelet needs a full rebuild
        const ALL = Self::TRANSFORM.bits();
    }
}

/// One piece of the cube
#[derive(Clone, Debug)]
pub struct Cubelet {
    /// Lattice position at assembly time
    pub home: [i8; 3],
    /// Current lattice position, components in {-1, 0, 1}
    pub pos: [i8; 3],
    /// Accumulated orientation from quarter turns
    pub orientation: Rotor3,
    /// Sticker colors by local face slot; None is bare plastic
    stickers: [Option<Face>; 6],
    /// Dirty flags for change tracking
    dirty: DirtyFlags,
}

impl Cubelet {
    /// Create a cubelet at a lattice position with its sticker kit
    pub fn new(pos: [i8; 3], stickers: [Option<Face>; 6]) -> Self {
        Self {
            home: pos,
            pos,
            orientation: Rotor3::IDENTITY,
            stickers,
            dirty: DirtyFlags::ALL, // New cubelets are dirty
        }
    }

    /// Sticker color on a local face slot
    #[inline]
    pub fn sticker(&self, local: Face) -> Option<Face> {
        self.stickers[local.index()]
    }

    /// All six local sticker slots
    #[inline]
    pub fn stickers(&self) -> &[Option<Face>; 6] {
        &self.stickers
    }

    /// Number of colored stickers (1 = center, 2 = edge, 3 = corner)
    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_center(&self) -> bool {
        self.sticker_count() == 1
    }

    pub fn is_edge(&self) -> bool {
        self.sticker_count() == 2
    }

    pub fn is_corner(&self) -> bool {
        self.sticker_count() == 3
    }

    /// Sticker color currently showing on a world face direction
    ///
    /// Finds the local face the orientation maps onto `world`. Returns None
    /// when that side is bare plastic.
    pub fn world_sticker(&self, world: Face) -> Option<Face> {
        let target = world.normal();
        for local in Face::ALL {
            let rotated = self.orientation.rotate(local.normal());
            if rotated.dot(target) > 0.9 {
                return self.sticker(local);
            }
        }
        None
    }

    /// Rotate the cubelet a number of quarter turns around an axis
    ///
    /// The lattice position is rotated exactly (integer arithmetic); the
    /// orientation composes the matching rotor and renormalizes.
    pub fn apply_quarter_turns(&mut self, axis: Axis, quarters: i32) {
        let steps = quarters.rem_euclid(4);
        for _ in 0..steps {
            self.pos = rotate_lattice(self.pos, axis);
        }

        let angle = quarters as f32 * std::f32::consts::FRAC_PI_2;
        let rotor = Rotor3::from_axis_angle(axis.unit(), angle);
        self.orientation = rotor.compose(&self.orientation).normalize();

        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    // --- Dirty tracking ---

    /// Check if this cubelet has any dirty flags set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Get the current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this cubelet as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}

/// One right-handed quarter turn of a lattice point around an axis
fn rotate_lattice(p: [i8; 3], axis: Axis) -> [i8; 3] {
    let [x, y, z] = p;
    match axis {
        Axis::X => [x, -z, y],
        Axis::Y => [z, y, -x],
        Axis::Z => [-y, x, z],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_piece() -> Cubelet {
        // +X/+Y edge, as assembled
        let mut stickers = [None; 6];
        stickers[Face::Right.index()] = Some(Face::Right);
        stickers[Face::Up.index()] = Some(Face::Up);
        Cubelet::new([1, 1, 0], stickers)
    }

    #[test]
    fn test_sticker_counts() {
        let edge = edge_piece();
        assert_eq!(edge.sticker_count(), 2);
        assert!(edge.is_edge());
        assert!(!edge.is_center());
        assert!(!edge.is_corner());
    }

    #[test]
    fn test_lattice_rotation_is_right_handed() {
        // Quarter turn about +X sends +Y to +Z
        assert_eq!(rotate_lattice([0, 1, 0], Axis::X), [0, 0, 1]);
        assert_eq!(rotate_lattice([0, 0, 1], Axis::X), [0, -1, 0]);
        // Quarter turn about +Y sends +Z to +X
        assert_eq!(rotate_lattice([0, 0, 1], Axis::Y), [1, 0, 0]);
        // Quarter turn about +Z sends +X to +Y
        assert_eq!(rotate_lattice([1, 0, 0], Axis::Z), [0, 1, 0]);
    }

    #[test]
    fn test_lattice_matches_rotor() {
        // The integer lattice rotation and the float rotor must agree
        let rotor = Rotor3::from_axis_angle(Axis::X.unit(), std::f32::consts::FRAC_PI_2);
        for p in [[1, 1, 0], [0, 1, -1], [1, -1, 1]] {
            let lattice = rotate_lattice(p, Axis::X);
            let v = rotor.rotate(rubik_math::Vec3::new(
                p[0] as f32,
                p[1] as f32,
                p[2] as f32,
            ));
            assert!((v.x - lattice[0] as f32).abs() < 1e-5);
            assert!((v.y - lattice[1] as f32).abs() < 1e-5);
            assert!((v.z - lattice[2] as f32).abs() < 1e-5);
        }
    }

    #[test]
    fn test_quarter_turn_moves_position() {
        let mut c = edge_piece();
        c.apply_quarter_turns(Axis::X, 1);
        assert_eq!(c.pos, [1, 0, 1]);
    }

    #[test]
    fn test_four_turns_restore() {
        let mut c = edge_piece();
        c.apply_quarter_turns(Axis::Z, 4);
        assert_eq!(c.pos, c.home);
        // Orientation must still show the original stickers on world faces
        assert_eq!(c.world_sticker(Face::Right), Some(Face::Right));
        assert_eq!(c.world_sticker(Face::Up), Some(Face::Up));
    }

    #[test]
    fn test_world_sticker_after_twist() {
        let mut c = edge_piece();
        // Turn the +X layer about X: the Up sticker swings to Front
        c.apply_quarter_turns(Axis::X, 1);
        assert_eq!(c.world_sticker(Face::Front), Some(Face::Up));
        assert_eq!(c.world_sticker(Face::Right), Some(Face::Right));
        assert_eq!(c.world_sticker(Face::Up), None);
    }

    #[test]
    fn test_negative_quarters() {
        let mut a = edge_piece();
        let mut b = edge_piece();
        a.apply_quarter_turns(Axis::Y, -1);
        b.apply_quarter_turns(Axis::Y, 3);
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut c = edge_piece();
        assert!(c.is_dirty());
        c.clear_dirty();
        assert!(!c.is_dirty());

        c.apply_quarter_turns(Axis::X, 1);
        assert!(c.is_dirty());
        assert!(c.dirty_flags().contains(DirtyFlags::TRANSFORM));
    }
}
