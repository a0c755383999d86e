//! The hard-coded cube layout tables
//!
//! 26 lattice positions (6 face centers, 12 edges, 8 corners; the hidden core
//! at the origin is omitted) and the sticker kit each piece is assembled
//! with. Both tables are consumed once when building the solved cube.

use crate::cubelet::Cubelet;
use crate::twist::Face;

/// Number of cubelets in the cube
pub const CUBELET_COUNT: usize = 26;

/// Lattice positions of all cubelets: centers, then edges, then corners
pub const POSITIONS: [[i8; 3]; CUBELET_COUNT] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
    [1, 1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, -1],
    [1, -1, 0],
    [-1, 1, 0],
    [1, 0, -1],
    [-1, 0, 1],
    [0, 1, 1],
    [0, -1, -1],
    [0, 1, -1],
    [0, -1, 1],
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 1],
    [-1, 1, 1],
    [1, -1, -1],
    [-1, 1, -1],
    [-1, -1, 1],
    [-1, -1, -1],
];

/// Sticker kit per cubelet, in the same order as [`POSITIONS`]
///
/// Each kit lists the faces the piece shows when solved; every other side is
/// bare plastic.
pub const STICKER_KITS: [&[Face]; CUBELET_COUNT] = [
    &[Face::Right],
    &[Face::Left],
    &[Face::Up],
    &[Face::Down],
    &[Face::Front],
    &[Face::Back],
    &[Face::Right, Face::Up],
    &[Face::Left, Face::Down],
    &[Face::Right, Face::Front],
    &[Face::Left, Face::Back],
    &[Face::Right, Face::Down],
    &[Face::Left, Face::Up],
    &[Face::Right, Face::Back],
    &[Face::Left, Face::Front],
    &[Face::Up, Face::Front],
    &[Face::Down, Face::Back],
    &[Face::Up, Face::Back],
    &[Face::Down, Face::Front],
    &[Face::Right, Face::Up, Face::Front],
    &[Face::Right, Face::Up, Face::Back],
    &[Face::Right, Face::Down, Face::Front],
    &[Face::Left, Face::Up, Face::Front],
    &[Face::Right, Face::Down, Face::Back],
    &[Face::Left, Face::Up, Face::Back],
    &[Face::Left, Face::Down, Face::Front],
    &[Face::Left, Face::Down, Face::Back],
];

/// Assemble the solved cube's pieces from the layout tables
pub fn solved() -> Vec<Cubelet> {
    POSITIONS
        .iter()
        .zip(STICKER_KITS.iter())
        .map(|(&pos, kit)| {
            let mut stickers = [None; 6];
            for &face in *kit {
                stickers[face.index()] = Some(face);
            }
            Cubelet::new(pos, stickers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_counts() {
        let pieces = solved();
        assert_eq!(pieces.len(), CUBELET_COUNT);
        assert_eq!(pieces.iter().filter(|c| c.is_center()).count(), 6);
        assert_eq!(pieces.iter().filter(|c| c.is_edge()).count(), 12);
        assert_eq!(pieces.iter().filter(|c| c.is_corner()).count(), 8);
    }

    #[test]
    fn test_no_core_piece() {
        assert!(!POSITIONS.contains(&[0, 0, 0]));
    }

    #[test]
    fn test_positions_are_unique() {
        for (i, a) in POSITIONS.iter().enumerate() {
            for b in POSITIONS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_kits_match_positions() {
        // A piece shows exactly the faces its position touches
        for (pos, kit) in POSITIONS.iter().zip(STICKER_KITS.iter()) {
            for face in Face::ALL {
                let touches = pos[face.axis().index()] == face.sign();
                assert_eq!(
                    kit.contains(&face),
                    touches,
                    "kit mismatch at {:?} for {:?}",
                    pos,
                    face
                );
            }
        }
    }

    #[test]
    fn test_sticker_totals() {
        let pieces = solved();
        let total: usize = pieces.iter().map(|c| c.sticker_count()).sum();
        assert_eq!(total, 54);

        for face in Face::ALL {
            let count: usize = pieces
                .iter()
                .flat_map(|c| c.stickers().iter())
                .filter(|s| **s == Some(face))
                .count();
            assert_eq!(count, 9, "expected 9 {:?} stickers", face);
        }
    }
}
