//! Static lookup tables for the six directions and six corners of a tile.

use crate::hex::{Hex, HexF};

/// Unit vector to each of the six adjacent tiles. Callers rely on this exact
/// order to rotate by adding to the index, so don't reorder it.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new_qr(1, 0),
    Hex::new_qr(1, -1),
    Hex::new_qr(0, -1),
    Hex::new_qr(-1, 0),
    Hex::new_qr(-1, 1),
    Hex::new_qr(0, 1),
];

/// Offset from the center of a tile to each of its six vertices. Vertex `i`
/// is shared with the neighbors in directions `i` and `i + 1`, so it sits at
/// the centroid of those three tile centers:
/// `(DIRECTIONS[i] + DIRECTIONS[i + 1]) / 3`.
pub const CORNER_OFFSETS: [HexF; 6] = [
    HexF::new_unchecked(2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0),
    HexF::new_unchecked(1.0 / 3.0, -2.0 / 3.0, 1.0 / 3.0),
    HexF::new_unchecked(-1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0),
    HexF::new_unchecked(-2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
    HexF::new_unchecked(-1.0 / 3.0, 2.0 / 3.0, -1.0 / 3.0),
    HexF::new_unchecked(1.0 / 3.0, 1.0 / 3.0, -2.0 / 3.0),
];

/// Map any direction index onto `0..6`. This has to be a floor modulo, not
/// `%`, because `-1 % 6 == -1`.
pub fn wrap_index(dir: i32) -> usize {
    dir.rem_euclid(DIRECTIONS.len() as i32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0), 0);
        assert_eq!(wrap_index(5), 5);
        assert_eq!(wrap_index(6), 0);
        assert_eq!(wrap_index(13), 1);
        assert_eq!(wrap_index(-1), 5);
        assert_eq!(wrap_index(-6), 0);
        assert_eq!(wrap_index(-7), 5);
    }

    #[test]
    fn test_directions_are_unit_steps() {
        for dir in DIRECTIONS.iter() {
            assert_eq!(dir.distance_from_origin(), 1);
        }
    }

    #[test]
    fn test_corner_offsets_are_centroids() {
        for i in 0..6 {
            let centroid = HexF::from(DIRECTIONS[i] + DIRECTIONS[(i + 1) % 6])
                * (1.0 / 3.0);
            assert_eq!(CORNER_OFFSETS[i], centroid);
            assert!((CORNER_OFFSETS[i].q()
                + CORNER_OFFSETS[i].r()
                + CORNER_OFFSETS[i].s())
            .abs()
                < 1e-12);
        }
    }
}
