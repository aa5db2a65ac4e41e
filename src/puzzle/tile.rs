//! Triangular tiles with precomputed rotated segment patterns
//!
//! A tile carries a 4-segment 0/1 code per side. Rotating a tile by one step
//! cyclically shifts which physical edge faces which logical side, so all
//! three rotations are precomputed at construction and lookups stay free of
//! allocation during solving.

use crate::io::configuration::{PROFILE_LENGTH, SEGMENT_COUNT, SEGMENT_WILDCARD};
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::side::Side;
use std::fmt;

/// An immutable triangular tile with one segment code per side
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: u32,
    /// Segment codes indexed by [rotation][side]
    segments: [[String; 3]; 3],
}

impl Tile {
    /// Build a tile from its rotation-0 segment codes for sides A, B and C
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegments` if any code is not exactly four characters
    /// over the alphabet {0,1}.
    pub fn new(id: u32, side_a: &str, side_b: &str, side_c: &str) -> Result<Self> {
        let original = [side_a, side_b, side_c];
        for (side, segments) in Side::ALL.into_iter().zip(original) {
            if segments.len() != SEGMENT_COUNT || !segments.bytes().all(|b| b == b'0' || b == b'1')
            {
                return Err(PuzzleError::InvalidSegments {
                    tile_id: id,
                    side,
                    segments: segments.to_string(),
                });
            }
        }

        // Rotation r's logical side s shows the original side at cyclic
        // position (s - r) mod 3.
        let segments = std::array::from_fn(|rotation| {
            std::array::from_fn(|side| original[(side + 3 - rotation) % 3].to_string())
        });

        Ok(Self { id, segments })
    }

    /// The tile's id, unique within its pool
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Segment code shown on the given logical side under the given rotation
    pub fn segments_for_side(&self, rotations: u8, side: Side) -> &str {
        &self.segments[(rotations % 3) as usize][side.index()]
    }

    /// Segment code for the given side as a neighboring position reads it
    ///
    /// Two tiles facing each other present their shared edge in opposite
    /// orientation, so the comparison form is the character-reversed code.
    pub fn segments_to_match_with(&self, rotations: u8, side: Side) -> String {
        self.segments_for_side(rotations, side).chars().rev().collect()
    }

    /// Full 12-character segment profile (sides A, B, C) under a rotation
    pub fn profile(&self, rotations: u8) -> String {
        let mut profile = String::with_capacity(PROFILE_LENGTH);
        for side in Side::ALL {
            profile.push_str(self.segments_for_side(rotations, side));
        }
        profile
    }

    /// Rotations whose profile matches the given 12-character pattern
    ///
    /// The pattern may use `.` to mean "any segment". Patterns of the wrong
    /// length match no rotation.
    pub fn has_side_segments(&self, pattern: &str) -> Vec<u8> {
        if pattern.len() != PROFILE_LENGTH {
            return Vec::new();
        }
        (0..3u8)
            .filter(|&rotations| {
                self.profile(rotations)
                    .chars()
                    .zip(pattern.chars())
                    .all(|(have, want)| want == SEGMENT_WILDCARD || have == want)
            })
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile {} [A={} B={} C={}]",
            self.id,
            self.segments_for_side(0, Side::A),
            self.segments_for_side(0, Side::B),
            self.segments_for_side(0, Side::C),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(1, "1000", "1100", "1110").unwrap()
    }

    #[test]
    fn test_rejects_malformed_segments() {
        assert!(Tile::new(1, "100", "1100", "1110").is_err());
        assert!(Tile::new(1, "10001", "1100", "1110").is_err());
        assert!(Tile::new(1, "1000", "12a0", "1110").is_err());
    }

    #[test]
    fn test_rotation_shifts_sides_cyclically() {
        let tile = tile();
        // One rotation step moves the original C edge onto logical side A
        assert_eq!(tile.segments_for_side(1, Side::A), "1110");
        assert_eq!(tile.segments_for_side(1, Side::B), "1000");
        assert_eq!(tile.segments_for_side(1, Side::C), "1100");
        // Three steps restore the original assignment
        for side in Side::ALL {
            assert_eq!(
                tile.segments_for_side(0, side),
                tile.segments_for_side(3 % 3, side)
            );
        }
    }

    #[test]
    fn test_match_form_is_reversed() {
        let tile = tile();
        for rotations in 0..3 {
            for side in Side::ALL {
                let forward = tile.segments_for_side(rotations, side);
                let matching = tile.segments_to_match_with(rotations, side);
                assert_eq!(matching.chars().rev().collect::<String>(), forward);
            }
        }
    }

    #[test]
    fn test_profile_concatenates_sides() {
        let tile = tile();
        assert_eq!(tile.profile(0), "100011001110");
        assert_eq!(tile.profile(1), "111010001100");
    }

    #[test]
    fn test_pattern_filtering() {
        let tile = tile();
        assert_eq!(tile.has_side_segments("............"), vec![0, 1, 2]);
        assert_eq!(tile.has_side_segments("1000........"), vec![0]);
        assert_eq!(tile.has_side_segments("1110....1100"), vec![1]);
        assert!(tile.has_side_segments("0001........").is_empty());
        assert!(tile.has_side_segments("....").is_empty());
    }
}
