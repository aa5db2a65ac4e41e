//! Candidate seeding strategies for the backtracking core
//!
//! The backtracking driver is shared; variants differ only in how the
//! candidate queue for a freshly entered tile position is seeded. Each
//! strategy is a small value implementing one method.

use crate::io::error::Result;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::puzzle::tile::Tile;
use std::collections::VecDeque;

/// A candidate tile together with the rotations still worth trying at the
/// current position, in try order
#[derive(Clone, Debug)]
pub struct TrialTile {
    /// The candidate tile
    pub tile: Tile,
    /// Rotations left to try
    pub rotations: VecDeque<u8>,
}

/// Result of seeding a position's candidate queue
#[derive(Debug, Default)]
pub struct Seeded {
    /// Candidates to try, in order
    pub untried: VecDeque<TrialTile>,
    /// Candidates dismissed without trial; they stay available to positions
    /// entered deeper in the search
    pub rejected: Vec<Tile>,
}

/// Seeds the untried-tile queue when the search enters a tile position
pub trait SeedCandidates {
    /// Partition the candidates into an ordered trial queue and pre-rejects
    ///
    /// # Errors
    ///
    /// Propagates graph inspection failures; strategies themselves add none
    /// under correct operation.
    fn seed(&self, tetrahedron: &Tetrahedron, position: usize, candidates: Vec<Tile>)
    -> Result<Seeded>;
}

/// Brute force: every candidate is tried at every rotation, no pruning
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSeed;

impl SeedCandidates for ExhaustiveSeed {
    fn seed(
        &self,
        _tetrahedron: &Tetrahedron,
        _position: usize,
        candidates: Vec<Tile>,
    ) -> Result<Seeded> {
        Ok(Seeded {
            untried: candidates
                .into_iter()
                .map(|tile| TrialTile {
                    tile,
                    rotations: VecDeque::from([0, 1, 2]),
                })
                .collect(),
            rejected: Vec::new(),
        })
    }
}

/// Only-valid: candidates are filtered against the position's known neighbor
/// constraints, so tiles and rotations that cannot possibly match are
/// dismissed before any trial
#[derive(Clone, Copy, Debug, Default)]
pub struct PrunedSeed;

impl SeedCandidates for PrunedSeed {
    fn seed(
        &self,
        tetrahedron: &Tetrahedron,
        position: usize,
        candidates: Vec<Tile>,
    ) -> Result<Seeded> {
        let pattern = tetrahedron.segments_to_find(position)?;

        let mut seeded = Seeded::default();
        for tile in candidates {
            let rotations = tile.has_side_segments(&pattern);
            if rotations.is_empty() {
                seeded.rejected.push(tile);
            } else {
                seeded.untried.push_back(TrialTile {
                    tile,
                    rotations: rotations.into(),
                });
            }
        }
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::face::Face;
    use crate::puzzle::position::TilePosition;
    use crate::puzzle::side::Side;

    fn tetrahedron() -> Tetrahedron {
        let names = ["1", "2", "3", "4"];
        let pairing = [
            (0, 1, Side::A),
            (2, 3, Side::A),
            (0, 2, Side::B),
            (1, 3, Side::B),
            (0, 3, Side::C),
            (1, 2, Side::C),
        ];
        let mut faces = Vec::new();
        let mut positions = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            positions.push(TilePosition::new("1", name));
            faces.push(Face::new(name, vec![i]).unwrap());
        }
        for (li, ri, side) in pairing {
            faces[li].join(side, side, names[ri], 1).unwrap();
            faces[ri].join(side, side, names[li], 1).unwrap();
            positions[li].add_join(side, side, ri, li).unwrap();
            positions[ri].add_join(side, side, li, ri).unwrap();
        }
        Tetrahedron::new("small", faces, positions).unwrap()
    }

    #[test]
    fn test_exhaustive_seed_keeps_everything() {
        let tetrahedron = tetrahedron();
        let candidates = vec![
            Tile::new(1, "1000", "1100", "1110").unwrap(),
            Tile::new(2, "0001", "0010", "0100").unwrap(),
        ];
        let seeded = ExhaustiveSeed.seed(&tetrahedron, 0, candidates).unwrap();
        assert_eq!(seeded.untried.len(), 2);
        assert!(seeded.rejected.is_empty());
        for trial in &seeded.untried {
            assert_eq!(trial.rotations, VecDeque::from([0, 1, 2]));
        }
    }

    #[test]
    fn test_pruned_seed_dismisses_impossible_candidates() {
        let mut tetrahedron = tetrahedron();
        tetrahedron
            .place_tile(0, Tile::new(1, "1000", "1100", "1110").unwrap())
            .unwrap();

        // Position 2-1 needs 0001 facing side A; 3-1 and 4-1 are empty
        let candidates = vec![
            Tile::new(2, "0100", "1011", "0111").unwrap(),
            Tile::new(3, "0001", "1101", "1010").unwrap(),
        ];
        let seeded = PrunedSeed.seed(&tetrahedron, 1, candidates).unwrap();

        assert_eq!(seeded.untried.len(), 1);
        assert_eq!(seeded.untried[0].tile.id(), 3);
        assert_eq!(seeded.untried[0].rotations, VecDeque::from([0]));
        assert_eq!(seeded.rejected.len(), 1);
        assert_eq!(seeded.rejected[0].id(), 2);
    }
}
