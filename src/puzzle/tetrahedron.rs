//! The assembled puzzle: four faces over a flat tile position arena
//!
//! All tile positions live in one arena owned here; faces and joins refer to
//! them by index. Neighbor-dependent operations (edge matching, candidate
//! patterns) therefore sit on the tetrahedron rather than on the individual
//! position.

use crate::io::configuration::{FACE_COUNT, SEGMENT_COUNT, SEGMENT_WILDCARD};
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::face::Face;
use crate::puzzle::position::TilePosition;
use crate::puzzle::tile::Tile;
use std::collections::HashMap;

/// A named puzzle instance: exactly four faces and their tile positions
#[derive(Clone, Debug)]
pub struct Tetrahedron {
    name: String,
    faces: Vec<Face>,
    positions: Vec<TilePosition>,
    index: HashMap<String, usize>,
}

impl Tetrahedron {
    /// Assemble a tetrahedron from loader-built faces and position arena
    ///
    /// # Errors
    ///
    /// Returns `WrongFaceCount` unless exactly four faces are supplied, or
    /// `DuplicatePosition` if two positions share a `{face}-{position}` id.
    pub fn new(name: &str, faces: Vec<Face>, positions: Vec<TilePosition>) -> Result<Self> {
        if faces.len() != FACE_COUNT {
            return Err(PuzzleError::WrongFaceCount { count: faces.len() });
        }
        let mut index = HashMap::with_capacity(positions.len());
        for (i, position) in positions.iter().enumerate() {
            if index.insert(position.id(), i).is_some() {
                return Err(PuzzleError::DuplicatePosition { id: position.id() });
            }
        }
        Ok(Self {
            name: name.to_string(),
            faces,
            positions,
            index,
        })
    }

    /// The puzzle's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The four faces
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The whole position arena
    pub fn positions(&self) -> &[TilePosition] {
        &self.positions
    }

    /// Total number of tile positions across all faces
    pub fn tile_position_count(&self) -> usize {
        self.positions.len()
    }

    /// Arena index of the position with the given `{face}-{position}` id
    pub fn position_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The position at an arena index
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena; indices must come from this
    /// tetrahedron.
    pub fn position(&self, index: usize) -> &TilePosition {
        &self.positions[index]
    }

    /// Arena indices of all positions, flattened in face order
    pub fn tile_positions(&self) -> Vec<usize> {
        self.faces
            .iter()
            .flat_map(|face| face.position_indices().iter().copied())
            .collect()
    }

    /// Arena indices of unoccupied positions, in reverse listing order
    ///
    /// Consumed as a stack (popped from the back) this yields positions in
    /// the original per-face listing order; the double reversal is preserved
    /// behavior that solver traces depend on.
    pub fn empty_positions(&self) -> Vec<usize> {
        let mut empty: Vec<usize> = self
            .tile_positions()
            .into_iter()
            .filter(|&i| self.positions[i].is_empty())
            .collect();
        empty.reverse();
        empty
    }

    /// Verify the complete topology, short-circuiting on the first failure
    ///
    /// # Errors
    ///
    /// Returns the first face- or position-level violation found.
    pub fn integrity_check(&self) -> Result<()> {
        if self.faces.len() != FACE_COUNT {
            return Err(PuzzleError::WrongFaceCount {
                count: self.faces.len(),
            });
        }
        for face in &self.faces {
            face.integrity_check()?;
            for &i in face.position_indices() {
                self.positions[i].integrity_check()?;
            }
        }
        Ok(())
    }

    /// Whether the tile placed at an arena index matches all its neighbors
    ///
    /// A join to an empty neighbor matches vacuously.
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if the position holds no tile.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn tiles_match(&self, index: usize) -> Result<bool> {
        Ok(self.count_matching_sides(index)? == self.positions[index].joins().len() as u8)
    }

    /// How many of a placed tile's joins currently match (0-3)
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if the position holds no tile.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn count_matching_sides(&self, index: usize) -> Result<u8> {
        let position = &self.positions[index];
        let tile = position.state().tile()?;
        let rotations = position.state().rotations();

        let mut matching = 0;
        for join in position.joins() {
            let neighbor = &self.positions[join.target];
            let matches = match neighbor.state().tile() {
                Err(_) => true,
                Ok(neighbor_tile) => {
                    tile.segments_for_side(rotations, join.from)
                        == neighbor_tile
                            .segments_to_match_with(neighbor.state().rotations(), join.to)
                }
            };
            if matches {
                matching += 1;
            }
        }
        Ok(matching)
    }

    /// Segment pattern a tile must present to fit an empty position
    ///
    /// One 4-character block per join in side order: wildcards for an empty
    /// neighbor, otherwise the neighbor's match-facing segment code. Suitable
    /// for [`Tile::has_side_segments`].
    ///
    /// # Errors
    ///
    /// Returns `PositionOccupied` if the position already holds a tile.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn segments_to_find(&self, index: usize) -> Result<String> {
        let position = &self.positions[index];
        if let Ok(tile) = position.state().tile() {
            return Err(PuzzleError::PositionOccupied {
                occupied_by: tile.id(),
            });
        }

        let mut pattern = String::with_capacity(position.joins().len() * SEGMENT_COUNT);
        for join in position.joins() {
            let neighbor = &self.positions[join.target];
            match neighbor.state().tile() {
                Err(_) => {
                    for _ in 0..SEGMENT_COUNT {
                        pattern.push(SEGMENT_WILDCARD);
                    }
                }
                Ok(neighbor_tile) => pattern.push_str(
                    &neighbor_tile.segments_to_match_with(neighbor.state().rotations(), join.to),
                ),
            }
        }
        Ok(pattern)
    }

    /// Sum of matching join counts over all occupied positions
    ///
    /// Reaches `tile_position_count() * 3` exactly when the puzzle is solved;
    /// also serves as a fitness-style score for partial fillings.
    pub fn count_tile_sides_matching(&self) -> usize {
        (0..self.positions.len())
            .filter_map(|i| self.count_matching_sides(i).ok())
            .map(usize::from)
            .sum()
    }

    /// Whether every occupied position's every join matches
    pub fn is_solved(&self) -> bool {
        self.count_tile_sides_matching() == self.tile_position_count() * 3
    }

    /// Place a tile at an arena index (rotation resets to 0)
    ///
    /// # Errors
    ///
    /// Returns `PositionOccupied` if a tile is already in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn place_tile(&mut self, index: usize, tile: Tile) -> Result<()> {
        self.positions[index].state_mut().set_tile(tile)
    }

    /// Set the rotation count of the tile at an arena index
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` or `InvalidRotation` on misuse.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn set_rotations(&mut self, index: usize, rotations: u8) -> Result<()> {
        self.positions[index].state_mut().set_rotations(rotations)
    }

    /// Advance the rotation of the tile at an arena index by one step
    ///
    /// Returns `false` exactly when the rotation wraps back to 0.
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if the position holds no tile.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn rotate(&mut self, index: usize) -> Result<bool> {
        self.positions[index].state_mut().rotate()
    }

    /// Remove and return the tile at an arena index
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if the position holds no tile.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the arena.
    pub fn remove_tile(&mut self, index: usize) -> Result<Tile> {
        self.positions[index].state_mut().remove_tile()
    }
}
