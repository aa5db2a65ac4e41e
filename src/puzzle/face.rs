//! Faces: the four named regions of the tetrahedron

use crate::io::configuration::VALID_POSITION_COUNTS;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::position::TilePosition;
use crate::puzzle::side::Side;

/// A directed adjacency from one side of a face to a side of another face
#[derive(Clone, Debug)]
pub struct FaceJoin {
    /// Side of the owning face this join leaves from
    pub from: Side,
    /// Side of the target face this join arrives at
    pub to: Side,
    /// Name of the target face
    pub face: String,
}

/// One triangular face, subdivided into 1, 4 or 9 tile positions
///
/// Topology is immutable after construction; the tile positions it points at
/// (held in the tetrahedron's arena) mutate during solving.
#[derive(Clone, Debug)]
pub struct Face {
    name: String,
    joins: Vec<FaceJoin>,
    positions: Vec<usize>,
}

impl Face {
    /// Create a face over the given arena indices
    ///
    /// # Errors
    ///
    /// Returns `InvalidFaceName` unless the name is one of 1-4, or
    /// `InvalidPositionCount` unless the face holds 1, 4 or 9 positions.
    pub fn new(name: &str, positions: Vec<usize>) -> Result<Self> {
        if !matches!(name, "1" | "2" | "3" | "4") {
            return Err(PuzzleError::InvalidFaceName {
                name: name.to_string(),
            });
        }
        if !VALID_POSITION_COUNTS.contains(&positions.len()) {
            return Err(PuzzleError::InvalidPositionCount {
                face: name.to_string(),
                count: positions.len(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            joins: Vec::with_capacity(3),
            positions,
        })
    }

    /// The face's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a join to a neighboring face
    ///
    /// # Errors
    ///
    /// Returns `JoinLimit` when three joins already exist, `SelfJoin` when
    /// the target is this face, `DuplicateJoin` when the from-side is already
    /// in use, or `JoinSizeMismatch` when the target holds a different number
    /// of tile positions. No partial join is recorded on failure.
    pub fn join(&mut self, from: Side, to: Side, face: &str, target_count: usize) -> Result<()> {
        if self.joins.len() >= 3 {
            return Err(PuzzleError::JoinLimit {
                at: format!("Face {}", self.name),
            });
        }
        if face == self.name {
            return Err(PuzzleError::SelfJoin {
                at: format!("Face {}", self.name),
            });
        }
        if self.joins.iter().any(|join| join.from == from) {
            return Err(PuzzleError::DuplicateJoin {
                at: format!("Face {}", self.name),
                side: from,
            });
        }
        if self.positions.len() != target_count {
            return Err(PuzzleError::JoinSizeMismatch {
                from: self.name.clone(),
                to: face.to_string(),
                from_count: self.positions.len(),
                to_count: target_count,
            });
        }
        self.joins.push(FaceJoin {
            from,
            to,
            face: face.to_string(),
        });
        self.joins.sort_by_key(|join| join.from.index());
        Ok(())
    }

    /// Face joins recorded so far, ordered by from-side
    pub fn joins(&self) -> &[FaceJoin] {
        &self.joins
    }

    /// Arena indices of the contained tile positions, in insertion order
    pub fn position_indices(&self) -> &[usize] {
        &self.positions
    }

    /// Arena indices of this face's unoccupied positions, in reverse
    /// insertion order (solvers consume these as a stack)
    pub fn empty_positions(&self, arena: &[TilePosition]) -> Vec<usize> {
        let mut empty: Vec<usize> = self
            .positions
            .iter()
            .copied()
            .filter(|&index| arena.get(index).is_some_and(TilePosition::is_empty))
            .collect();
        empty.reverse();
        empty
    }

    /// Verify face-level topology: three joins and a legal position count
    ///
    /// # Errors
    ///
    /// Returns `MissingJoins` or `InvalidPositionCount` on violation. The
    /// contained tile positions are checked by the tetrahedron's full
    /// integrity pass, which owns the arena.
    pub fn integrity_check(&self) -> Result<()> {
        if self.joins.len() != 3 {
            return Err(PuzzleError::MissingJoins {
                at: format!("Face {}", self.name),
                count: self.joins.len(),
            });
        }
        if !VALID_POSITION_COUNTS.contains(&self.positions.len()) {
            return Err(PuzzleError::InvalidPositionCount {
                face: self.name.clone(),
                count: self.positions.len(),
            });
        }
        Ok(())
    }
}
