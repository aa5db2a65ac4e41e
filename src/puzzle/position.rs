//! Tile positions: the nodes of the puzzle topology graph

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::side::Side;
use crate::puzzle::state::TilePositionState;

/// A directed adjacency from one side of a position to a side of a neighbor
///
/// The target is an index into the tetrahedron's position arena, resolved in
/// a second pass after all positions exist, so the graph needs no ownership
/// cycles.
#[derive(Clone, Copy, Debug)]
pub struct Join {
    /// Side of the owning position this join leaves from
    pub from: Side,
    /// Side of the target position this join arrives at
    pub to: Side,
    /// Arena index of the target position
    pub target: usize,
}

/// A fixed slot on a face that can hold one tile
///
/// Created once at puzzle-load time and never destroyed during a session; its
/// state mutates repeatedly across solve attempts. Joins are kept ordered by
/// their from-side so join-dependent output is deterministic.
#[derive(Clone, Debug)]
pub struct TilePosition {
    name: String,
    face_name: String,
    joins: Vec<Join>,
    state: TilePositionState,
}

impl TilePosition {
    /// Create an unjoined position owned by the named face
    pub fn new(name: &str, face_name: &str) -> Self {
        Self {
            name: name.to_string(),
            face_name: face_name.to_string(),
            joins: Vec::with_capacity(3),
            state: TilePositionState::new(),
        }
    }

    /// The position's name within its face
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the owning face
    pub fn face_name(&self) -> &str {
        &self.face_name
    }

    /// Globally unique id, `{faceName}-{positionName}`
    pub fn id(&self) -> String {
        format!("{}-{}", self.face_name, self.name)
    }

    /// Record a join to a neighboring position
    ///
    /// # Errors
    ///
    /// Returns `JoinLimit` when three joins already exist, `SelfJoin` when
    /// the target is the position itself, or `DuplicateJoin` when the
    /// from-side is already in use. No partial join is recorded on failure.
    pub fn add_join(&mut self, from: Side, to: Side, target: usize, self_index: usize) -> Result<()> {
        if self.joins.len() >= 3 {
            return Err(PuzzleError::JoinLimit { at: self.id() });
        }
        if target == self_index {
            return Err(PuzzleError::SelfJoin { at: self.id() });
        }
        if self.joins.iter().any(|join| join.from == from) {
            return Err(PuzzleError::DuplicateJoin {
                at: self.id(),
                side: from,
            });
        }
        self.joins.push(Join { from, to, target });
        self.joins.sort_by_key(|join| join.from.index());
        Ok(())
    }

    /// Joins recorded so far, ordered by from-side
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Verify the position finished graph construction with its three joins
    ///
    /// # Errors
    ///
    /// Returns `MissingJoins` when fewer than three joins are recorded.
    pub fn integrity_check(&self) -> Result<()> {
        if self.joins.len() != 3 {
            return Err(PuzzleError::MissingJoins {
                at: self.id(),
                count: self.joins.len(),
            });
        }
        Ok(())
    }

    /// The mutable tile slot
    pub const fn state(&self) -> &TilePositionState {
        &self.state
    }

    /// Mutable access to the tile slot
    pub const fn state_mut(&mut self) -> &mut TilePositionState {
        &mut self.state
    }

    /// Whether no tile is in place
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
