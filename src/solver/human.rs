//! Externally-driven placement for interactive play
//!
//! Unlike the autonomous variants, the human solver takes no steps of its
//! own: an outside caller chooses every placement, rotation and removal, and
//! receives the same change event vocabulary the autonomous solvers emit so
//! one display layer serves both.

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::pool::TilePool;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::puzzle::tile::Tile;
use crate::solver::event::{PuzzleChange, TilePlacement, display_state};

/// Interactive solver: the caller drives, the engine enforces the rules
pub struct HumanSolver {
    tetrahedron: Tetrahedron,
    pool: TilePool,
}

impl HumanSolver {
    /// Create an interactive session over the given puzzle and pool
    ///
    /// # Errors
    ///
    /// Returns `InsufficientTiles` unless the pool holds exactly one tile per
    /// tile position.
    pub fn new(tetrahedron: Tetrahedron, pool: TilePool) -> Result<Self> {
        if pool.tile_count() != tetrahedron.tile_position_count() {
            return Err(PuzzleError::InsufficientTiles {
                tiles: pool.tile_count(),
                positions: tetrahedron.tile_position_count(),
            });
        }
        Ok(Self { tetrahedron, pool })
    }

    /// The puzzle being played
    pub const fn tetrahedron(&self) -> &Tetrahedron {
        &self.tetrahedron
    }

    /// Tiles still waiting in the pool
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Initial display snapshot: `Start` or `Empty` per tile position
    pub fn initial_state(&self) -> Vec<PuzzleChange> {
        display_state(&self.tetrahedron)
    }

    fn position_index(&self, position_id: &str) -> Result<usize> {
        self.tetrahedron
            .position_index(position_id)
            .ok_or_else(|| PuzzleError::UnknownPosition {
                id: position_id.to_string(),
            })
    }

    /// Place the identified pool tile on the identified empty position
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition`, `UnknownTile` or `PositionOccupied` when
    /// the request is impossible; the pool keeps the tile on failure.
    pub fn place(&mut self, tile_id: u32, position_id: &str) -> Result<PuzzleChange> {
        let index = self.position_index(position_id)?;
        if let Ok(tile) = self.tetrahedron.position(index).state().tile() {
            return Err(PuzzleError::PositionOccupied {
                occupied_by: tile.id(),
            });
        }
        let tile: Tile = self.pool.take(tile_id)?;
        self.tetrahedron.place_tile(index, tile)?;
        Ok(PuzzleChange::Place {
            placement: TilePlacement::snapshot(&self.tetrahedron, index)?,
        })
    }

    /// Rotate the tile on the identified position by one step
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition` or `PositionEmpty` when impossible.
    pub fn rotate(&mut self, position_id: &str) -> Result<PuzzleChange> {
        let index = self.position_index(position_id)?;
        self.tetrahedron.rotate(index)?;
        Ok(PuzzleChange::Rotate {
            position: position_id.to_string(),
            rotations: 1,
        })
    }

    /// Take the tile off the identified position, back into the pool
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition` or `PositionEmpty` when impossible.
    pub fn remove(&mut self, position_id: &str) -> Result<PuzzleChange> {
        let index = self.position_index(position_id)?;
        let placement = TilePlacement::snapshot(&self.tetrahedron, index)?;
        let tile = self.tetrahedron.remove_tile(index)?;
        self.pool.return_tile(tile);
        Ok(PuzzleChange::Remove { placement })
    }

    /// Whether the placed tile on the identified position matches its
    /// neighbors
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition` or `PositionEmpty` when impossible.
    pub fn tiles_match(&self, position_id: &str) -> Result<bool> {
        let index = self.position_index(position_id)?;
        self.tetrahedron.tiles_match(index)
    }

    /// Report `Solved` once every position is filled and every edge matches
    pub fn check(&self) -> Option<PuzzleChange> {
        self.tetrahedron.is_solved().then_some(PuzzleChange::Solved)
    }
}
