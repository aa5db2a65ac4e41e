//! Mutable tile slot shared by every tile position

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::tile::Tile;

/// Holds the tile (if any) and rotation count of one tile position
///
/// Created empty alongside its owning position and mutated repeatedly while a
/// solver places, rotates and removes tiles. Rotation is meaningless without a
/// tile in place, so every operation on an empty state except `set_tile`
/// fails.
#[derive(Clone, Debug, Default)]
pub struct TilePositionState {
    tile: Option<Tile>,
    rotations: u8,
}

impl TilePositionState {
    /// Create an empty state
    pub const fn new() -> Self {
        Self {
            tile: None,
            rotations: 0,
        }
    }

    /// Whether no tile is in place
    pub const fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Place a tile, resetting rotation to 0
    ///
    /// # Errors
    ///
    /// Returns `PositionOccupied` if a tile is already in place.
    pub fn set_tile(&mut self, tile: Tile) -> Result<()> {
        if let Some(current) = &self.tile {
            return Err(PuzzleError::PositionOccupied {
                occupied_by: current.id(),
            });
        }
        self.tile = Some(tile);
        self.rotations = 0;
        Ok(())
    }

    /// The tile currently in place
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if no tile is in place.
    pub fn tile(&self) -> Result<&Tile> {
        self.tile.as_ref().ok_or(PuzzleError::PositionEmpty {
            operation: "read tile",
        })
    }

    /// Current rotation count of the placed tile
    pub const fn rotations(&self) -> u8 {
        self.rotations
    }

    /// Set the rotation count directly
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if no tile is in place, or `InvalidRotation`
    /// if the count is outside 0..=2.
    pub fn set_rotations(&mut self, rotations: u8) -> Result<()> {
        if self.tile.is_none() {
            return Err(PuzzleError::PositionEmpty {
                operation: "set rotations",
            });
        }
        if rotations > 2 {
            return Err(PuzzleError::InvalidRotation { rotations });
        }
        self.rotations = rotations;
        Ok(())
    }

    /// Advance rotation by one step
    ///
    /// Returns `false` exactly when the rotation wraps back to 0, meaning a
    /// full cycle has been tried; callers use this to decide between cycling
    /// further and giving up on the tile.
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if no tile is in place.
    pub fn rotate(&mut self) -> Result<bool> {
        if self.tile.is_none() {
            return Err(PuzzleError::PositionEmpty {
                operation: "rotate",
            });
        }
        self.rotations = (self.rotations + 1) % 3;
        Ok(self.rotations != 0)
    }

    /// Remove and return the placed tile, clearing the state
    ///
    /// The caller decides whether the tile goes back to a pool.
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if no tile is in place.
    pub fn remove_tile(&mut self) -> Result<Tile> {
        self.rotations = 0;
        self.tile.take().ok_or(PuzzleError::PositionEmpty {
            operation: "remove tile",
        })
    }
}
