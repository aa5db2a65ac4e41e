//! Discrete puzzle change events
//!
//! The event vocabulary is the sole coupling surface between the solving core
//! and any display layer: the core knows nothing about rendering, and the
//! display needs nothing beyond this closed sum type.

use crate::io::error::Result;
use crate::puzzle::tetrahedron::Tetrahedron;
use serde::Serialize;
use std::fmt;

/// Snapshot of a tile at a position
///
/// Carries the rotation-0 segment profile; consumers apply the rotation count
/// themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TilePlacement {
    /// `{face}-{position}` id of the tile position
    pub position: String,
    /// Id of the tile
    pub tile: u32,
    /// Current rotation count (0-2)
    pub rotations: u8,
    /// The tile's 12-character rotation-0 segment profile
    pub segments: String,
}

impl TilePlacement {
    /// Snapshot the tile currently placed at an arena index
    ///
    /// # Errors
    ///
    /// Returns `PositionEmpty` if the position holds no tile.
    pub fn snapshot(tetrahedron: &Tetrahedron, index: usize) -> Result<Self> {
        let position = tetrahedron.position(index);
        let tile = position.state().tile()?;
        Ok(Self {
            position: position.id(),
            tile: tile.id(),
            rotations: position.state().rotations(),
            segments: tile.profile(0),
        })
    }
}

/// One discrete change in puzzle state, as emitted by every solver
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum PuzzleChange {
    /// A tile position with no tile, reported for initial display
    Empty {
        /// `{face}-{position}` id of the tile position
        position: String,
    },
    /// A tile already in place when display begins
    Start {
        /// Snapshot of the placed tile
        placement: TilePlacement,
    },
    /// A tile was placed on a position
    Place {
        /// Snapshot of the placed tile
        placement: TilePlacement,
    },
    /// A placed tile was rotated
    Rotate {
        /// `{face}-{position}` id of the tile position
        position: String,
        /// Relative rotation delta (1 or 2 steps)
        rotations: u8,
    },
    /// A tile was removed from a position
    Remove {
        /// Snapshot of the tile as it was removed
        placement: TilePlacement,
    },
    /// A tile's final resting place in a solved puzzle
    Final {
        /// Snapshot of the placed tile
        placement: TilePlacement,
    },
    /// A full consistent assignment was found
    Solved,
    /// The search space is exhausted; no (further) solution exists
    Completed,
}

impl PuzzleChange {
    /// Whether this event ends a solve run
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Completed)
    }
}

impl fmt::Display for PuzzleChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { position } => write!(f, "Empty {position}"),
            Self::Start { placement } => write!(
                f,
                "Start tile {} at {} (rotations {})",
                placement.tile, placement.position, placement.rotations
            ),
            Self::Place { placement } => write!(
                f,
                "Place tile {} at {} (rotations {})",
                placement.tile, placement.position, placement.rotations
            ),
            Self::Rotate {
                position,
                rotations,
            } => write!(f, "Rotate {position} by {rotations}"),
            Self::Remove { placement } => {
                write!(f, "Remove tile {} from {}", placement.tile, placement.position)
            }
            Self::Final { placement } => write!(
                f,
                "Final tile {} at {} (rotations {})",
                placement.tile, placement.position, placement.rotations
            ),
            Self::Solved => write!(f, "Solved"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Snapshot every position for initial display: `Start` or `Empty` per slot
pub fn display_state(tetrahedron: &Tetrahedron) -> Vec<PuzzleChange> {
    tetrahedron
        .tile_positions()
        .into_iter()
        .map(|index| {
            TilePlacement::snapshot(tetrahedron, index).map_or_else(
                |_| PuzzleChange::Empty {
                    position: tetrahedron.position(index).id(),
                },
                |placement| PuzzleChange::Start { placement },
            )
        })
        .collect()
}

/// Snapshot every occupied position as its `Final` resting place
pub fn solved_state(tetrahedron: &Tetrahedron) -> Vec<PuzzleChange> {
    tetrahedron
        .tile_positions()
        .into_iter()
        .filter_map(|index| TilePlacement::snapshot(tetrahedron, index).ok())
        .map(|placement| PuzzleChange::Final { placement })
        .collect()
}
