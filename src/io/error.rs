//! Error types for puzzle construction, topology wiring and solving

use crate::puzzle::side::Side;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
///
/// Construction and topology errors are fatal and surface immediately to the
/// caller of the constructor or loader. State errors indicate a caller logic
/// bug inside a solver and are never handled conditionally. Search exhaustion
/// is not an error; it is reported as the `Completed` change event.
#[derive(Debug)]
pub enum PuzzleError {
    /// Tile segment string is not four characters over {0,1}
    InvalidSegments {
        /// Id of the offending tile
        tile_id: u32,
        /// Side the segments were declared for
        side: Side,
        /// The rejected segment string
        segments: String,
    },

    /// Side name is not one of A, B, C
    InvalidSide {
        /// The rejected side name
        value: String,
    },

    /// Face name is not one of 1, 2, 3, 4
    InvalidFaceName {
        /// The rejected face name
        name: String,
    },

    /// Face holds a tile position count other than 1, 4 or 9
    InvalidPositionCount {
        /// Name of the offending face
        face: String,
        /// Number of tile positions declared
        count: usize,
    },

    /// Tetrahedron was built with a face count other than 4
    WrongFaceCount {
        /// Number of faces supplied
        count: usize,
    },

    /// Declared tile total disagrees with the tile list length
    TileCountMismatch {
        /// Total declared in the definition
        declared: usize,
        /// Tiles actually listed
        actual: usize,
    },

    /// Two tiles in one pool share an id
    DuplicateTileId {
        /// The repeated id
        id: u32,
    },

    /// Pool size differs from the tile position count at solve start
    InsufficientTiles {
        /// Tiles available in the pool
        tiles: usize,
        /// Tile positions to fill
        positions: usize,
    },

    /// A node already holds its three joins
    JoinLimit {
        /// Id of the node being joined
        at: String,
    },

    /// A node was joined to itself
    SelfJoin {
        /// Id of the node being joined
        at: String,
    },

    /// A node already holds a join from this side
    DuplicateJoin {
        /// Id of the node being joined
        at: String,
        /// Side already in use
        side: Side,
    },

    /// A node finished graph construction with fewer than three joins
    MissingJoins {
        /// Id of the incomplete node
        at: String,
        /// Joins actually recorded
        count: usize,
    },

    /// Joined faces hold differing tile position counts
    JoinSizeMismatch {
        /// Face initiating the join
        from: String,
        /// Face being joined to
        to: String,
        /// Position count on the initiating face
        from_count: usize,
        /// Position count on the target face
        to_count: usize,
    },

    /// Two tile positions resolved to the same `{face}-{position}` id
    DuplicatePosition {
        /// The repeated id
        id: String,
    },

    /// A join names a face or tile position that does not exist
    UnknownJoinTarget {
        /// Id of the node being joined
        from: String,
        /// The unresolved target id
        target: String,
    },

    /// A tile was placed onto an occupied position
    PositionOccupied {
        /// Id of the tile already in place
        occupied_by: u32,
    },

    /// An empty position was read, rotated or cleared
    PositionEmpty {
        /// Operation that required a tile
        operation: &'static str,
    },

    /// Rotation count outside 0..=2
    InvalidRotation {
        /// The rejected rotation count
        rotations: u8,
    },

    /// A `{face}-{position}` id does not name a tile position
    UnknownPosition {
        /// The unresolved id
        id: String,
    },

    /// A tile was requested from an empty pool
    NoTilesLeft,

    /// A tile id is absent from the pool
    UnknownTile {
        /// The requested id
        id: u32,
    },

    /// Failed to read a puzzle definition file
    DefinitionRead {
        /// Path to the definition file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse a puzzle definition file
    DefinitionParse {
        /// Path to the definition file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegments {
                tile_id,
                side,
                segments,
            } => {
                write!(
                    f,
                    "Tile {tile_id} side {side}: segments '{segments}' must be 4 characters of 0/1"
                )
            }
            Self::InvalidSide { value } => {
                write!(f, "Invalid side '{value}' (expected A, B or C)")
            }
            Self::InvalidFaceName { name } => {
                write!(f, "Invalid face name '{name}' (expected 1, 2, 3 or 4)")
            }
            Self::InvalidPositionCount { face, count } => {
                write!(
                    f,
                    "Face {face} holds {count} tile positions (expected 1, 4 or 9)"
                )
            }
            Self::WrongFaceCount { count } => {
                write!(f, "Tetrahedron requires exactly 4 faces, got {count}")
            }
            Self::TileCountMismatch { declared, actual } => {
                write!(f, "Definition declares {declared} tiles but lists {actual}")
            }
            Self::DuplicateTileId { id } => {
                write!(f, "Duplicate tile id {id} in pool")
            }
            Self::InsufficientTiles { tiles, positions } => {
                write!(f, "Pool holds {tiles} tiles for {positions} tile positions")
            }
            Self::JoinLimit { at } => {
                write!(f, "{at} already holds 3 joins")
            }
            Self::SelfJoin { at } => {
                write!(f, "{at} cannot join to itself")
            }
            Self::DuplicateJoin { at, side } => {
                write!(f, "{at} already joins from side {side}")
            }
            Self::MissingJoins { at, count } => {
                write!(f, "{at} has {count} joins (expected 3)")
            }
            Self::JoinSizeMismatch {
                from,
                to,
                from_count,
                to_count,
            } => {
                write!(
                    f,
                    "Face {from} ({from_count} positions) cannot join face {to} ({to_count} positions)"
                )
            }
            Self::DuplicatePosition { id } => {
                write!(f, "Duplicate tile position id {id}")
            }
            Self::UnknownJoinTarget { from, target } => {
                write!(f, "{from} joins to unknown target {target}")
            }
            Self::PositionOccupied { occupied_by } => {
                write!(f, "Position already occupied by tile {occupied_by}")
            }
            Self::PositionEmpty { operation } => {
                write!(f, "Cannot {operation} on an empty position")
            }
            Self::InvalidRotation { rotations } => {
                write!(f, "Rotation count {rotations} is out of range (0-2)")
            }
            Self::UnknownPosition { id } => {
                write!(f, "Unknown tile position {id}")
            }
            Self::NoTilesLeft => {
                write!(f, "No tiles left in the pool")
            }
            Self::UnknownTile { id } => {
                write!(f, "Tile {id} is not in the pool")
            }
            Self::DefinitionRead { path, source } => {
                write!(
                    f,
                    "Failed to read definition '{}': {source}",
                    path.display()
                )
            }
            Self::DefinitionParse { path, source } => {
                write!(
                    f,
                    "Failed to parse definition '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DefinitionRead { source, .. } => Some(source),
            Self::DefinitionParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;
