//! Puzzle data model
//!
//! Leaves first: sides identify triangle edges, tiles carry segment patterns,
//! position states hold placed tiles, positions and faces form the topology
//! graph, the tetrahedron aggregates it all, and the pool holds unplaced
//! tiles.

/// Faces: the four named regions of the tetrahedron
pub mod face;
/// The bag of tiles not yet placed
pub mod pool;
/// Tile positions: the nodes of the topology graph
pub mod position;
/// Triangle side identification
pub mod side;
/// Mutable tile slot shared by every tile position
pub mod state;
/// The assembled puzzle
pub mod tetrahedron;
/// Triangular tiles with precomputed rotations
pub mod tile;

pub use face::Face;
pub use pool::TilePool;
pub use position::TilePosition;
pub use side::Side;
pub use state::TilePositionState;
pub use tetrahedron::Tetrahedron;
pub use tile::Tile;
