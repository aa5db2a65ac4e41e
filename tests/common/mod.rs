//! Shared fixtures for integration tests

use std::path::Path;
use tetratile::io::loader::load_puzzle;
use tetratile::puzzle::{TilePool, Tetrahedron};

/// Load the shipped 4-position test puzzle
///
/// Its tile set has a known solution: tile 1 at 1-1, tile 3 at 2-1, tile 4 at
/// 3-1 and tile 2 at 4-1, all at rotation 0.
pub fn load_test_puzzle() -> (Tetrahedron, TilePool) {
    load_puzzle(Path::new("data/test.json")).unwrap()
}

/// Load the shipped 16-position pocket puzzle
pub fn load_pocket_puzzle() -> (Tetrahedron, TilePool) {
    load_puzzle(Path::new("data/pocket.json")).unwrap()
}
