//! The bag of tiles not yet placed on the tetrahedron

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::tile::Tile;
use rand::Rng;
use rand::rngs::StdRng;

/// Mutable, insertion-ordered collection of unplaced tiles
///
/// Ids are unique within a pool. Drawing removes a tile; returning re-adds
/// it, so a draw/return round trip restores the pool's content (order aside).
#[derive(Clone, Debug, Default)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Build a pool from a tile list, preserving order
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTileId` if two tiles share an id.
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        for (i, tile) in tiles.iter().enumerate() {
            if tiles[..i].iter().any(|other| other.id() == tile.id()) {
                return Err(PuzzleError::DuplicateTileId { id: tile.id() });
            }
        }
        Ok(Self { tiles })
    }

    /// Number of tiles remaining
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tiles remain
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw the next tile in insertion order
    ///
    /// # Errors
    ///
    /// Returns `NoTilesLeft` when the pool is empty.
    pub fn draw(&mut self) -> Result<Tile> {
        if self.tiles.is_empty() {
            return Err(PuzzleError::NoTilesLeft);
        }
        Ok(self.tiles.remove(0))
    }

    /// Draw a uniformly random tile using the supplied generator
    ///
    /// # Errors
    ///
    /// Returns `NoTilesLeft` when the pool is empty.
    pub fn draw_random(&mut self, rng: &mut StdRng) -> Result<Tile> {
        if self.tiles.is_empty() {
            return Err(PuzzleError::NoTilesLeft);
        }
        let index = rng.random_range(0..self.tiles.len());
        Ok(self.tiles.remove(index))
    }

    /// Remove and return the tile with the given id
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` when no tile has that id.
    pub fn take(&mut self, id: u32) -> Result<Tile> {
        let index = self
            .tiles
            .iter()
            .position(|tile| tile.id() == id)
            .ok_or(PuzzleError::UnknownTile { id })?;
        Ok(self.tiles.remove(index))
    }

    /// Return a previously drawn tile to the back of the pool
    pub fn return_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Ids of the remaining tiles, in pool order
    pub fn tile_ids(&self) -> Vec<u32> {
        self.tiles.iter().map(Tile::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn pool() -> TilePool {
        let tiles = (1..=4)
            .map(|id| Tile::new(id, "0000", "0101", "1111").unwrap())
            .collect();
        TilePool::new(tiles).unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let tiles = vec![
            Tile::new(1, "0000", "0101", "1111").unwrap(),
            Tile::new(1, "1111", "0101", "0000").unwrap(),
        ];
        assert!(matches!(
            TilePool::new(tiles),
            Err(PuzzleError::DuplicateTileId { id: 1 })
        ));
    }

    #[test]
    fn test_sequential_draw_to_empty() {
        let mut pool = pool();
        for expected in 1u32..=4 {
            assert_eq!(pool.tile_count(), (5 - expected) as usize);
            assert_eq!(pool.draw().unwrap().id(), expected);
        }
        assert!(pool.is_empty());
        assert!(matches!(pool.draw(), Err(PuzzleError::NoTilesLeft)));
    }

    #[test]
    fn test_draw_return_round_trip() {
        let mut pool = pool();
        let mut original = pool.tile_ids();

        let first = pool.draw().unwrap();
        let second = pool.draw().unwrap();
        pool.return_tile(first);
        pool.return_tile(second);

        let mut restored = pool.tile_ids();
        original.sort_unstable();
        restored.sort_unstable();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_random_draw_is_seeded_and_exhaustive() {
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);
        let mut pool_a = pool();
        let mut pool_b = pool();

        let drawn_a: Vec<u32> = (0..4)
            .map(|_| pool_a.draw_random(&mut rng_a).unwrap().id())
            .collect();
        let drawn_b: Vec<u32> = (0..4)
            .map(|_| pool_b.draw_random(&mut rng_b).unwrap().id())
            .collect();

        assert_eq!(drawn_a, drawn_b, "same seed, same draw order");
        let mut sorted = drawn_a;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert!(pool_a.draw_random(&mut rng_a).is_err());
    }

    #[test]
    fn test_take_by_id() {
        let mut pool = pool();
        assert_eq!(pool.take(3).unwrap().id(), 3);
        assert!(matches!(pool.take(3), Err(PuzzleError::UnknownTile { id: 3 })));
        assert_eq!(pool.tile_count(), 3);
    }
}
