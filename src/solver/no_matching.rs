//! Unconditional filler: places tiles without ever checking matches
//!
//! Useful as a display and stress-test mode: it produces an arbitrary
//! complete filling rather than a solved puzzle, one placement per step,
//! according to configurable position/tile/rotation policies.

use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::pool::TilePool;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::solver::core::Solver;
use crate::solver::event::{PuzzleChange, TilePlacement};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How the next tile position to fill is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionSelection {
    /// Original per-face listing order
    #[default]
    Sequential,
    /// Uniformly random among the unfilled positions
    Random,
}

/// How the next tile is drawn from the pool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileSelection {
    /// Pool (insertion) order
    #[default]
    Sequential,
    /// Uniformly random draw
    Random,
}

/// How placed tiles are rotated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationSelection {
    /// Leave every tile at rotation 0
    #[default]
    None,
    /// Uniformly random rotation count 0-2
    Random,
}

/// Placement policies for the no-matching filler
#[derive(Clone, Copy, Debug)]
pub struct NoMatchingOptions {
    /// Position choice policy
    pub position_selection: PositionSelection,
    /// Tile draw policy
    pub tile_selection: TileSelection,
    /// Rotation policy
    pub rotation_selection: RotationSelection,
    /// Seed for the stochastic policies
    pub seed: u64,
}

impl Default for NoMatchingOptions {
    fn default() -> Self {
        Self {
            position_selection: PositionSelection::Sequential,
            tile_selection: TileSelection::Sequential,
            rotation_selection: RotationSelection::None,
            seed: DEFAULT_SEED,
        }
    }
}

/// Solver variant that fills every position without constraint checking
pub struct NoMatchingSolver {
    tetrahedron: Tetrahedron,
    pool: TilePool,
    empty_positions: Vec<usize>,
    options: NoMatchingOptions,
    rng: StdRng,
    steps: usize,
    finished: bool,
}

impl NoMatchingSolver {
    /// Create a filler over the given puzzle and pool
    ///
    /// # Errors
    ///
    /// Returns `InsufficientTiles` unless the pool holds exactly one tile per
    /// tile position.
    pub fn new(
        tetrahedron: Tetrahedron,
        pool: TilePool,
        options: NoMatchingOptions,
    ) -> Result<Self> {
        if pool.tile_count() != tetrahedron.tile_position_count() {
            return Err(PuzzleError::InsufficientTiles {
                tiles: pool.tile_count(),
                positions: tetrahedron.tile_position_count(),
            });
        }
        let empty_positions = tetrahedron.empty_positions();
        Ok(Self {
            tetrahedron,
            pool,
            empty_positions,
            options,
            rng: StdRng::seed_from_u64(options.seed),
            steps: 0,
            finished: false,
        })
    }

    /// Recover the tetrahedron with its arbitrary complete filling
    pub fn into_tetrahedron(self) -> Tetrahedron {
        self.tetrahedron
    }

    fn next_position(&mut self) -> Option<usize> {
        match self.options.position_selection {
            PositionSelection::Sequential => self.empty_positions.pop(),
            PositionSelection::Random => {
                if self.empty_positions.is_empty() {
                    return None;
                }
                let index = self.rng.random_range(0..self.empty_positions.len());
                Some(self.empty_positions.remove(index))
            }
        }
    }
}

impl Solver for NoMatchingSolver {
    fn next_state(&mut self) -> Result<PuzzleChange> {
        if self.finished {
            return Ok(PuzzleChange::Completed);
        }
        self.steps += 1;

        let Some(position) = self.next_position() else {
            self.finished = true;
            return Ok(PuzzleChange::Completed);
        };

        let tile = match self.options.tile_selection {
            TileSelection::Sequential => self.pool.draw()?,
            TileSelection::Random => self.pool.draw_random(&mut self.rng)?,
        };
        self.tetrahedron.place_tile(position, tile)?;

        if self.options.rotation_selection == RotationSelection::Random {
            let rotations = self.rng.random_range(0..3u8);
            if rotations != 0 {
                self.tetrahedron.set_rotations(position, rotations)?;
            }
        }

        Ok(PuzzleChange::Place {
            placement: TilePlacement::snapshot(&self.tetrahedron, position)?,
        })
    }

    fn force_next_state(&mut self) -> Result<PuzzleChange> {
        self.next_state()
    }

    fn tetrahedron(&self) -> &Tetrahedron {
        &self.tetrahedron
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
