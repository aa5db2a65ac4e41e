//! Iterative backtracking search over tile assignments
//!
//! A classic depth-first search over permutations of tile-with-rotation
//! assignments, driven by an explicit frame stack instead of recursion so a
//! caller can run it one bounded step at a time: each `next_state` call
//! performs one transition and returns one change event. Running the loop to
//! completion and animating one step per tick are the same code path.

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::pool::TilePool;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::puzzle::tile::Tile;
use crate::solver::event::{PuzzleChange, TilePlacement, display_state, solved_state};
use crate::solver::strategies::{SeedCandidates, Seeded, TrialTile};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Common surface of the autonomous solver variants
pub trait Solver {
    /// Perform one search transition and report the resulting change
    ///
    /// # Errors
    ///
    /// Propagates state errors, which indicate a transition logic bug; a
    /// correct solver never produces one.
    fn next_state(&mut self) -> Result<PuzzleChange>;

    /// Force the search onward even from a frozen (solved) state
    ///
    /// # Errors
    ///
    /// As [`Solver::next_state`].
    fn force_next_state(&mut self) -> Result<PuzzleChange>;

    /// The puzzle being solved
    fn tetrahedron(&self) -> &Tetrahedron;

    /// Number of state transitions taken so far
    fn steps(&self) -> usize;

    /// Initial display snapshot: `Start` or `Empty` per tile position
    fn initial_state(&self) -> Vec<PuzzleChange> {
        display_state(self.tetrahedron())
    }

    /// Final display snapshot: `Final` per occupied tile position
    fn final_state(&self) -> Vec<PuzzleChange> {
        solved_state(self.tetrahedron())
    }
}

/// One level of the search path: a tile position being filled, the rotations
/// left for the tile currently on it, and the local candidate bookkeeping
#[derive(Debug)]
struct Frame {
    position: usize,
    rotations_left: VecDeque<u8>,
    untried: VecDeque<TrialTile>,
    rejected: Vec<Tile>,
}

impl Frame {
    fn new(position: usize, seeded: Seeded) -> Self {
        Self {
            position,
            rotations_left: VecDeque::new(),
            untried: seeded.untried,
            rejected: seeded.rejected,
        }
    }

    /// Tiles available to a position entered below this frame: untried
    /// first, then the ones rejected at this level
    fn remaining_tiles(&self) -> Vec<Tile> {
        self.untried
            .iter()
            .map(|trial| trial.tile.clone())
            .chain(self.rejected.iter().cloned())
            .collect()
    }
}

/// Depth-first backtracking solver, parameterized over a seeding strategy
///
/// Owns the tetrahedron exclusively for the duration of the solve; no other
/// code mutates the graph while a solver holds it.
pub struct BacktrackingSolver<S: SeedCandidates> {
    tetrahedron: Tetrahedron,
    strategy: S,
    /// Positions not yet attempted; popped from the back, which restores the
    /// original per-face listing order of the reversed source list
    empty_positions: Vec<usize>,
    stack: Vec<Frame>,
    current: Frame,
    terminal: Option<PuzzleChange>,
    steps: usize,
}

impl<S: SeedCandidates> BacktrackingSolver<S> {
    /// Create a solver drawing candidate tiles in pool (insertion) order
    ///
    /// # Errors
    ///
    /// Returns `InsufficientTiles` unless the pool holds exactly one tile per
    /// tile position; propagates seeding failures.
    pub fn new(tetrahedron: Tetrahedron, pool: TilePool, strategy: S) -> Result<Self> {
        Self::build(tetrahedron, pool, strategy, None)
    }

    /// Create a solver drawing candidate tiles in seeded random order
    ///
    /// # Errors
    ///
    /// As [`BacktrackingSolver::new`].
    pub fn with_random_draw(
        tetrahedron: Tetrahedron,
        pool: TilePool,
        strategy: S,
        seed: u64,
    ) -> Result<Self> {
        Self::build(tetrahedron, pool, strategy, Some(seed))
    }

    fn build(
        tetrahedron: Tetrahedron,
        mut pool: TilePool,
        strategy: S,
        seed: Option<u64>,
    ) -> Result<Self> {
        if pool.tile_count() != tetrahedron.tile_position_count() {
            return Err(PuzzleError::InsufficientTiles {
                tiles: pool.tile_count(),
                positions: tetrahedron.tile_position_count(),
            });
        }

        let mut candidates = Vec::with_capacity(pool.tile_count());
        match seed {
            None => {
                while !pool.is_empty() {
                    candidates.push(pool.draw()?);
                }
            }
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                while !pool.is_empty() {
                    candidates.push(pool.draw_random(&mut rng)?);
                }
            }
        }

        let mut empty_positions = tetrahedron.empty_positions();
        let first = empty_positions.pop().ok_or(PuzzleError::NoTilesLeft)?;
        let seeded = strategy.seed(&tetrahedron, first, candidates)?;

        Ok(Self {
            tetrahedron,
            strategy,
            empty_positions,
            stack: Vec::new(),
            current: Frame::new(first, seeded),
            terminal: None,
            steps: 0,
        })
    }

    /// Recover the tetrahedron in its current (possibly solved) state
    pub fn into_tetrahedron(self) -> Tetrahedron {
        self.tetrahedron
    }

    fn step(&mut self) -> Result<PuzzleChange> {
        if self.tetrahedron.position(self.current.position).is_empty() {
            if let Some(trial) = self.current.untried.pop_front() {
                return self.place(trial);
            }
            // Exhausted here: hand the position back and resume one level up
            self.empty_positions.push(self.current.position);
            match self.stack.pop() {
                None => {
                    self.terminal = Some(PuzzleChange::Completed);
                    Ok(PuzzleChange::Completed)
                }
                Some(parent) => {
                    self.current = parent;
                    self.rotate_or_remove()
                }
            }
        } else if self.tetrahedron.tiles_match(self.current.position)? {
            if self.empty_positions.is_empty() {
                self.terminal = Some(PuzzleChange::Solved);
                return Ok(PuzzleChange::Solved);
            }
            self.descend()
        } else {
            self.rotate_or_remove()
        }
    }

    /// Push the matching frame and enter the next empty position
    fn descend(&mut self) -> Result<PuzzleChange> {
        let next = self
            .empty_positions
            .pop()
            .ok_or(PuzzleError::NoTilesLeft)?;
        let seeded = self
            .strategy
            .seed(&self.tetrahedron, next, self.current.remaining_tiles())?;
        let parent = std::mem::replace(&mut self.current, Frame::new(next, seeded));
        self.stack.push(parent);
        self.step()
    }

    fn place(&mut self, trial: TrialTile) -> Result<PuzzleChange> {
        let TrialTile {
            tile,
            mut rotations,
        } = trial;
        let first = rotations.pop_front().unwrap_or(0);

        let index = self.current.position;
        self.tetrahedron.place_tile(index, tile)?;
        if first != 0 {
            self.tetrahedron.set_rotations(index, first)?;
        }
        self.current.rotations_left = rotations;

        Ok(PuzzleChange::Place {
            placement: TilePlacement::snapshot(&self.tetrahedron, index)?,
        })
    }

    /// Advance the current tile to its next untried rotation, or take it off
    /// the position once every rotation has failed
    fn rotate_or_remove(&mut self) -> Result<PuzzleChange> {
        let index = self.current.position;
        let from = self.tetrahedron.position(index).state().rotations();

        if let Some(next) = self.current.rotations_left.pop_front() {
            self.tetrahedron.set_rotations(index, next)?;
            return Ok(PuzzleChange::Rotate {
                position: self.tetrahedron.position(index).id(),
                rotations: (next + 3 - from) % 3,
            });
        }

        let placement = TilePlacement::snapshot(&self.tetrahedron, index)?;
        let tile = self.tetrahedron.remove_tile(index)?;
        self.current.rejected.push(tile);
        Ok(PuzzleChange::Remove { placement })
    }
}

impl<S: SeedCandidates> Solver for BacktrackingSolver<S> {
    fn next_state(&mut self) -> Result<PuzzleChange> {
        if let Some(terminal) = &self.terminal {
            return Ok(terminal.clone());
        }
        self.steps += 1;
        self.step()
    }

    fn force_next_state(&mut self) -> Result<PuzzleChange> {
        match self.terminal.take() {
            // Unfreeze a solved search and look for a further solution
            Some(PuzzleChange::Solved) | None => {
                self.steps += 1;
                self.rotate_or_remove()
            }
            Some(terminal) => {
                self.terminal = Some(terminal.clone());
                Ok(terminal)
            }
        }
    }

    fn tetrahedron(&self) -> &Tetrahedron {
        &self.tetrahedron
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
