//! Tetrahedral tile-matching puzzle engine with backtracking solvers
//!
//! The system models a tetrahedron whose four triangular faces are subdivided
//! into tile positions, loads tile sets with colored edge segments, and fills
//! the positions so that every adjoining edge matches. Solving is exposed as a
//! steppable state machine emitting discrete change events, so callers can run
//! to completion or animate one step at a time.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Puzzle data model: sides, tiles, positions, faces, tetrahedron and pool
pub mod puzzle;
/// Backtracking solver core, strategy variants and change events
pub mod solver;

pub use io::error::{PuzzleError, Result};
