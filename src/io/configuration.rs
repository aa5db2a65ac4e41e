//! Puzzle constants and runtime configuration defaults

/// Number of sides on every tile and tile position
pub const SIDE_COUNT: usize = 3;

/// Number of colored segments encoded per side
pub const SEGMENT_COUNT: usize = 4;

/// Length of a full segment profile (all three sides concatenated)
pub const PROFILE_LENGTH: usize = SIDE_COUNT * SEGMENT_COUNT;

/// Wildcard character accepted by segment pattern matching
pub const SEGMENT_WILDCARD: char = '.';

/// Number of faces on a tetrahedron
pub const FACE_COUNT: usize = 4;

/// Tile position counts a face may legally hold
pub const VALID_POSITION_COUNTS: [usize; 3] = [1, 4, 9];

/// Fixed seed for reproducible stochastic solving
pub const DEFAULT_SEED: u64 = 42;

/// Default ceiling on solver steps before the CLI gives up
pub const DEFAULT_MAX_STEPS: usize = 10_000_000;

/// How many solver steps pass between progress display refreshes
pub const PROGRESS_REFRESH_STEPS: usize = 1024;
