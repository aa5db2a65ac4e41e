//! Triangle side identification

use crate::io::error::{PuzzleError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One of the three sides of a triangular tile or tile position
///
/// Sides carry no meaningful order; only equality and enumeration matter.
/// The cyclic ordering A→B→C→A is fixed and used by tile rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Side {
    /// Side A
    A,
    /// Side B
    B,
    /// Side C
    C,
}

impl Side {
    /// All three sides in cyclic order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Position of this side in the cyclic ordering
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// Side at the given cyclic position (taken modulo 3)
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::A,
            1 => Self::B,
            _ => Self::C,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

impl FromStr for Side {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(PuzzleError::InvalidSide {
                value: s.to_string(),
            }),
        }
    }
}
