//! Grid coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the grid.
///
/// `x` is the column and `y` the row, both counted from the top-left corner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    derive_new::new,
)]
#[display("({x},{y})")]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Returns true if both components lie in `[0, side)`.
    pub fn in_bounds(self, side: usize) -> bool {
        self.x < side && self.y < side
    }

    /// Row-major index for a grid of the given side length.
    pub fn to_index(self, side: usize) -> usize {
        self.y * side + self.x
    }

    /// Inverse of [`Coord::to_index`].
    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            x: index % side,
            y: index / side,
        }
    }

    /// Moves one step along `(dx, dy)`, or `None` when that leaves the grid.
    pub fn step(self, (dx, dy): (isize, isize), side: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Self { x, y };
        next.in_bounds(side).then_some(next)
    }
}

/// Failure to parse a coordinate from `"x,y"` text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid coordinate {input:?}: expected \"x,y\" with non-negative integers")]
pub struct CoordParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoordParseError {
            input: s.to_string(),
        };
        let (x, y) = s.trim().split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self { x, y })
    }
}
