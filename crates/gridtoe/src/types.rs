//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// One of the two players' symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Occupancy of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}
