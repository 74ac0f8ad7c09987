//! Error types for board construction and placement.

use crate::Coord;

/// Error returned when a placement is rejected.
///
/// Placements are validated before anything is written, so a rejected
/// placement leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// The coordinate lies outside `[0, side)` on some axis.
    #[display("Position ({x},{y}) is outside a {side}x{side} board")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Side length of the board.
        side: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),

    /// The game has reached a win or a draw.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for PlacementError {}

/// Error returned when a board cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A board needs at least one cell per side.
    #[display("Board side length must be at least 1")]
    ZeroSide,

    /// The side length squared does not fit in `usize`.
    #[display("Board side length {_0} is too large")]
    SideTooLarge(usize),

    /// Serialized cells do not match the declared side length.
    #[display("Expected {expected} cells, found {found}")]
    CellCountMismatch {
        /// Cells required by the side length.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
}

impl std::error::Error for BoardError {}
