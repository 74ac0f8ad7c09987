//! Monotonic grid invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, Grid};

/// Invariant: replaying the history onto an empty grid never overwrites a
/// cell and reproduces the current grid.
pub struct MonotonicGridInvariant;

impl Invariant<Board> for MonotonicGridInvariant {
    fn holds(board: &Board) -> bool {
        let Ok(mut reconstructed) = Grid::new(board.side()) else {
            return false;
        };

        for mov in board.history() {
            if !reconstructed.is_vacant(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, Cell::Occupied(mov.mark));
        }

        reconstructed == *board.grid()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Mark};

    #[test]
    fn test_empty_board_holds() {
        let board = Board::new(3, Mark::X).unwrap();
        assert!(MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_moves_hold() {
        let coords = [Coord::new(0, 0), Coord::new(2, 2), Coord::new(1, 0)];
        let board = Board::replay(3, Mark::X, &coords).unwrap();
        assert!(MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut board = Board::new(3, Mark::X).unwrap();
        board.place_mark(1, 1).unwrap();
        board.grid.set(Coord::new(1, 1), Cell::Occupied(Mark::O));
        assert!(!MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_reset_holds() {
        let mut board = Board::replay(3, Mark::X, &[Coord::new(0, 1)]).unwrap();
        board.reset(Mark::X);
        assert!(MonotonicGridInvariant::holds(&board));
    }
}
