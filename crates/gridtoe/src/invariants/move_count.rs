//! Move counter consistency.

use super::Invariant;
use crate::Board;

/// Invariant: the counter equals the history length and the number of
/// occupied cells, and never exceeds N².
pub struct MoveCountInvariant;

impl Invariant<Board> for MoveCountInvariant {
    fn holds(board: &Board) -> bool {
        let count = board.move_count();
        count == board.history().len()
            && count == board.grid().occupied_count()
            && count <= board.grid().len()
    }

    fn description() -> &'static str {
        "Move count matches history and occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, Mark};

    #[test]
    fn test_full_game_holds() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(2, 1),
            Coord::new(2, 2),
            Coord::new(1, 2),
        ];
        let board = Board::replay(3, Mark::X, &coords).unwrap();
        assert!(board.outcome().is_draw());
        assert!(MoveCountInvariant::holds(&board));
        assert_eq!(board.move_count(), 9);
    }

    #[test]
    fn test_extra_cell_violates() {
        let mut board = Board::new(3, Mark::X).unwrap();
        board.place_mark(1, 1).unwrap();
        board.grid.set(Coord::new(0, 0), Cell::Occupied(Mark::O));
        assert!(!MoveCountInvariant::holds(&board));
    }

    #[test]
    fn test_counter_drift_violates() {
        let mut board = Board::new(3, Mark::X).unwrap();
        board.move_count = 1;
        assert!(!MoveCountInvariant::holds(&board));
    }
}
