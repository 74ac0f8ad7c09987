//! Alternating turn invariant.

use super::Invariant;
use crate::Board;

/// Invariant: history starts with the starting mark and alternates, and
/// while the game is in progress the active mark is the one due next.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let history = board.history();

        if let Some(first) = history.first()
            && first.mark != board.starting_mark()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match history.last() {
            None => board.active_mark() == board.starting_mark(),
            Some(last) if board.is_terminal() => board.active_mark() == last.mark,
            Some(last) => board.active_mark() == last.mark.opponent(),
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting from the starting mark"
    }
}
