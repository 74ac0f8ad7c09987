//! Result of evaluating the board after a placement.

use crate::{Mark, WinningLine};
use serde::{Deserialize, Serialize};

/// State of the game after a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for highlighting.
        line: WinningLine,
    },
    /// Every cell is filled and nobody completed a line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line on a win.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win { mark, line } => write!(f, "{} wins ({})", mark, line.line),
            GameOutcome::Draw => write!(f, "It's a draw"),
        }
    }
}
