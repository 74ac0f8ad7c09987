//! The board state machine.
//!
//! A [`Board`] owns the grid, whose turn it is, the move counter and the
//! move history. It is mutated only by [`Board::place_mark`] and
//! [`Board::reset`]:
//!
//! ```text
//! InProgress ──place_mark──▶ InProgress
//!     │
//!     ├──place_mark──▶ Win(mark) ─┐
//!     └──place_mark──▶ Draw ──────┴──reset──▶ InProgress
//! ```

use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::rules::{find_winning_line, is_exhausted};
use crate::{BoardError, Cell, Coord, GameOutcome, Grid, Mark, Move, PlacementError};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Grid occupancy plus turn bookkeeping.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) starting_mark: Mark,
    pub(crate) active: Mark,
    pub(crate) move_count: usize,
    pub(crate) outcome: GameOutcome,
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// Creates an empty board with `side` cells per row, `starting` to move.
    #[instrument]
    pub fn new(side: usize, starting: Mark) -> Result<Self, BoardError> {
        let grid = Grid::new(side)?;
        info!(side, %starting, "Creating board");
        Ok(Self {
            grid,
            starting_mark: starting,
            active: starting,
            move_count: 0,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        })
    }

    /// Builds a board and applies `coords` in order.
    ///
    /// Stops at the first rejected placement. Placements after a terminal
    /// outcome are rejected with [`PlacementError::GameAlreadyOver`].
    #[instrument(skip(coords), fields(moves = coords.len()))]
    pub fn replay(side: usize, starting: Mark, coords: &[Coord]) -> Result<Self, ReplayError> {
        let mut board = Self::new(side, starting)?;
        for (index, coord) in coords.iter().enumerate() {
            board
                .place_mark(coord.x, coord.y)
                .map_err(|source| ReplayError::Placement { index, source })?;
        }
        Ok(board)
    }

    /// Places the active mark at column `x`, row `y`.
    ///
    /// Returns the outcome after the placement. On `InProgress` the active
    /// mark passes to the opponent; on a win or draw it stays with the mark
    /// that just moved. Rejected placements leave the board untouched.
    #[instrument(skip(self), fields(active = %self.active, move_count = self.move_count))]
    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<GameOutcome, PlacementError> {
        if let Err(e) = self.validate(x, y) {
            warn!(error = %e, "Placement rejected");
            return Err(e);
        }

        let coord = Coord::new(x, y);
        let mark = self.active;
        self.grid.set(coord, Cell::Occupied(mark));
        self.move_count += 1;
        self.history.push(Move::new(mark, coord));
        debug!(%mark, %coord, "Mark placed");

        let outcome = if let Some(line) = find_winning_line(&self.grid, mark) {
            GameOutcome::Win { mark, line }
        } else if is_exhausted(&self.grid, self.move_count) {
            GameOutcome::Draw
        } else {
            self.active = mark.opponent();
            GameOutcome::InProgress
        };

        if outcome.is_terminal() {
            info!(%outcome, moves = self.move_count, "Game over");
        }
        self.outcome = outcome.clone();

        debug_assert!(
            self.check_invariants().is_ok(),
            "Board invariants violated after placing at {}",
            coord
        );

        Ok(outcome)
    }

    fn validate(&self, x: usize, y: usize) -> Result<(), PlacementError> {
        if self.outcome.is_terminal() {
            return Err(PlacementError::GameAlreadyOver);
        }
        let coord = Coord::new(x, y);
        match self.grid.get(coord) {
            None => Err(PlacementError::OutOfBounds {
                x,
                y,
                side: self.grid.side(),
            }),
            Some(Cell::Occupied(_)) => Err(PlacementError::CellOccupied(coord)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Clears the board and hands the first move to `starting`.
    #[instrument(skip(self), fields(side = self.grid.side()))]
    pub fn reset(&mut self, starting: Mark) {
        info!(%starting, previous_moves = self.move_count, "Resetting board");
        self.grid.clear();
        self.starting_mark = starting;
        self.active = starting;
        self.move_count = 0;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
    }

    /// Whose turn it is.
    ///
    /// Only meaningful while the game is in progress; after a win it reports
    /// the winner.
    pub fn active_mark(&self) -> Mark {
        self.active
    }

    /// The mark that moved first in this round.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.grid.side()
    }

    /// Number of accepted placements since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Outcome of the most recent placement.
    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    /// Win or draw.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Cell at column `x`, row `y`, or `None` off the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.grid.get(Coord::new(x, y))
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accepted placements in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Cells that can still take a mark. Empty once the game is over.
    pub fn empty_cells(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid.vacant_coords()
    }

    /// Checks every board invariant, returning all violations.
    #[instrument(skip(self))]
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self).inspect_err(|violations| {
            for v in violations {
                warn!(violation = %v.description, "Invariant violated");
            }
        })
    }

    /// Serializable view for a presentation layer.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            side: self.grid.side(),
            active_mark: self.active,
            move_count: self.move_count,
            outcome: self.outcome.clone(),
            rows: self
                .grid
                .rows()
                .map(|row| row.iter().map(|c| c.symbol()).collect())
                .collect(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

/// Point-in-time view of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Side length.
    pub side: usize,
    /// Whose turn it is (the winner once won).
    pub active_mark: Mark,
    /// Accepted placements.
    pub move_count: usize,
    /// Current outcome.
    pub outcome: GameOutcome,
    /// One string per row, `X`, `O` or `.` per cell.
    pub rows: Vec<String>,
}

/// Failure while replaying a sequence of placements.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// The board could not be built.
    #[display("{_0}")]
    Board(BoardError),

    /// A placement was rejected.
    #[display("Placement {index} rejected: {source}")]
    Placement {
        /// Zero-based position in the replayed sequence.
        index: usize,
        /// Why it was rejected.
        source: PlacementError,
    },
}

impl From<BoardError> for ReplayError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    fn board() -> Board {
        Board::new(3, Mark::X).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = board();
        assert_eq!(board.active_mark(), Mark::X);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.outcome(), &GameOutcome::InProgress);
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_zero_side() {
        assert!(matches!(Board::new(0, Mark::O), Err(BoardError::ZeroSide)));
    }

    #[test]
    fn test_oversized_side() {
        let side = usize::MAX / 2;
        assert_eq!(
            Board::new(side, Mark::X).unwrap_err(),
            BoardError::SideTooLarge(side)
        );
    }

    #[test]
    fn test_place_toggles_turn() {
        let mut board = board();
        assert_eq!(board.place_mark(1, 1), Ok(GameOutcome::InProgress));
        assert_eq!(board.active_mark(), Mark::O);
        assert_eq!(board.cell(1, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.history(), &[Move::new(Mark::X, Coord::new(1, 1))]);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut board = board();
        board.place_mark(0, 0).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place_mark(0, 0),
            Err(PlacementError::CellOccupied(Coord::new(0, 0)))
        );
        assert_eq!(
            board.place_mark(3, 0),
            Err(PlacementError::OutOfBounds { x: 3, y: 0, side: 3 })
        );
        assert_eq!(board.grid(), before.grid());
        assert_eq!(board.move_count(), before.move_count());
        assert_eq!(board.active_mark(), before.active_mark());
        assert_eq!(board.history(), before.history());
    }

    #[test]
    fn test_win_keeps_active_mark() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(0, 2),
        ];
        let board = Board::replay(3, Mark::X, &coords).unwrap();
        assert_eq!(board.outcome().winner(), Some(Mark::X));
        assert_eq!(board.outcome().winning_line().map(|w| w.line), Some(Line::Column(0)));
        assert_eq!(board.active_mark(), Mark::X);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_terminal_rejects_placement() {
        let mut board = Board::new(1, Mark::O).unwrap();
        assert_eq!(board.place_mark(0, 0).unwrap().winner(), Some(Mark::O));
        assert_eq!(board.place_mark(0, 0), Err(PlacementError::GameAlreadyOver));
        assert_eq!(board.place_mark(5, 5), Err(PlacementError::GameAlreadyOver));
    }

    #[test]
    fn test_replay_reports_index() {
        let coords = [Coord::new(0, 0), Coord::new(0, 0)];
        let err = Board::replay(3, Mark::X, &coords).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Placement {
                index: 1,
                source: PlacementError::CellOccupied(Coord::new(0, 0)),
            }
        );
    }

    #[test]
    fn test_replay_zero_side() {
        assert_eq!(
            Board::replay(0, Mark::X, &[]).unwrap_err(),
            ReplayError::Board(BoardError::ZeroSide)
        );
    }

    #[test]
    fn test_reset_changes_starting_mark() {
        let mut board = board();
        board.place_mark(2, 2).unwrap();
        board.reset(Mark::O);
        assert_eq!(board.active_mark(), Mark::O);
        assert_eq!(board.starting_mark(), Mark::O);
        assert_eq!(board.move_count(), 0);
        assert!(board.history().is_empty());
        assert_eq!(board.grid().occupied_count(), 0);
    }

    #[test]
    fn test_snapshot() {
        let mut board = board();
        board.place_mark(2, 0).unwrap();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.rows, vec!["..X", "...", "..."]);
        assert_eq!(snapshot.active_mark, Mark::O);
        assert_eq!(snapshot.move_count, 1);
    }
}
