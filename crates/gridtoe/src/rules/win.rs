//! Win detection.
//!
//! Each line is scanned from its canonical origin in a single direction.
//! Runs that start mid-line are never examined: a winning line always spans
//! the full side, so a run anchored anywhere else cannot reach length N.

use crate::{Coord, Grid, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A full-length line on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row `y`, scanned left to right.
    #[display("row {_0}")]
    Row(usize),
    /// Column `x`, scanned top to bottom.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Where the scan starts on a grid of the given side.
    pub fn origin(self, side: usize) -> Coord {
        match self {
            Line::Row(y) => Coord::new(0, y),
            Line::Column(x) => Coord::new(x, 0),
            Line::MainDiagonal => Coord::new(0, 0),
            Line::AntiDiagonal => Coord::new(side.saturating_sub(1), 0),
        }
    }

    /// Displacement applied between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Line::Row(_) => (1, 0),
            Line::Column(_) => (0, 1),
            Line::MainDiagonal => (1, 1),
            Line::AntiDiagonal => (-1, 1),
        }
    }

    /// The N coordinates this line covers, origin first. Empty when `side`
    /// is 0.
    pub fn coords(self, side: usize) -> Vec<Coord> {
        std::iter::successors(Some(self.origin(side)), |c| c.step(self.step(), side))
            .take(side)
            .collect()
    }

    /// Every line of a grid in evaluation order: column `i` then row `i` for
    /// each index, then the main diagonal, then the anti-diagonal.
    pub fn all(side: usize) -> Vec<Line> {
        (0..side)
            .flat_map(|i| [Line::Column(i), Line::Row(i)])
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
            .collect()
    }
}

/// A completed line together with the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Which line was completed.
    pub line: Line,
    /// Covered coordinates, origin first.
    pub cells: Vec<Coord>,
}

/// Counts consecutive cells holding `mark`, starting at `origin` and moving
/// by `step`.
///
/// Stops at the first cell that does not hold `mark`, at the grid edge, or
/// after `side` cells, whichever comes first.
pub fn count_line(grid: &Grid, origin: Coord, step: (isize, isize), mark: Mark) -> usize {
    let side = grid.side();
    let mut current = Some(origin);
    let mut count = 0;

    while count < side {
        let Some(coord) = current else { break };
        if grid.get(coord).and_then(|c| c.mark()) != Some(mark) {
            break;
        }
        count += 1;
        current = coord.step(step, side);
    }

    count
}

/// Returns the first line fully held by `mark`, in evaluation order.
#[instrument(skip(grid), fields(side = grid.side()))]
pub fn find_winning_line(grid: &Grid, mark: Mark) -> Option<WinningLine> {
    let side = grid.side();
    Line::all(side).into_iter().find_map(|line| {
        let count = count_line(grid, line.origin(side), line.step(), mark);
        trace!(%line, count, "Scanned line");
        (count == side).then(|| WinningLine {
            line,
            cells: line.coords(side),
        })
    })
}
