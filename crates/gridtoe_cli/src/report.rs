//! Output formatting for the replay driver.

use gridtoe::{Board, BoardSnapshot, Coord, GameOutcome, Line, Mark};
use serde::Serialize;

/// One accepted placement as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct PlacementReport<'a> {
    /// Zero-based placement index.
    pub index: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
    /// Outcome after the placement.
    pub outcome: &'a GameOutcome,
}

/// Final line emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct FinalReport {
    /// Board state after the last placement.
    pub board: BoardSnapshot,
}

/// Text line for an accepted placement.
pub fn placement_line(index: usize, mark: Mark, coord: Coord, outcome: &GameOutcome) -> String {
    format!("{:>3}. {} at {}: {}", index + 1, mark, coord, outcome)
}

/// Text summary printed after the last placement.
pub fn summary(board: &Board) -> String {
    let status = match board.outcome() {
        GameOutcome::InProgress => format!("{} to move", board.active_mark()),
        other => other.to_string(),
    };
    format!("{}\n\n{}", board, status)
}

/// One text line per board line, in evaluation order.
pub fn line_listing(side: usize) -> Vec<String> {
    Line::all(side)
        .into_iter()
        .map(|line| {
            let coords = line
                .coords(side)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}: {}", line, coords)
        })
        .collect()
}
