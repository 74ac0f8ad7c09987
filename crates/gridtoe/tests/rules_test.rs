//! Tests for the pure rule functions.

use gridtoe::rules::{count_line, find_winning_line};
use gridtoe::{Board, Coord, Line, Mark};

#[test]
fn test_lines_cover_every_cell_twice_plus_diagonals() {
    let side = 4;
    let lines = Line::all(side);
    assert_eq!(lines.len(), 2 * side + 2);
    for line in &lines {
        let coords = line.coords(side);
        assert_eq!(coords.len(), side, "{line} has wrong length");
        assert!(coords.iter().all(|c| c.in_bounds(side)));
    }
}

#[test]
fn test_count_line_on_partial_row() {
    let board = Board::replay(3, Mark::X, &[Coord::new(0, 0), Coord::new(2, 2), Coord::new(1, 0)])
        .unwrap();
    assert_eq!(count_line(board.grid(), Coord::new(0, 0), (1, 0), Mark::X), 2);
    assert_eq!(find_winning_line(board.grid(), Mark::X), None);
}
