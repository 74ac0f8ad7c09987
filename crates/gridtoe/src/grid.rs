//! N×N cell storage.

use crate::{BoardError, Cell, Coord};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square grid of cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawGrid {
    side: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = BoardError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.side)?;
        if raw.cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            side: raw.side,
            cells: raw.cells,
        })
    }
}

/// Number of cells on a grid of the given side, checked for overflow.
fn cell_count(side: usize) -> Result<usize, BoardError> {
    if side == 0 {
        return Err(BoardError::ZeroSide);
    }
    side.checked_mul(side).ok_or(BoardError::SideTooLarge(side))
}

impl Grid {
    /// Creates an empty grid with `side` cells per row and column.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, BoardError> {
        let count = cell_count(side)?;
        Ok(Self {
            side,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at `coord`, or `None` if it lies off the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .in_bounds(self.side)
            .then(|| self.cells[coord.to_index(self.side)])
    }

    /// Overwrites the cell at `coord`. Callers validate bounds first.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let index = coord.to_index(self.side);
        self.cells[index] = cell;
    }

    /// Returns true if `coord` is on the grid and holds no mark.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Resets every cell to empty.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side)
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn vacant_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Coord::from_index(i, self.side))
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.side].join("+");
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line = row
                .iter()
                .map(|c| c.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
