//! Draw detection.

use crate::Grid;

/// Returns true once `move_count` placements have filled every cell.
///
/// Checked only after the win scan, so exhaustion without a win is a draw.
pub fn is_exhausted(grid: &Grid, move_count: usize) -> bool {
    move_count >= grid.len()
}
