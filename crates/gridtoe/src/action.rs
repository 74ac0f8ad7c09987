//! Placement records.

use crate::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// One accepted placement: `mark` was put at `coord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}
