//! Pure N×N tic-tac-toe core.
//!
//! Tracks grid occupancy, whose turn it is and the move counter, and decides
//! after every placement whether the round continues, was won, or ended in a
//! draw. There is no I/O here: a presentation layer calls [`Board`]
//! operations and renders what they return.
//!
//! # Example
//!
//! ```
//! use gridtoe::{Board, GameOutcome, Line, Mark};
//!
//! let mut board = Board::new(3, Mark::X)?;
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     assert_eq!(board.place_mark(x, y)?, GameOutcome::InProgress);
//! }
//! let outcome = board.place_mark(0, 2)?;
//! assert_eq!(outcome.winner(), Some(Mark::X));
//! assert_eq!(outcome.winning_line().map(|w| w.line), Some(Line::Column(0)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod coord;
mod error;
mod grid;
pub mod invariants;
mod outcome;
pub mod rules;
mod types;

pub use action::Move;
pub use board::{Board, BoardSnapshot, ReplayError};
pub use config::{BoardConfig, ConfigError};
pub use coord::{Coord, CoordParseError};
pub use error::{BoardError, PlacementError};
pub use grid::Grid;
pub use outcome::GameOutcome;
pub use rules::{Line, WinningLine};
pub use types::{Cell, Mark};
