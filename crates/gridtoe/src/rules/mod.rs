//! Game rules.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! turn bookkeeping so they can be tested and reused on their own.

pub mod draw;
pub mod win;

pub use draw::is_exhausted;
pub use win::{Line, WinningLine, count_line, find_winning_line};
