//! Pure tic-tac-toe game logic.
//!
//! The [`Board`] tracks the marks on a 3x3 grid, a count of remaining
//! empty spots, and a cached winner. The human plays [`Mark::Cross`],
//! the computer plays [`Mark::Circle`] using the deterministic
//! last-empty-spot heuristic exposed by [`Board::suggest_empty_spot`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Spot};
//!
//! let mut board = Board::new();
//! board.set_cross(Spot::TopLeft);
//! board.set_cross(Spot::TopCenter);
//! board.set_cross(Spot::TopRight);
//!
//! assert!(board.is_cross_winner());
//! assert!(board.is_finished());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod spot;
mod types;

pub use spot::Spot;
pub use types::{Board, Mark};
