//! Console front end for [`tictactoe`].
//!
//! Exposes the game driver so the interactive loop can be exercised in
//! tests with scripted input and a captured transcript.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;

pub use cli::Cli;
pub use driver::{MoveError, run_game};
