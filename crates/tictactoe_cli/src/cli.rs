//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;

/// Console tic-tac-toe - you play crosses, the computer plays circles.
///
/// The game takes no arguments; one interactive game runs to completion.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {}
