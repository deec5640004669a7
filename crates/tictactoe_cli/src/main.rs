//! Console tic-tac-toe.
//!
//! The human plays crosses, the computer plays circles.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, run_game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logging goes to stderr so the game transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_game(stdin.lock(), stdout.lock())?;

    info!("Game complete");
    Ok(())
}
