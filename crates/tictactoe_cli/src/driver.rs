//! Interactive game loop.
//!
//! The driver owns the board for the lifetime of one game: it prompts
//! for a spot number, validates it, applies the human's cross, and
//! answers with the computer's circle until the board reports a
//! terminal state.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe::{Board, Spot};
use tracing::debug;

/// A rejected human move.
///
/// Both cases are recoverable: the driver prints the message and
/// re-prompts without mutating the board or granting the computer a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Selection outside 1-9, or not a number at all.
    #[display("Number is out of range, try again")]
    OutOfRange,
    /// Selection points at an occupied spot.
    #[display("That spot is already taken, try something else")]
    SpotTaken,
}

/// Parses one line of human input and validates it against the board.
fn parse_move(board: &Board, line: &str) -> Result<Spot, MoveError> {
    let number: u8 = line.trim().parse().map_err(|_| MoveError::OutOfRange)?;
    let spot = Spot::from_number(number).ok_or(MoveError::OutOfRange)?;
    if board.is_set(spot) {
        return Err(MoveError::SpotTaken);
    }
    Ok(spot)
}

/// Plays one game of tic-tac-toe over the given streams.
///
/// Reads one spot number per human turn from `input` and writes the
/// board, prompts, diagnostics, and final verdict to `output`.
pub fn run_game(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "Welcome to Tic-Tac-Toe")?;
    writeln!(output, "You play crosses, the computer plays circles")?;

    let mut board = Board::new();

    while !board.is_finished() {
        write!(output, "{board}")?;
        write!(output, "Press 1 to 9: ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        match parse_move(&board, &line) {
            Ok(spot) => {
                debug!(%spot, "human plays cross");
                board.set_cross(spot);
                if !board.is_finished() {
                    let reply = board
                        .suggest_empty_spot()
                        .context("no empty spot on an unfinished board")?;
                    debug!(%reply, "computer plays circle");
                    board.set_circle(reply);
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
        writeln!(output)?;
    }

    write!(output, "{board}")?;
    writeln!(output, "Game over")?;
    if board.is_circle_winner() {
        writeln!(output, "Circle won")?;
    } else if board.is_cross_winner() {
        writeln!(output, "Cross won")?;
    } else {
        writeln!(output, "No winner")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_accepts_valid_spot() {
        let board = Board::new();
        assert_eq!(parse_move(&board, "5\n"), Ok(Spot::Center));
        assert_eq!(parse_move(&board, " 9 "), Ok(Spot::BottomRight));
    }

    #[test]
    fn test_parse_move_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_move(&board, "0"), Err(MoveError::OutOfRange));
        assert_eq!(parse_move(&board, "10"), Err(MoveError::OutOfRange));
        assert_eq!(parse_move(&board, "banana"), Err(MoveError::OutOfRange));
    }

    #[test]
    fn test_parse_move_rejects_taken_spot() {
        let mut board = Board::new();
        board.set_cross(Spot::Center);
        assert_eq!(parse_move(&board, "5"), Err(MoveError::SpotTaken));
    }
}
