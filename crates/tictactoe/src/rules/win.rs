//! Win detection logic for tic-tac-toe.

use crate::spot::Spot;
use crate::types::{Board, Mark};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub(crate) const LINES: [[Spot; 3]; 8] = [
    // Rows
    [Spot::TopLeft, Spot::TopCenter, Spot::TopRight],
    [Spot::MiddleLeft, Spot::Center, Spot::MiddleRight],
    [Spot::BottomLeft, Spot::BottomCenter, Spot::BottomRight],
    // Columns
    [Spot::TopLeft, Spot::MiddleLeft, Spot::BottomLeft],
    [Spot::TopCenter, Spot::Center, Spot::BottomCenter],
    [Spot::TopRight, Spot::MiddleRight, Spot::BottomRight],
    // Diagonals
    [Spot::TopLeft, Spot::Center, Spot::BottomRight],
    [Spot::TopRight, Spot::Center, Spot::BottomLeft],
];

/// Checks whether `mark` occupies a complete line.
///
/// Pure function of the current board state; the winner cache is
/// maintained by the callers in `rules`.
#[instrument(skip(board))]
pub(crate) fn line_winner(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|spot| board.get(*spot) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_every_spot() {
        assert_eq!(LINES.len(), 8);
        for spot in Spot::ALL {
            let through = LINES.iter().filter(|line| line.contains(&spot)).count();
            // Center sits on 4 lines, corners on 3, edges on 2.
            let expected = match spot.index() {
                4 => 4,
                0 | 2 | 6 | 8 => 3,
                _ => 2,
            };
            assert_eq!(through, expected, "spot {spot}");
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!line_winner(&board, Mark::Cross));
        assert!(!line_winner(&board, Mark::Circle));
    }

    #[test]
    fn test_each_line_wins_for_cross_only() {
        for line in LINES {
            let mut board = Board::new();
            for spot in line {
                board.set_cross(spot);
            }
            assert!(line_winner(&board, Mark::Cross), "line {line:?}");
            assert!(!line_winner(&board, Mark::Circle), "line {line:?}");
        }
    }

    #[test]
    fn test_each_line_wins_for_circle() {
        for line in LINES {
            let mut board = Board::new();
            for spot in line {
                board.set_circle(spot);
            }
            assert!(line_winner(&board, Mark::Circle), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set_cross(Spot::TopLeft);
        board.set_cross(Spot::TopCenter);
        assert!(!line_winner(&board, Mark::Cross));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set_cross(Spot::TopLeft);
        board.set_circle(Spot::TopCenter);
        board.set_cross(Spot::TopRight);
        assert!(!line_winner(&board, Mark::Cross));
        assert!(!line_winner(&board, Mark::Circle));
    }
}
