//! Core domain types for tic-tac-toe.

use crate::spot::Spot;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The occupant of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    Empty,
    /// Cross (the human player).
    Cross,
    /// Circle (the computer player).
    Circle,
}

impl Mark {
    /// Display symbol for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => "_",
            Mark::Cross => "X",
            Mark::Circle => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 tic-tac-toe board.
///
/// Tracks the cell marks, the number of remaining empty cells, and the
/// winner once one has been found. The winner cache is populated lazily
/// by [`Board::is_cross_winner`] / [`Board::is_circle_winner`] and never
/// reverts to [`Mark::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Mark; 9],
    /// Number of cells still empty.
    empty_spaces: u8,
    /// Cached winner, `Mark::Empty` while the game has none.
    pub(crate) winner: Mark,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
            empty_spaces: 9,
            winner: Mark::Empty,
        }
    }

    /// Gets the mark at the given spot.
    pub fn get(&self, spot: Spot) -> Mark {
        self.cells[spot.index()]
    }

    /// Checks whether the spot already holds a cross or circle.
    pub fn is_set(&self, spot: Spot) -> bool {
        self.get(spot) != Mark::Empty
    }

    /// Marks a cross at the given spot.
    ///
    /// The spot must be empty; callers pre-check with [`Board::is_set`].
    #[instrument(skip(self))]
    pub fn set_cross(&mut self, spot: Spot) {
        self.place(spot, Mark::Cross);
    }

    /// Marks a circle at the given spot.
    ///
    /// The spot must be empty; callers pre-check with [`Board::is_set`].
    #[instrument(skip(self))]
    pub fn set_circle(&mut self, spot: Spot) {
        self.place(spot, Mark::Circle);
    }

    fn place(&mut self, spot: Spot, mark: Mark) {
        debug_assert!(!self.is_set(spot), "spot {spot} is already set");
        self.cells[spot.index()] = mark;
        self.empty_spaces -= 1;
    }

    /// Number of cells still empty.
    pub fn empty_spaces(&self) -> u8 {
        self.empty_spaces
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.empty_spaces == 0
    }

    /// Suggests a spot for the computer: the highest-numbered empty spot,
    /// scanning from 9 down to 1.
    ///
    /// Deterministic and side-effect free. Returns `None` if the board is
    /// full; callers check [`Board::is_finished`] first, so `None` on the
    /// normal path is a caller bug.
    #[instrument(skip(self))]
    pub fn suggest_empty_spot(&self) -> Option<Spot> {
        Spot::ALL
            .iter()
            .rev()
            .copied()
            .find(|spot| !self.is_set(*spot))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
