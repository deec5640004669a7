//! Game rules: win detection and terminal-state queries.

mod win;

pub(crate) use win::line_winner;

use crate::types::{Board, Mark};
use tracing::instrument;

impl Board {
    /// Checks whether crosses have won.
    ///
    /// Returns true immediately if crosses are already cached as the
    /// winner; otherwise scans the board and caches a fresh win.
    #[instrument(skip(self))]
    pub fn is_cross_winner(&mut self) -> bool {
        self.is_winner(Mark::Cross)
    }

    /// Checks whether circles have won.
    ///
    /// Returns true immediately if circles are already cached as the
    /// winner; otherwise scans the board and caches a fresh win.
    #[instrument(skip(self))]
    pub fn is_circle_winner(&mut self) -> bool {
        self.is_winner(Mark::Circle)
    }

    fn is_winner(&mut self, mark: Mark) -> bool {
        if self.winner == mark {
            return true;
        }
        if line_winner(self, mark) {
            self.winner = mark;
            return true;
        }
        false
    }

    /// Checks whether the game is over: the board is full or one side
    /// has a winning line.
    ///
    /// May populate the winner cache; drivers relying on it for control
    /// flow must call it rather than re-derive fullness and winner.
    #[instrument(skip(self))]
    pub fn is_finished(&mut self) -> bool {
        self.is_full() || self.is_cross_winner() || self.is_circle_winner()
    }
}
