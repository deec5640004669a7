//! Spot enum for board positions.

use serde::{Deserialize, Serialize};

/// A spot on the tic-tac-toe board.
///
/// Spots are numbered 1-9 in row-major order:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// Constructing a `Spot` via [`Spot::from_number`] is the bounds check;
/// an out-of-range selection never reaches the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Spot {
    /// Top-left (spot 1)
    TopLeft,
    /// Top-center (spot 2)
    TopCenter,
    /// Top-right (spot 3)
    TopRight,
    /// Middle-left (spot 4)
    MiddleLeft,
    /// Center (spot 5)
    Center,
    /// Middle-right (spot 6)
    MiddleRight,
    /// Bottom-left (spot 7)
    BottomLeft,
    /// Bottom-center (spot 8)
    BottomCenter,
    /// Bottom-right (spot 9)
    BottomRight,
}

impl Spot {
    /// All 9 spots in row-major order.
    pub const ALL: [Spot; 9] = [
        Spot::TopLeft,
        Spot::TopCenter,
        Spot::TopRight,
        Spot::MiddleLeft,
        Spot::Center,
        Spot::MiddleRight,
        Spot::BottomLeft,
        Spot::BottomCenter,
        Spot::BottomRight,
    ];

    /// Creates a spot from its board number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Spot::TopLeft),
            2 => Some(Spot::TopCenter),
            3 => Some(Spot::TopRight),
            4 => Some(Spot::MiddleLeft),
            5 => Some(Spot::Center),
            6 => Some(Spot::MiddleRight),
            7 => Some(Spot::BottomLeft),
            8 => Some(Spot::BottomCenter),
            9 => Some(Spot::BottomRight),
            _ => None,
        }
    }

    /// Board number of this spot (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts the spot to a cell index (0-8).
    pub fn index(self) -> usize {
        match self {
            Spot::TopLeft => 0,
            Spot::TopCenter => 1,
            Spot::TopRight => 2,
            Spot::MiddleLeft => 3,
            Spot::Center => 4,
            Spot::MiddleRight => 5,
            Spot::BottomLeft => 6,
            Spot::BottomCenter => 7,
            Spot::BottomRight => 8,
        }
    }

    /// Human-readable label for this spot.
    pub fn label(&self) -> &'static str {
        match self {
            Spot::TopLeft => "Top-left",
            Spot::TopCenter => "Top-center",
            Spot::TopRight => "Top-right",
            Spot::MiddleLeft => "Middle-left",
            Spot::Center => "Center",
            Spot::MiddleRight => "Middle-right",
            Spot::BottomLeft => "Bottom-left",
            Spot::BottomCenter => "Bottom-center",
            Spot::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
