//! Board positions for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A cell on the 3x3 board, numbered 1-9 in row-major order.
///
/// Players refer to cells by square number ("choose a square: 1, 4, or 9"),
/// so the enum carries a digit mapping alongside the usual array index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending square order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// The square number shown to players (1-9).
    pub fn square(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a player-facing square number (1-9).
    pub fn from_square(square: u8) -> Option<Self> {
        match square {
            1..=9 => Self::from_index(square as usize - 1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.square())
    }
}
