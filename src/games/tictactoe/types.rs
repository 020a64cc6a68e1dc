//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};

/// Error returned when a marker character is not a single letter A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("marker must be a single letter A-Z")]
pub struct InvalidMarker;

/// A single-character symbol identifying which participant occupies a cell.
///
/// Each participant keeps a distinct marker for the duration of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from an uppercase letter.
    pub fn new(symbol: char) -> Result<Self, InvalidMarker> {
        if symbol.is_ascii_uppercase() {
            Ok(Self(symbol))
        } else {
            Err(InvalidMarker)
        }
    }

    /// The marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a marker.
    Marked(Marker),
}

impl Square {
    /// Returns the marker if the square is occupied.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board persists across rounds of a match; [`Board::reset`] clears it
/// between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks whether the given position is unmarked.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Records a marker at an unmarked position.
    ///
    /// # Panics
    ///
    /// Panics if the position is already marked. Callers are responsible for
    /// only offering unmarked positions; placing on an occupied square is a
    /// caller bug, not a recoverable condition.
    pub fn place_marker(&mut self, pos: Position, marker: Marker) {
        assert!(
            self.is_unmarked(pos),
            "square {pos} is already marked",
        );
        self.squares[pos.index()] = Square::Marked(marker);
    }

    /// Returns the unmarked positions in ascending square order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_unmarked(*pos))
            .collect()
    }

    /// Returns the marker holding all three squares of some winning line.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::win::winning_marker(self)
    }

    /// Checks whether some marker has completed a winning line.
    pub fn is_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Checks whether the round is a tie: every square marked, no winner.
    pub fn is_tie(&self) -> bool {
        rules::draw::is_full(self) && !self.is_won()
    }

    /// Clears all squares, leaving the board as freshly constructed.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Formats the board as the fixed 3x3 ASCII grid.
    pub fn render(&self) -> String {
        let mut grid = String::new();
        for row in 0..3 {
            grid.push_str("     |     |\n");
            for col in 0..3 {
                let square = self.squares[row * 3 + col];
                let symbol = match square {
                    Square::Empty => ' ',
                    Square::Marked(marker) => marker.symbol(),
                };
                grid.push_str(&format!("  {symbol}  "));
                if col < 2 {
                    grid.push('|');
                }
            }
            grid.push_str("\n     |     |\n");
            if row < 2 {
                grid.push_str("-----+-----+-----\n");
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
