//! Win detection logic for tic-tac-toe.

use super::super::position::Position;
use super::super::types::{Board, Marker, Square};
use tracing::instrument;

/// The 8 fixed triples of positions that end the round when uniformly
/// occupied: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Scans all 8 winning lines for one fully occupied by a single marker.
///
/// A line with fewer than 3 occupied squares can never be won and is skipped
/// by the match on three `Marked` squares. Under alternating play at most one
/// line can be complete at a time, so scan order does not affect the result.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        if let (Square::Marked(first), Square::Marked(second), Square::Marked(third)) =
            (board.get(a), board.get(b), board.get(c))
            && first == second
            && second == third
        {
            return Some(first);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(symbol: char) -> Marker {
        Marker::new(symbol).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_no_winner_under_three_squares() {
        let mut board = Board::new();
        board.place_marker(Position::TopLeft, marker('X'));
        board.place_marker(Position::TopCenter, marker('X'));
        assert_eq!(winning_marker(&board), None);
        assert!(!board.is_won());
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board.place_marker(pos, marker('Q'));
            }
            assert_eq!(winning_marker(&board), Some(marker('Q')));
            assert!(board.is_won());
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.place_marker(Position::TopLeft, marker('X'));
        board.place_marker(Position::TopCenter, marker('O'));
        board.place_marker(Position::TopRight, marker('X'));
        assert_eq!(winning_marker(&board), None);
    }
}
