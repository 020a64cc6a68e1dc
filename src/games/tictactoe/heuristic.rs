//! Line-scan move heuristic shared by the computer skill tiers.
//!
//! One parameterized search covers both offense and defense: pass the
//! computer's own marker to find a move that completes its line, or the
//! human's marker to find the square the human needs next turn.

use super::position::Position;
use super::rules::WINNING_LINES;
use super::types::{Board, Marker, Square};
use tracing::instrument;

/// Finds the open square of a winning line whose other two squares already
/// carry `marker`.
///
/// Returns the first match in line-scan order; when several lines qualify the
/// choice between them carries no rule significance. Returns `None` when no
/// line is one move from completion for `marker`. Never mutates the board.
#[instrument(skip(board))]
pub fn find_line_with_two(board: &Board, marker: Marker) -> Option<Position> {
    for line in WINNING_LINES {
        let mut own = 0;
        let mut foreign = 0;
        let mut open = None;

        for pos in line {
            match board.get(pos) {
                Square::Marked(occupant) if occupant == marker => own += 1,
                Square::Marked(_) => foreign += 1,
                Square::Empty => open = Some(pos),
            }
        }

        if own == 2
            && foreign == 0
            && let Some(pos) = open
        {
            return Some(pos);
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
    fn test_empty_board_finds_nothing() {
        let board = Board::new();
        assert_eq!(find_line_with_two(&board, marker('M')), None);
    }

    #[test]
    fn test_finds_open_square_of_diagonal() {
        // M on squares 1 and 5 of the 1-5-9 diagonal, square 9 open
        let mut board = Board::new();
        board.place_marker(Position::TopLeft, marker('M'));
        board.place_marker(Position::Center, marker('M'));

        assert_eq!(
            find_line_with_two(&board, marker('M')),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn test_search_is_marker_specific() {
        let mut board = Board::new();
        board.place_marker(Position::TopCenter, marker('X'));
        board.place_marker(Position::Center, marker('X'));

        // The column threat belongs to X, not to O
        assert_eq!(
            find_line_with_two(&board, marker('X')),
            Some(Position::BottomCenter)
        );
        assert_eq!(find_line_with_two(&board, marker('O')), None);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        // X holds two of the top row but O already took the third square
        let mut board = Board::new();
        board.place_marker(Position::TopLeft, marker('X'));
        board.place_marker(Position::TopCenter, marker('X'));
        board.place_marker(Position::TopRight, marker('O'));

        assert_eq!(find_line_with_two(&board, marker('X')), None);
    }

    #[test]
    fn test_single_mark_is_not_a_threat() {
        let mut board = Board::new();
        board.place_marker(Position::Center, marker('X'));
        assert_eq!(find_line_with_two(&board, marker('X')), None);
    }

    #[test]
    fn test_does_not_mutate_board() {
        let mut board = Board::new();
        board.place_marker(Position::MiddleLeft, marker('X'));
        board.place_marker(Position::MiddleRight, marker('X'));
        let before = board.clone();

        find_line_with_two(&board, marker('X'));
        assert_eq!(board, before);
    }
}
