//! Tests for the tic-tac-toe board model.

use parlor_games::{Board, Marker, Position, WINNING_LINES};

fn marker(symbol: char) -> Marker {
    Marker::new(symbol).unwrap()
}

#[test]
fn test_new_board_is_fully_unmarked() {
    let board = Board::new();
    assert_eq!(board.unmarked_positions(), Position::ALL.to_vec());
    assert_eq!(board.winning_marker(), None);
    assert!(!board.is_won());
    assert!(!board.is_tie());
}

#[test]
fn test_unmarked_positions_shrink_by_one_per_placement() {
    let mut board = Board::new();
    let mut expected = 9;
    for (i, pos) in Position::ALL.into_iter().enumerate() {
        let symbol = if i % 2 == 0 { 'X' } else { 'O' };
        board.place_marker(pos, marker(symbol));
        expected -= 1;
        assert_eq!(board.unmarked_positions().len(), expected);
    }
}

#[test]
fn test_unmarked_positions_stay_in_ascending_order() {
    let mut board = Board::new();
    board.place_marker(Position::Center, marker('X'));
    board.place_marker(Position::TopLeft, marker('O'));
    board.place_marker(Position::BottomCenter, marker('X'));

    let squares: Vec<u8> = board
        .unmarked_positions()
        .iter()
        .map(|pos| pos.square())
        .collect();
    assert_eq!(squares, vec![2, 3, 4, 6, 7, 9]);
}

#[test]
fn test_boards_with_under_three_marks_are_never_won() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        board.place_marker(line[0], marker('X'));
        board.place_marker(line[1], marker('X'));
        assert_eq!(board.winning_marker(), None);
    }
}

#[test]
fn test_each_line_wins_for_its_marker() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        for pos in line {
            board.place_marker(pos, marker('Z'));
        }
        assert_eq!(board.winning_marker(), Some(marker('Z')));
        assert!(board.is_won());
        assert!(!board.is_tie());
    }
}

#[test]
fn test_reset_restores_a_fresh_board() {
    let mut board = Board::new();
    board.place_marker(Position::TopLeft, marker('X'));
    board.place_marker(Position::Center, marker('O'));
    board.place_marker(Position::BottomRight, marker('X'));

    board.reset();
    assert_eq!(board, Board::new());
    assert_eq!(board.winning_marker(), None);
    assert!(!board.is_tie());
    assert_eq!(board.unmarked_positions().len(), 9);
}

#[test]
fn test_reset_is_idempotent() {
    let mut board = Board::new();
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
#[should_panic(expected = "already marked")]
fn test_double_placement_is_a_caller_bug() {
    let mut board = Board::new();
    board.place_marker(Position::Center, marker('X'));
    board.place_marker(Position::Center, marker('O'));
}

#[test]
fn test_marker_rejects_non_letters() {
    assert!(Marker::new('x').is_err());
    assert!(Marker::new('1').is_err());
    assert!(Marker::new(' ').is_err());
    assert!(Marker::new('Q').is_ok());
}
