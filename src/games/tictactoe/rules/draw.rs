//! Draw detection logic for tic-tac-toe.

use super::super::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares marked).
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.unmarked_positions().is_empty()
}
