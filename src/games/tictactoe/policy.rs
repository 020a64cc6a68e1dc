//! Computer move selection across the three skill tiers.

use super::heuristic::find_line_with_two;
use super::position::Position;
use super::types::{Board, Marker};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Computer skill tier, fixed for the duration of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random play, no lookahead.
    Easy,
    /// Blocks the human's completed-line threats, otherwise random.
    Medium,
    /// Takes its own winning square first, then blocks, then random.
    Hard,
}

impl Difficulty {
    /// Parses the single-letter menu key (`e`/`m`/`h`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "e" => Some(Difficulty::Easy),
            "m" => Some(Difficulty::Medium),
            "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Selects the computer's move for the given tier.
///
/// The medium tier deliberately never looks for its own winning move; an
/// alert human who threatens two lines at once can beat it, which is the
/// intended skill gap below hard. The hard tier is greedy one-ply reasoning
/// (offense before defense), not game-tree search; it does not see forks.
///
/// # Panics
///
/// Panics if called on a full board. The round loop only consults the policy
/// while at least one square is unmarked.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    own_marker: Marker,
    human_marker: Marker,
    rng: &mut R,
) -> Position {
    let position = match difficulty {
        Difficulty::Easy => random_unmarked(board, rng),
        Difficulty::Medium => find_line_with_two(board, human_marker)
            .unwrap_or_else(|| random_unmarked(board, rng)),
        Difficulty::Hard => find_line_with_two(board, own_marker)
            .or_else(|| find_line_with_two(board, human_marker))
            .unwrap_or_else(|| random_unmarked(board, rng)),
    };

    // The heuristics only propose open squares by construction; double-check
    // rather than trusting it blindly.
    assert!(
        board.is_unmarked(position),
        "policy proposed occupied square {position}"
    );

    debug!(?difficulty, square = %position, "computer move selected");
    position
}

fn random_unmarked<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Position {
    *board
        .unmarked_positions()
        .choose(rng)
        .expect("policy consulted on a full board")
}
