//! Tic-tac-toe: board model, round-ending rules, and the computer
//! move-selection engine.

mod heuristic;
mod policy;
mod position;
mod rules;
mod types;

pub use heuristic::find_line_with_two;
pub use policy::{Difficulty, choose_move};
pub use position::Position;
pub use rules::WINNING_LINES;
pub use types::{Board, InvalidMarker, Marker, Square};
