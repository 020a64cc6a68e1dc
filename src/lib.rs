//! Parlor Games - turn-based console games against robot opponents.
//!
//! Three self-contained games share one binary: tic-tac-toe with three
//! computer skill tiers, rock-paper-scissors-lizard-spock with four robot
//! personalities, and the twenty-one card game against a house dealer.
//!
//! # Architecture
//!
//! - **games**: pure rule engines (board model, beats table, hand totaling)
//! - **runner**: interactive match controllers owning all terminal I/O
//! - **session**: scores, rounds-to-win, and per-match move history
//! - **messages**: localized string table loaded at startup
//!
//! Everything runs single-threaded and synchronous; human input and the
//! computer's move selection strictly alternate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod messages;
mod session;

// Public module declarations
pub mod cli;
pub mod runner;

// Crate-level exports - tic-tac-toe core
pub use games::tictactoe::{
    Board, Difficulty, InvalidMarker, Marker, Position, Square, WINNING_LINES, choose_move,
    find_line_with_two,
};

// Crate-level exports - rock-paper-scissors-lizard-spock
pub use games::rps::{Move, Outcome, Robot, resolve};

// Crate-level exports - twenty-one
pub use games::twenty_one::{Card, DEALER_STAY, Deck, Hand, Rank, Suit, TARGET};

// Crate-level exports - session bookkeeping and messages
pub use messages::Messages;
pub use session::{MoveLog, Participant, Scoreboard};
