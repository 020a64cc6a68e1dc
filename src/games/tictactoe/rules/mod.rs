//! Round-ending rules: win and draw detection.

pub mod draw;
pub mod win;

pub use win::WINNING_LINES;
