//! Game rule engines, one module per game.

pub mod rps;
pub mod tictactoe;
pub mod twenty_one;
