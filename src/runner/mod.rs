//! Interactive console runners, one per game.
//!
//! Runners own all terminal I/O and match bookkeeping; the rule engines in
//! [`crate::games`] stay pure.

pub mod rps;
pub mod tictactoe;
pub mod twenty_one;
