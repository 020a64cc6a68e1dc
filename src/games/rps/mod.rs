//! Rock-paper-scissors-lizard-spock: fixed beats table plus four robot
//! personalities.

mod bots;
mod types;

pub use bots::Robot;
pub use types::{Move, Outcome, resolve};
