//! Twenty-one: deck, hand totaling with ace re-scoring, and the dealer rule.

mod cards;
mod hand;

pub use cards::{Card, Deck, Rank, Suit};
pub use hand::{DEALER_STAY, Hand, TARGET};
