//! Hand totaling and the bust/stay rules for twenty-one.

use super::cards::Card;
use serde::{Deserialize, Serialize};

/// Totals above this bust the hand.
pub const TARGET: u32 = 21;

/// The dealer stays at this total or higher.
pub const DEALER_STAY: u32 = 17;

/// A participant's hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dealt card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discards all cards between rounds.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Point total with ace adjustment.
    ///
    /// Aces count 11 first; each one is then re-scored to 1 in turn, only
    /// while the running total still exceeds the target.
    pub fn total(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(|card| card.rank.points()).sum();
        let mut soft_aces = self.cards.iter().filter(|card| card.rank.is_ace()).count();

        while total > TARGET && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }

        total
    }

    /// Checks whether the hand total exceeds the target.
    pub fn busted(&self) -> bool {
        self.total() > TARGET
    }

    /// Dealer rule: stay at 17 or better without busting.
    pub fn dealer_stays(&self) -> bool {
        let total = self.total();
        (DEALER_STAY..=TARGET).contains(&total)
    }
}

#[cfg(test)]
mod tests {
    use super::super::cards::{Rank, Suit};
    use super::*;

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card {
                suit: Suit::Clubs,
                rank,
            });
        }
        hand
    }

    #[test]
    fn test_simple_total() {
        assert_eq!(hand(&[Rank::Two, Rank::Nine]).total(), 11);
        assert_eq!(hand(&[Rank::King, Rank::Queen]).total(), 20);
    }

    #[test]
    fn test_ace_counts_eleven_when_safe() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Five]).total(), 16);
    }

    #[test]
    fn test_ace_rescored_to_one_over_target() {
        assert_eq!(hand(&[Rank::Ace, Rank::King, Rank::Five]).total(), 16);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total(), 12);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
    }

    #[test]
    fn test_only_needed_aces_rescored() {
        // 11 + 11 + 11 = 33, two conversions land on 13 and stop
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace]).total(), 13);
    }

    #[test]
    fn test_bust_detection() {
        assert!(hand(&[Rank::King, Rank::Queen, Rank::Two]).busted());
        assert!(!hand(&[Rank::Ace, Rank::King, Rank::Queen]).busted());
    }

    #[test]
    fn test_dealer_stay_rule() {
        assert!(!hand(&[Rank::King, Rank::Six]).dealer_stays());
        assert!(hand(&[Rank::King, Rank::Seven]).dealer_stays());
        assert!(hand(&[Rank::Ace, Rank::Six]).dealer_stays());
        assert!(!hand(&[Rank::King, Rank::Queen, Rank::Two]).dealer_stays());
    }

    #[test]
    fn test_clear_empties_hand() {
        let mut cards = hand(&[Rank::King, Rank::Six]);
        cards.clear();
        assert_eq!(cards.total(), 0);
        assert!(cards.cards().is_empty());
    }
}
