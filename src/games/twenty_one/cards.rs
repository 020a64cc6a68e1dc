//! Cards and the 52-card deck for twenty-one.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Card suit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Suit {
    /// Hearts
    Hearts,
    /// Diamonds
    Diamonds,
    /// Clubs
    Clubs,
    /// Spades
    Spades,
}

impl Suit {
    /// Suit name for prose ("the Ace of Spades").
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// One-letter abbreviation used in the card frame corners.
    pub fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Point value before ace adjustment: face value, 10 for court cards,
    /// 11 for an ace.
    pub fn points(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Checks whether the rank is an ace.
    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    /// Short form printed on the card frame.
    pub fn short(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Full name for prose.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            _ => self.short(),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The card's suit.
    pub suit: Suit,
    /// The card's rank.
    pub rank: Rank,
}

impl Card {
    /// Renders the card as a small ASCII frame.
    pub fn render(&self) -> String {
        let suit = self.suit.initial();
        let rank = self.short_padded();
        format!(
            "+--------+\n\
             |{suit}       |\n\
             |        |\n\
             |   {rank}   |\n\
             |        |\n\
             |       {suit}|\n\
             +--------+"
        )
    }

    fn short_padded(&self) -> String {
        let short = self.rank.short();
        if short.len() < 2 {
            format!("{short} ")
        } else {
            short.to_string()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the {} of {}", self.rank.name(), self.suit.name())
    }
}

/// A shuffled 52-card deck; dealing pops from the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck and shuffles it.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card { suit, rank }))
            .collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals the top card, or `None` when the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_deck_has_52_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), 52);

        let mut seen = HashSet::new();
        while let Some(card) = deck.deal() {
            assert!(seen.insert((card.suit, card.rank)));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_deal_exhausts_deck() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut deck = Deck::shuffled(&mut rng);
        for _ in 0..52 {
            assert!(deck.deal().is_some());
        }
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn test_court_cards_score_ten() {
        assert_eq!(Rank::Jack.points(), 10);
        assert_eq!(Rank::Queen.points(), 10);
        assert_eq!(Rank::King.points(), 10);
        assert_eq!(Rank::Ten.points(), 10);
        assert_eq!(Rank::Ace.points(), 11);
        assert_eq!(Rank::Two.points(), 2);
    }

    #[test]
    fn test_card_prose() {
        let card = Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        };
        assert_eq!(card.to_string(), "the Ace of Spades");
    }
}
