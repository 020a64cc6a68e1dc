//! Moves and outcome resolution for rock-paper-scissors-lizard-spock.

use serde::{Deserialize, Serialize};

/// A throw in rock-paper-scissors-lizard-spock.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Move {
    /// Rock crushes scissors and lizard.
    Rock,
    /// Paper covers rock and disproves spock.
    Paper,
    /// Scissors cut paper and decapitate lizard.
    Scissors,
    /// Lizard eats paper and poisons spock.
    Lizard,
    /// Spock smashes scissors and vaporizes rock.
    Spock,
}

impl Move {
    /// The two moves this move defeats.
    pub fn beats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Scissors, Move::Rock],
        }
    }

    /// Checks whether this move defeats `other`.
    pub fn defeats(self, other: Move) -> bool {
        self.beats().contains(&other)
    }

    /// The lowercase name players type at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Parses the full lowercase spelling of a move.
    pub fn from_name(name: &str) -> Option<Move> {
        use strum::IntoEnumIterator;
        Move::iter().find(|candidate| candidate.name() == name)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a round from the human's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The human's move defeats the computer's.
    Win,
    /// The computer's move defeats the human's.
    Loss,
    /// Both threw the same move.
    Tie,
}

/// Resolves a round via the fixed beats table.
pub fn resolve(human: Move, computer: Move) -> Outcome {
    if human.defeats(computer) {
        Outcome::Win
    } else if computer.defeats(human) {
        Outcome::Loss
    } else {
        Outcome::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_move_beats_exactly_two() {
        for throw in Move::iter() {
            let beaten: Vec<Move> = Move::iter().filter(|other| throw.defeats(*other)).collect();
            assert_eq!(beaten.len(), 2, "{throw} should beat exactly two moves");
            assert!(!throw.defeats(throw));
        }
    }

    #[test]
    fn test_resolution_is_antisymmetric() {
        for a in Move::iter() {
            for b in Move::iter() {
                match resolve(a, b) {
                    Outcome::Win => assert_eq!(resolve(b, a), Outcome::Loss),
                    Outcome::Loss => assert_eq!(resolve(b, a), Outcome::Win),
                    Outcome::Tie => assert_eq!(a, b),
                }
            }
        }
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(resolve(Move::Paper, Move::Spock), Outcome::Win);
        assert_eq!(resolve(Move::Lizard, Move::Rock), Outcome::Loss);
        assert_eq!(resolve(Move::Spock, Move::Spock), Outcome::Tie);
    }

    #[test]
    fn test_name_roundtrip() {
        for throw in Move::iter() {
            assert_eq!(Move::from_name(throw.name()), Some(throw));
        }
        assert_eq!(Move::from_name("Rock"), None);
        assert_eq!(Move::from_name("r"), None);
    }
}
