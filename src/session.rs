//! Match bookkeeping shared by all three games: participants, scores, and
//! per-session move history.

use derive_getters::Getters;

/// A named participant with a running score of round wins.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Participant {
    /// Display name.
    name: String,
    /// Rounds (or points) won this match.
    score: u32,
}

impl Participant {
    /// Creates a participant with a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Credits one round win.
    pub fn record_win(&mut self) {
        self.score += 1;
    }

    /// Zeroes the score for a fresh match.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Scores for a human-versus-computer match and the threshold that ends it.
#[derive(Debug, Clone, Getters)]
pub struct Scoreboard {
    /// The human participant.
    human: Participant,
    /// The computer participant.
    computer: Participant,
    /// Round wins needed to take the match.
    rounds_to_win: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both scores at zero.
    pub fn new(human_name: impl Into<String>, computer_name: impl Into<String>, rounds_to_win: u32) -> Self {
        Self {
            human: Participant::new(human_name),
            computer: Participant::new(computer_name),
            rounds_to_win,
        }
    }

    /// Credits a round win to the human.
    pub fn score_human(&mut self) {
        self.human.record_win();
    }

    /// Credits a round win to the computer.
    pub fn score_computer(&mut self) {
        self.computer.record_win();
    }

    /// The participant who has reached the winning score, if any.
    pub fn grand_winner(&self) -> Option<&Participant> {
        if *self.human.score() == self.rounds_to_win {
            Some(&self.human)
        } else if *self.computer.score() == self.rounds_to_win {
            Some(&self.computer)
        } else {
            None
        }
    }

    /// Resets both scores for a fresh match.
    pub fn reset(&mut self) {
        self.human.reset_score();
        self.computer.reset_score();
    }
}

/// Per-match move history for both participants.
///
/// Owned by the session and passed to whoever needs to append or display it;
/// history is never process-global state.
#[derive(Debug, Clone, Default, Getters)]
pub struct MoveLog<T> {
    /// Moves the human has made, in order.
    human: Vec<T>,
    /// Moves the computer has made, in order.
    computer: Vec<T>,
}

impl<T> MoveLog<T> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            human: Vec::new(),
            computer: Vec::new(),
        }
    }

    /// Appends one round's pair of moves.
    pub fn record(&mut self, human_move: T, computer_move: T) {
        self.human.push(human_move);
        self.computer.push(computer_move);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_winner_at_threshold() {
        let mut scoreboard = Scoreboard::new("Ada", "Bender", 2);
        assert!(scoreboard.grand_winner().is_none());

        scoreboard.score_human();
        assert!(scoreboard.grand_winner().is_none());

        scoreboard.score_human();
        let winner = scoreboard.grand_winner().expect("human reached threshold");
        assert_eq!(winner.name(), "Ada");
    }

    #[test]
    fn test_reset_clears_scores() {
        let mut scoreboard = Scoreboard::new("Ada", "Wall-E", 3);
        scoreboard.score_computer();
        scoreboard.score_computer();
        scoreboard.reset();
        assert_eq!(*scoreboard.human().score(), 0);
        assert_eq!(*scoreboard.computer().score(), 0);
        assert!(scoreboard.grand_winner().is_none());
    }

    #[test]
    fn test_move_log_records_pairs() {
        let mut log: MoveLog<&str> = MoveLog::new();
        log.record("rock", "spock");
        log.record("lizard", "rock");
        assert_eq!(log.human(), &vec!["rock", "lizard"]);
        assert_eq!(log.computer(), &vec!["spock", "rock"]);
    }
}
