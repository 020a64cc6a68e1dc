//! Robot opponents with fixed throwing personalities.

use super::types::Move;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// One of the four robot opponents the human can face.
///
/// Each robot is a move strategy; the computer throws after seeing the
/// human's move, which is what lets Astro Boy lose and Bender win on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Robot {
    /// Throws a move the human's move defeats.
    AstroBoy,
    /// Throws a move that defeats the human's move.
    Bender,
    /// Always throws rock.
    WallE,
    /// Uniform random over all five moves.
    Rubocop,
}

impl Robot {
    /// Display name of the robot.
    pub fn name(self) -> &'static str {
        match self {
            Robot::AstroBoy => "Astro Boy",
            Robot::Bender => "Bender",
            Robot::WallE => "Wall-E",
            Robot::Rubocop => "Rubocop",
        }
    }

    /// Message-table key for the robot's introduction blurb.
    pub fn blurb_key(self) -> &'static str {
        match self {
            Robot::AstroBoy => "astroboy_info",
            Robot::Bender => "bender_info",
            Robot::WallE => "walle_info",
            Robot::Rubocop => "rubocop_info",
        }
    }

    /// Parses the menu number shown at robot selection (1-4).
    pub fn from_menu_number(number: &str) -> Option<Self> {
        match number {
            "1" => Some(Robot::AstroBoy),
            "2" => Some(Robot::Bender),
            "3" => Some(Robot::WallE),
            "4" => Some(Robot::Rubocop),
            _ => None,
        }
    }

    /// Selects the robot's throw for this round.
    pub fn choose<R: Rng + ?Sized>(self, human_move: Move, rng: &mut R) -> Move {
        use strum::IntoEnumIterator;

        let throw = match self {
            Robot::AstroBoy => *human_move
                .beats()
                .choose(rng)
                .expect("every move defeats two others"),
            Robot::Bender => Move::iter()
                .find(|candidate| candidate.defeats(human_move))
                .expect("every move is defeated by two others"),
            Robot::WallE => Move::Rock,
            Robot::Rubocop => {
                let all: Vec<Move> = Move::iter().collect();
                *all.choose(rng).expect("move set is not empty")
            }
        };

        debug!(robot = self.name(), %human_move, %throw, "robot throw");
        throw
    }
}
