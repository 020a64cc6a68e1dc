//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};

/// Parlor Games - turn-based console games against robot opponents
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Console games against robot opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against a robot with a chosen difficulty
    Tictactoe,

    /// Play rock-paper-scissors-lizard-spock against a robot personality
    Rps,

    /// Play the twenty-one card game against the house dealer
    TwentyOne,
}
