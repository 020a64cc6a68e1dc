//! Parlor Games - unified console binary.

use anyhow::Result;
use clap::Parser;
use parlor_games::cli::{Cli, Command};
use parlor_games::{Messages, runner};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Stdout is the game surface; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let messages = Messages::load()?;

    match cli.command {
        Command::Tictactoe => runner::tictactoe::run(&messages),
        Command::Rps => runner::rps::run(&messages),
        Command::TwentyOne => runner::twenty_one::run(&messages),
    }
}
