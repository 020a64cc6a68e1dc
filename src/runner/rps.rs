//! Interactive rock-paper-scissors-lizard-spock match against a robot.

use crate::console;
use crate::games::rps::{Move, Outcome, Robot, resolve};
use crate::messages::Messages;
use crate::session::{MoveLog, Scoreboard};
use anyhow::Result;
use rand::Rng;
use tracing::info;

/// Points needed to take the match.
const POINTS_TO_WIN: u32 = 2;

/// Runs RPS matches until the player declines to continue.
pub fn run(messages: &Messages) -> Result<()> {
    let mut rng = rand::rng();
    console::clear_screen()?;
    console::prompt(messages.text("welcome_rps"));
    println!("First to {POINTS_TO_WIN} points wins!");
    println!();
    println!("{}", messages.text("rps_rules"));
    println!();

    let human_name =
        console::read_nonempty(messages.text("ask_name"), messages.text("empty_name"))?;
    let robot = read_robot(messages)?;
    info!(robot = robot.name(), "match configured");

    console::clear_screen()?;
    println!("You're playing against {}!", robot.name());
    println!();
    println!("{}", messages.text(robot.blurb_key()));
    println!();

    let mut scoreboard = Scoreboard::new(human_name, robot.name(), POINTS_TO_WIN);
    let mut log: MoveLog<Move> = MoveLog::new();

    loop {
        scoreboard.reset();
        loop {
            play_round(&mut scoreboard, robot, &mut log, messages, &mut rng)?;
            if let Some(winner) = scoreboard.grand_winner() {
                println!();
                println!("{} got {POINTS_TO_WIN} points and wins!", winner.name());
                println!();
                break;
            }
            if !console::confirm(messages.text("next_round"), messages.text("invalid"))? {
                break;
            }
            console::clear_screen()?;
        }
        display_history(&log, &scoreboard);
        if !console::confirm(messages.text("play_again"), messages.text("invalid"))? {
            break;
        }
        console::clear_screen()?;
    }

    console::clear_screen()?;
    console::prompt(messages.text("goodbye"));
    Ok(())
}

fn play_round<R: Rng + ?Sized>(
    scoreboard: &mut Scoreboard,
    robot: Robot,
    log: &mut MoveLog<Move>,
    messages: &Messages,
    rng: &mut R,
) -> Result<()> {
    let human_move = read_move(messages)?;
    let robot_move = robot.choose(human_move, rng);
    log.record(human_move, robot_move);

    console::clear_screen()?;
    println!("{} chose {human_move}.", scoreboard.human().name());
    println!("{} chose {robot_move}.", scoreboard.computer().name());

    match resolve(human_move, robot_move) {
        Outcome::Win => {
            println!("{} won!", scoreboard.human().name());
            scoreboard.score_human();
        }
        Outcome::Loss => {
            println!("{} won!", scoreboard.computer().name());
            scoreboard.score_computer();
        }
        Outcome::Tie => println!("{}", messages.text("tie_rps")),
    }

    println!(
        "{}'s score: {}",
        scoreboard.human().name(),
        scoreboard.human().score()
    );
    println!(
        "{}'s score: {}",
        scoreboard.computer().name(),
        scoreboard.computer().score()
    );

    Ok(())
}

fn read_robot(messages: &Messages) -> Result<Robot> {
    console::prompt(messages.text("ask_robot"));
    console::prompt(messages.text("robot_menu"));
    loop {
        let input = console::read_line()?;
        if let Some(robot) = Robot::from_menu_number(&input) {
            return Ok(robot);
        }
        console::prompt(messages.text("invalid"));
    }
}

fn read_move(messages: &Messages) -> Result<Move> {
    console::prompt(messages.text("ask_move"));
    loop {
        let input = console::read_line()?;
        if let Some(throw) = Move::from_name(&input) {
            return Ok(throw);
        }
        console::prompt(messages.text("spell_move"));
    }
}

fn display_history(log: &MoveLog<Move>, scoreboard: &Scoreboard) {
    println!("{}'s moves:", scoreboard.human().name());
    for throw in log.human() {
        println!("{throw}");
    }
    println!();
    println!("{}'s moves:", scoreboard.computer().name());
    for throw in log.computer() {
        println!("{throw}");
    }
    println!();
}
