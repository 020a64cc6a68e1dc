//! Interactive tic-tac-toe match against a robot opponent.

use crate::console;
use crate::games::tictactoe::{Board, Difficulty, Marker, Position, choose_move};
use crate::messages::Messages;
use crate::session::Scoreboard;
use anyhow::Result;
use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use tracing::info;

/// Round wins needed to take the match.
const WINNING_ROUNDS: u32 = 3;

const ROBOT_NAMES: [&str; 4] = ["Astro Boy", "Wall-E", "Rubocop", "Bender"];

/// Runs tic-tac-toe matches until the player declines to continue.
pub fn run(messages: &Messages) -> Result<()> {
    let mut rng = rand::rng();
    console::clear_screen()?;
    console::prompt(messages.text("welcome_tictactoe"));
    println!("First to win {WINNING_ROUNDS} rounds wins the game!");
    println!();

    let human_name =
        console::read_nonempty(messages.text("ask_name"), messages.text("empty_name"))?;
    let human_marker = read_marker(messages)?;
    let difficulty = read_difficulty(messages)?;

    let robot_name = *ROBOT_NAMES
        .choose(&mut rng)
        .expect("robot roster is not empty");
    let robot_marker = assign_robot_marker(robot_name, human_marker, &mut rng);
    info!(robot = robot_name, ?difficulty, "match configured");
    console::clear_screen()?;

    let mut scoreboard = Scoreboard::new(human_name, robot_name, WINNING_ROUNDS);
    let mut board = Board::new();

    loop {
        loop {
            play_round(
                &mut board,
                &mut scoreboard,
                difficulty,
                human_marker,
                robot_marker,
                messages,
                &mut rng,
            )?;
            if let Some(winner) = scoreboard.grand_winner() {
                println!(
                    "{} won {WINNING_ROUNDS} rounds and wins the game!",
                    winner.name()
                );
                println!();
                break;
            }
            if !console::confirm(messages.text("next_round"), messages.text("invalid"))? {
                break;
            }
            board.reset();
            console::clear_screen()?;
        }
        if !console::confirm(messages.text("play_again"), messages.text("invalid"))? {
            break;
        }
        board.reset();
        scoreboard.reset();
        console::clear_screen()?;
        println!("Let's play again!");
        println!();
    }

    console::clear_screen()?;
    console::prompt(messages.text("goodbye"));
    Ok(())
}

/// Plays one round: first-player choice, alternating turns until the board
/// is won or tied, then scoring and the round report.
fn play_round<R: Rng + ?Sized>(
    board: &mut Board,
    scoreboard: &mut Scoreboard,
    difficulty: Difficulty,
    human_marker: Marker,
    robot_marker: Marker,
    messages: &Messages,
    rng: &mut R,
) -> Result<()> {
    let mut human_turn = console::read_choice(
        messages.text("ask_turn_order"),
        messages.text("invalid"),
        &["1", "2"],
    )? == "1";

    console::clear_screen()?;
    display_board(board, scoreboard, human_marker, robot_marker);

    loop {
        if human_turn {
            let pos = read_move(board, messages)?;
            board.place_marker(pos, human_marker);
        } else {
            let pos = choose_move(board, difficulty, robot_marker, human_marker, rng);
            board.place_marker(pos, robot_marker);
        }

        if board.is_won() || board.is_tie() {
            break;
        }

        human_turn = !human_turn;
        if human_turn {
            console::clear_screen()?;
            display_board(board, scoreboard, human_marker, robot_marker);
        }
    }

    match board.winning_marker() {
        Some(winner) if winner == human_marker => scoreboard.score_human(),
        Some(winner) if winner == robot_marker => scoreboard.score_computer(),
        _ => {}
    }

    console::clear_screen()?;
    display_board(board, scoreboard, human_marker, robot_marker);
    display_score(scoreboard);
    match board.winning_marker() {
        Some(winner) if winner == human_marker => {
            println!("{} won!", scoreboard.human().name());
        }
        Some(_) => println!("{} won!", scoreboard.computer().name()),
        None => println!("{}", messages.text("tie_round")),
    }
    println!();

    Ok(())
}

fn read_marker(messages: &Messages) -> Result<Marker> {
    console::prompt(messages.text("ask_marker"));
    loop {
        let input = console::read_line()?;
        let mut chars = input.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next())
            && let Ok(marker) = Marker::new(symbol)
        {
            return Ok(marker);
        }
        console::prompt(messages.text("invalid"));
    }
}

fn read_difficulty(messages: &Messages) -> Result<Difficulty> {
    console::prompt(messages.text("ask_difficulty"));
    loop {
        let input = console::read_line()?;
        if let Some(difficulty) = Difficulty::from_key(&input) {
            return Ok(difficulty);
        }
        console::prompt(messages.text("invalid"));
    }
}

/// Prompts for a square, retrying until the answer names an unmarked one.
fn read_move(board: &Board, messages: &Messages) -> Result<Position> {
    let open: Vec<String> = board
        .unmarked_positions()
        .iter()
        .map(Position::to_string)
        .collect();
    console::prompt(&format!(
        "Choose a square ({}):",
        console::joiner(&open, ", ", "or")
    ));
    loop {
        let input = console::read_line()?;
        if let Ok(square) = input.parse::<u8>()
            && let Some(pos) = Position::from_square(square)
            && board.is_unmarked(pos)
        {
            return Ok(pos);
        }
        console::prompt(messages.text("invalid"));
    }
}

/// The robot marks with its initial, unless the human already took that
/// letter, in which case it settles for a random different one.
fn assign_robot_marker<R: Rng + ?Sized>(name: &str, human: Marker, rng: &mut R) -> Marker {
    let initial = name.chars().next().expect("robot names are not empty");
    let marker = Marker::new(initial).expect("robot names start with an uppercase letter");
    if marker != human {
        return marker;
    }
    ('A'..='Z')
        .filter(|letter| *letter != human.symbol())
        .choose(rng)
        .and_then(|letter| Marker::new(letter).ok())
        .expect("some uppercase letter differs from the human's marker")
}

fn display_board(
    board: &Board,
    scoreboard: &Scoreboard,
    human_marker: Marker,
    robot_marker: Marker,
) {
    println!("{}: {}", scoreboard.human().name(), human_marker);
    println!("{}: {}", scoreboard.computer().name(), robot_marker);
    println!();
    println!("{}", board.render());
}

fn display_score(scoreboard: &Scoreboard) {
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
    println!();
}
