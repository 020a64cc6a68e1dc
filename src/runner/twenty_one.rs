//! Interactive twenty-one match against the house dealer.

use crate::console;
use crate::games::twenty_one::{Card, Deck, Hand};
use crate::messages::Messages;
use crate::session::Scoreboard;
use anyhow::Result;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

/// Round wins needed to become champion.
const ROUNDS_TO_WIN: u32 = 3;

const DEALER_NAMES: [&str; 3] = ["Gus", "Shark", "Big Guy"];

/// Runs twenty-one matches until the player declines to continue.
pub fn run(messages: &Messages) -> Result<()> {
    let mut rng = rand::rng();
    console::clear_screen()?;
    console::prompt(messages.text("welcome_twenty_one"));

    let dealer_name = *DEALER_NAMES
        .choose(&mut rng)
        .expect("dealer roster is not empty");
    println!("You're playing against the dealer, {dealer_name}.");
    println!();

    let human_name =
        console::read_nonempty(messages.text("ask_name"), messages.text("empty_name"))?;
    println!();
    println!("First to {ROUNDS_TO_WIN} is the champion!");
    println!();

    if console::confirm(messages.text("read_rules"), messages.text("invalid"))? {
        console::clear_screen()?;
        println!("{}", messages.text("twenty_one_rules"));
        println!();
    }
    info!(dealer = dealer_name, "match configured");

    let mut scoreboard = Scoreboard::new(human_name, dealer_name, ROUNDS_TO_WIN);
    let mut deck = Deck::shuffled(&mut rng);
    let mut player_hand = Hand::new();
    let mut dealer_hand = Hand::new();

    loop {
        loop {
            play_round(
                &mut deck,
                &mut player_hand,
                &mut dealer_hand,
                &mut scoreboard,
                messages,
                &mut rng,
            )?;
            if scoreboard.grand_winner().is_some() {
                break;
            }
            if !console::confirm(messages.text("next_round"), messages.text("invalid"))? {
                break;
            }
        }
        display_champion(&scoreboard);
        if !console::confirm(messages.text("play_again"), messages.text("invalid"))? {
            break;
        }
        deck = Deck::shuffled(&mut rng);
        player_hand.clear();
        dealer_hand.clear();
        scoreboard.reset();
        console::clear_screen()?;
    }

    console::clear_screen()?;
    console::prompt(messages.text("goodbye"));
    Ok(())
}

/// Deals a card, reshuffling a fresh deck if this one has run out mid-match.
fn draw<R: Rng + ?Sized>(deck: &mut Deck, rng: &mut R) -> Card {
    match deck.deal() {
        Some(card) => card,
        None => {
            *deck = Deck::shuffled(rng);
            deck.deal().expect("fresh deck is not empty")
        }
    }
}

fn play_round<R: Rng + ?Sized>(
    deck: &mut Deck,
    player_hand: &mut Hand,
    dealer_hand: &mut Hand,
    scoreboard: &mut Scoreboard,
    messages: &Messages,
    rng: &mut R,
) -> Result<()> {
    player_hand.clear();
    dealer_hand.clear();
    for _ in 0..2 {
        player_hand.add(draw(deck, rng));
        dealer_hand.add(draw(deck, rng));
    }

    console::clear_screen()?;
    display_initial_player(scoreboard.human().name(), player_hand);
    display_initial_dealer(scoreboard.computer().name(), dealer_hand);

    player_turn(deck, player_hand, scoreboard.human().name(), messages, rng)?;
    if !player_hand.busted() {
        dealer_turn(deck, dealer_hand, scoreboard.computer().name(), rng);
    }

    display_hand(scoreboard.human().name(), player_hand);
    display_hand(scoreboard.computer().name(), dealer_hand);

    if player_hand.busted() {
        println!(
            "{} busted! So {} wins!",
            scoreboard.human().name(),
            scoreboard.computer().name()
        );
        scoreboard.score_computer();
    } else if dealer_hand.busted() {
        println!(
            "{} busted! So {} wins!",
            scoreboard.computer().name(),
            scoreboard.human().name()
        );
        scoreboard.score_human();
    } else if player_hand.total() > dealer_hand.total() {
        println!(
            "{} wins with a hand total of {}!",
            scoreboard.human().name(),
            player_hand.total()
        );
        scoreboard.score_human();
    } else if dealer_hand.total() > player_hand.total() {
        println!(
            "{} wins with a hand total of {}!",
            scoreboard.computer().name(),
            dealer_hand.total()
        );
        scoreboard.score_computer();
    } else {
        println!(
            "It's a tie! Both players have a hand total of {}!",
            player_hand.total()
        );
    }

    println!();
    println!(
        "--{}'s score: {} --",
        scoreboard.human().name(),
        scoreboard.human().score()
    );
    println!(
        "--{}'s score: {} --",
        scoreboard.computer().name(),
        scoreboard.computer().score()
    );
    println!();

    Ok(())
}

fn player_turn<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand: &mut Hand,
    name: &str,
    messages: &Messages,
    rng: &mut R,
) -> Result<()> {
    println!("--{name}'s turn--");
    loop {
        let choice = console::read_choice(
            messages.text("hit_or_stay"),
            messages.text("invalid"),
            &["h", "s"],
        )?;
        console::clear_screen()?;
        if choice == "s" {
            println!("{name} stays!");
            return Ok(());
        }

        hand.add(draw(deck, rng));
        println!("{name} hits!");
        display_hand(name, hand);
        if hand.busted() {
            return Ok(());
        }
    }
}

fn display_champion(scoreboard: &Scoreboard) {
    let Some(winner) = scoreboard.grand_winner() else {
        return;
    };
    if winner.name() == scoreboard.human().name() {
        println!("Congrats! You won {ROUNDS_TO_WIN} rounds!");
        println!("A big check addressed to {} coming soon!", winner.name());
    } else {
        println!("The dealer won {ROUNDS_TO_WIN} rounds!");
        println!("Better luck next time.");
        println!("{} has the house on their side...", winner.name());
    }
    println!();
}

fn dealer_turn<R: Rng + ?Sized>(deck: &mut Deck, hand: &mut Hand, name: &str, rng: &mut R) {
    println!("--{name}'s turn--");
    loop {
        if hand.dealer_stays() {
            println!("{name} stays!");
            return;
        }
        if hand.busted() {
            return;
        }
        println!("{name} hits!");
        hand.add(draw(deck, rng));
    }
}

fn display_hand(name: &str, hand: &Hand) {
    println!("~*oO{{ {name}'s hand }}Oo*~");
    for card in hand.cards() {
        println!("{}", card.render());
    }
    println!("Total: {}", hand.total());
    println!();
}

fn display_initial_player(name: &str, hand: &Hand) {
    println!("~*oO{{ {name}'s initial hand }}Oo*~");
    for card in hand.cards() {
        println!("{}", card.render());
    }
    let cards = hand.cards();
    println!("You have {} and {}.", cards[0], cards[1]);
    println!("This gives you a total of {}!", hand.total());
    println!();
}

fn display_initial_dealer(name: &str, hand: &Hand) {
    println!("~*oO{{ {name}'s initial hand }}Oo*~");
    let first = hand
        .cards()
        .first()
        .expect("dealer was dealt two cards");
    println!("{}", first.render());
    println!("{name} has {first} and a mystery card...");
    println!();
}
