//! ASCII blackjack at the terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ascii_blackjack::{Card, Hand, Move, Outcome, Round, RoundState, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Inner width of the table, in display columns.
const TABLE_WIDTH: usize = 60;

/// Each rendered card is five columns wide, so this many fit on the table.
const MAX_RENDER_CARDS: usize = TABLE_WIDTH / 5;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        play_round(&mut rng);
        if !prompt_replay() {
            break;
        }
    }
}

/// Plays one round from the initial deal to the outcome message.
fn play_round(rng: &mut ChaCha8Rng) {
    let mut round = match Round::new(rng) {
        Ok(round) => round,
        Err(err) => {
            println!("Could not start the round: {err}");
            return;
        }
    };

    let outcome = loop {
        clear_screen();
        print_table(&round);

        match round.evaluate() {
            RoundState::Over(outcome) => break outcome,
            RoundState::AwaitingMove => {
                let mv = prompt_move(round.player.active_hand().is_splittable());
                if let Err(err) = round.apply(mv, rng) {
                    // Only an exhausted deck gets here; abandon the round.
                    println!("Round aborted: {err}");
                    return;
                }
            }
        }
    };

    println!(
        "{}",
        match outcome {
            Outcome::Win => "Congratulations! You won!",
            Outcome::Push => "Push.",
            Outcome::Lose => "Sorry, you lost!",
        }
    );
}

/// Asks for a move until a valid one arrives. `split` only counts as valid
/// while the active hand can actually be split.
fn prompt_move(splittable: bool) -> Move {
    let mut message = "Enter your move! (hit, split, hold, or fold): ";
    loop {
        let Some(token) = prompt_line(message) else {
            // Stdin is gone; treat it as giving up.
            return Move::Fold;
        };

        match token.as_str() {
            "hit" => return Move::Hit,
            "hold" => return Move::Hold,
            "fold" => return Move::Fold,
            "split" if splittable => return Move::Split,
            "split" => {
                message = "Invalid Move! Cannot split this hand! (hit, hold, or fold): ";
            }
            _ => message = "Invalid Move! (hit, split, hold, or fold): ",
        }
    }
}

/// Asks whether to play another round until a `y`/`n` answer arrives.
fn prompt_replay() -> bool {
    let mut message = "Would you like to play again? (y/n): ";
    loop {
        let Some(decision) = prompt_line(message) else {
            return false;
        };

        match decision.as_str() {
            "y" => return true,
            "n" => return false,
            _ => message = "Invalid decision! Would you like to play again? (y/n): ",
        }
    }
}

/// Prints the prompt and reads one trimmed, lowercased line.
///
/// Returns `None` once stdin is closed, so callers can bail out instead of
/// re-prompting forever.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[1;1H");
}

/// Draws the table: dealer's active hand on top, player's below, then both
/// sums.
fn print_table(round: &Round) {
    println!("╔{}╦╗", "═".repeat(TABLE_WIDTH + 2));
    print_cards(round.dealer.active_hand());
    println!("╠{}╬╣", "═".repeat(TABLE_WIDTH + 2));
    print_cards(round.player.active_hand());
    println!("╠{}╬╣", "╦".repeat(TABLE_WIDTH + 2));
    println!("╚{}╝", "╩".repeat(TABLE_WIDTH + 3));

    println!("The dealer's sum is {}\n", round.dealer.active_hand().sum());
    println!("Your sum is {}\n", round.player.active_hand().sum());
}

/// Renders a hand as a row of card frames, five passes top to bottom.
fn print_cards(hand: &Hand) {
    let count = hand.len().min(MAX_RENDER_CARDS);
    let cards = &hand.cards()[..count];

    for pass in 0..5 {
        let mut line = String::from("║ ");
        for card in cards {
            line.push_str(&card_segment(card, pass));
        }
        line.push_str(&" ".repeat(TABLE_WIDTH - 5 * count));
        line.push_str(" ╠╣");
        println!("{line}");
    }
}

/// One five-column segment of a card frame for the given rendering pass:
/// frame top, suit/rank, blank middle, rank/suit, frame bottom.
fn card_segment(card: &Card, pass: usize) -> String {
    let rank = rank_str(card.rank);
    let suit = suit_str(card.suit);
    let pad = if rank.len() < 2 { " " } else { "" };

    match pass {
        0 => "╔═══╗".to_string(),
        1 => format!("║{suit}{pad}{rank}║"),
        2 => "║   ║".to_string(),
        3 => format!("║{rank}{pad}{suit}║"),
        _ => "╚═══╝".to_string(),
    }
}

fn rank_str(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => rank.to_string(),
    }
}

const fn suit_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
    }
}
