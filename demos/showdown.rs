//! CLI showdown example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use holdem_eval::{Card, Deck, SeatOutcome, Street, evaluate_best_hand, evaluate_showdown};

fn main() {
    println!("Hold'em showdown example");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let Some(players) = prompt_usize(&mut io::stdin().lock(), "Players (2-10, 0 to quit): ")
        else {
            break;
        };

        if players == 0 {
            println!("Goodbye.");
            break;
        }
        if !(2..=10).contains(&players) {
            println!("Please choose between 2 and 10 players.");
            continue;
        }

        let mut deck = Deck::from_seed(seed);
        seed = seed.wrapping_add(1);

        let holes = match deck.deal_hole_cards(players) {
            Ok(holes) => holes,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        };

        let mut board = Vec::new();
        for street in [Street::Flop, Street::Turn, Street::River] {
            match deck.deal_community(street) {
                Ok(cards) => board.extend(cards),
                Err(err) => {
                    println!("Deal error: {err}");
                    break;
                }
            }
            print_street(street, &board, &holes);
        }

        match evaluate_showdown(&holes, &board) {
            Ok(result) => {
                println!("\nShowdown:");
                for seat in &result.seats {
                    let marker = match seat.outcome {
                        SeatOutcome::Win => colorize("WIN ", "32"),
                        SeatOutcome::Tie => colorize("TIE ", "33"),
                        SeatOutcome::Lose => colorize("lose", "90"),
                    };
                    println!(
                        "{marker} Seat {}: {} | {} | strength {}",
                        seat.seat,
                        format_cards(&holes[seat.seat]),
                        seat.hand,
                        seat.hand.strength
                    );
                }
                if result.is_split() {
                    println!("Split pot between seats {:?}", result.winners);
                }
            }
            Err(err) => println!("Evaluation error: {err}"),
        }
        println!();
    }
}

fn print_street(street: Street, board: &[Card], holes: &[[Card; 2]]) {
    println!("\n{street:?}: {}", format_cards(board));
    if board.len() < 3 {
        return;
    }
    for (seat, hole) in holes.iter().enumerate() {
        match evaluate_best_hand(hole, board) {
            Ok(best) => println!("  Seat {seat}: {} -> {}", format_cards(hole), best.name()),
            Err(err) => println!("  Seat {seat}: {err}"),
        }
    }
}

/// Reads a count from `input`; `None` once input is closed.
fn prompt_usize(input: &mut impl BufRead, prompt: &str) -> Option<usize> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match line.trim().parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_retries_until_a_number() {
        let mut input = io::Cursor::new("q\nfour\n 4 \n");
        assert_eq!(prompt_usize(&mut input, ""), Some(4));
    }

    #[test]
    fn zero_and_closed_input_end_the_demo() {
        assert_eq!(prompt_usize(&mut io::Cursor::new("0\n"), ""), Some(0));
        assert_eq!(prompt_usize(&mut io::Cursor::new("quit\n"), ""), None);
        assert_eq!(prompt_usize(&mut io::Cursor::new(""), ""), None);
    }
}
