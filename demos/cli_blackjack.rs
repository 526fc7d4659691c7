//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjduel::{Hand, Outcome, Participant, PlayerAction, Round, RoundOptions, Table};
use tracing::Level;

struct Terminal;

impl Table for Terminal {
    fn request_action(&mut self, _round: &Round) -> PlayerAction {
        loop {
            let input = prompt_line("Action ([h]it, [s]tand, [q]uit): ");
            match input.parse::<PlayerAction>() {
                Ok(action) => return action,
                Err(err) => println!("{err}"),
            }
        }
    }

    fn report_hand(&mut self, participant: Participant, hand: &Hand, score: u16) {
        println!("{participant} hand: {hand}");
        println!("Value: {score}");
        println!("------------------");
    }

    fn report_outcome(&mut self, outcome: Outcome) {
        println!("{outcome}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let base_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Terminal;

    for round_number in 0_u64.. {
        let seed = base_seed.wrapping_add(round_number);
        let mut round = Round::new(RoundOptions::default(), seed);

        match round.play(&mut table) {
            Ok(Some(_)) => {}
            Ok(None) => {
                println!("Goodbye.");
                break;
            }
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits.
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
