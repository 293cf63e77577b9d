//! Agent-protocol CLI example.
//!
//! Per turn: writes the state dump and the legal-action line to stdout,
//! reads one action token from stdin, and executes it. Runs until the game
//! is won or abandoned.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use klrs::{Game, GameOptions, GameStatus};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let mut state = String::new();
        if game.table.write_state(&mut state).is_err() || game.write_actions(&mut state).is_err() {
            eprintln!("failed to format state");
            return;
        }
        print!("{state}");
        let _ = io::stdout().flush();

        if game.status() == GameStatus::Won {
            println!("won");
            return;
        }

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let token = line.trim();
        if token == "q" {
            return;
        }

        match token.parse() {
            Ok(action) => {
                if let Err(err) = game.execute(action) {
                    eprintln!("rejected: {err}");
                }
            }
            Err(err) => eprintln!("bad token: {err}"),
        }
    }
}
