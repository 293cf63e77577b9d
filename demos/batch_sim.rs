//! Batch win-rate estimation example.
//!
//! Plays `n` games (default 1000) with the greedy solver over consecutive
//! seeds and prints the win count.

use std::time::{SystemTime, UNIX_EPOCH};

use klrs::{Game, GameOptions, GameStatus};

fn main() {
    let games: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1000);

    let base_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = GameOptions::default();
    let mut wins = 0u64;

    for i in 0..games {
        let mut game = Game::new(options, base_seed.wrapping_add(i));
        if game.autoplay() == GameStatus::Won {
            wins += 1;
        }
    }

    println!("{wins} / {games} games won");
}
