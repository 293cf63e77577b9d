//! A Klondike solitaire engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the full table state,
//! enforces draw-three Klondike move legality, enumerates legal moves as a
//! textual action grammar, and ships the greedy autoplay strategy used for
//! batch win-rate estimation.
//!
//! # Example
//!
//! ```
//! use klrs::{Game, GameOptions, GameStatus};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! for action in game.legal_actions() {
//!     // feed one back with game.execute(action), or just:
//!     let _ = action;
//! }
//! let status = game.autoplay();
//! assert!(matches!(status, GameStatus::Won | GameStatus::Stuck));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod rules;
pub mod shuffle;
pub mod table;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, FOUNDATIONS, Suit, TABLEAU_COLUMNS};
pub use error::{ActionError, DrawError, ParseActionError, RedealError, TransferError};
pub use game::{Action, Game, GameStatus};
pub use options::GameOptions;
pub use pile::Pile;
pub use table::{PileId, Table};
