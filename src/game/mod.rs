//! Game engine: one table, one session, turn-by-turn control.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{DrawError, RedealError};
use crate::options::GameOptions;
use crate::shuffle::riffle_shuffle;
use crate::table::{PileId, Table};

mod actions;
mod solver;
pub mod state;

pub use actions::Action;
pub use state::GameStatus;

/// A Klondike game session.
///
/// The game owns the table for its whole lifetime and is driven from a
/// single logical thread: either by [`Game::autoplay`], or by an external
/// agent that reads [`Game::legal_actions`] and feeds tokens back through
/// [`Game::execute`].
///
/// # Example
///
/// ```
/// use klrs::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// let status = game.autoplay();
/// assert!(status.is_terminal());
/// ```
pub struct Game {
    /// The table zones.
    pub table: Table,
    /// Game options.
    pub options: GameOptions,
    /// Current outcome state.
    status: GameStatus,
    /// Whether any card move happened since the last redeal. Draws do not
    /// count; a redeal arriving with this flag clear means the game is
    /// stuck.
    moved_since_redeal: bool,
}

impl Game {
    /// Creates a new game: shuffles a fresh deck with a `ChaCha8Rng` seeded
    /// from `seed` and deals the initial tableau.
    ///
    /// Identical seed and options always produce the identical deal.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut table = Table::with_fresh_deck();
        riffle_shuffle(&mut table.draw, options.riffles, &mut rng);
        table.fill_tableau();
        Self::from_table(table, options)
    }

    /// Wraps an already-built table in a session, without shuffling or
    /// dealing. Useful for engineered positions.
    #[must_use]
    pub fn from_table(table: Table, options: GameOptions) -> Self {
        let status = if table.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            table,
            options,
            status,
            moved_since_redeal: true,
        }
    }

    /// Returns the current outcome state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves up to `options.draw_count` cards from the draw pile to the
    /// waste, one card at a time, so the last card drawn ends on top of the
    /// waste. Returns how many cards moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw pile is empty; a redeal is required
    /// instead.
    pub fn draw(&mut self) -> Result<usize, DrawError> {
        if self.table.draw.is_empty() {
            return Err(DrawError::EmptyDraw);
        }
        let n = self.options.draw_count.min(self.table.draw.len());
        for _ in 0..n {
            let _ = self.table.transfer(PileId::Draw, PileId::Waste, 1);
        }
        Ok(n)
    }

    /// Turns the waste back into the draw pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw pile is not empty or the waste is
    /// empty; the table is unchanged.
    pub fn redeal(&mut self) -> Result<(), RedealError> {
        self.table.redeal()?;
        self.moved_since_redeal = false;
        Ok(())
    }

    pub(crate) fn note_move(&mut self) {
        self.moved_since_redeal = true;
        if self.table.is_won() {
            self.status = GameStatus::Won;
        }
    }

    pub(crate) const fn moved_since_redeal(&self) -> bool {
        self.moved_since_redeal
    }

    pub(crate) const fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}
