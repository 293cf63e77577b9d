//! Game configuration options.

use crate::shuffle::DEFAULT_RIFFLES;

/// Configuration options for a Klondike game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use klrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_riffles(500)
///     .with_draw_count(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cut-and-riffle rounds applied when shuffling a fresh deck.
    pub riffles: u32,
    /// Maximum number of cards moved from draw to waste per draw.
    pub draw_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            riffles: DEFAULT_RIFFLES,
            draw_count: 3,
        }
    }
}

impl GameOptions {
    /// Sets the number of shuffle rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_riffles(100);
    /// assert_eq!(options.riffles, 100);
    /// ```
    #[must_use]
    pub const fn with_riffles(mut self, riffles: u32) -> Self {
        self.riffles = riffles;
        self
    }

    /// Sets how many cards a draw moves to the waste.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_count(1);
    /// assert_eq!(options.draw_count, 1);
    /// ```
    #[must_use]
    pub const fn with_draw_count(mut self, draw_count: usize) -> Self {
        self.draw_count = draw_count;
        self
    }
}
