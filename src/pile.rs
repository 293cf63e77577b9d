//! Ordered card piles and the splice primitive every move is built on.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TransferError;

/// An ordered sequence of cards with two accessible ends.
///
/// The *top* is the end nearer the table surface, where cards are placed and
/// taken; the *bottom* is the buried end. Internally the top lives at the
/// tail of the backing vector, so single-card operations are push/pop and a
/// run transfer only touches the cards that actually move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards given in bottom-to-top order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the bottom (buried-most) card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the card `offset` positions below the top (0 is the top).
    #[must_use]
    pub fn nth_from_top(&self, offset: usize) -> Option<Card> {
        self.len().checked_sub(offset + 1).map(|i| self.cards[i])
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Reverses the pile in place, swapping top and bottom.
    pub fn reverse(&mut self) {
        self.cards.reverse();
    }

    /// Returns the cards in bottom-to-top order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards top-first, the order state dumps are written in.
    pub fn iter_top_first(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }

    /// Moves the `n` cards nearest `source`'s top onto `destination`'s top,
    /// preserving their relative order.
    ///
    /// The cards are spliced as a block: the run's buried-most card lands on
    /// `destination`'s old top, and `source`'s old top becomes
    /// `destination`'s new top. Only the moved run is touched; the interior
    /// of both piles stays in place. The primitive never inspects rank, suit,
    /// or color; legality is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or exceeds `source.len()`. Neither
    /// pile is modified on error.
    pub fn transfer(
        source: &mut Self,
        destination: &mut Self,
        n: usize,
    ) -> Result<(), TransferError> {
        if n == 0 {
            return Err(TransferError::ZeroCards);
        }
        let remaining = source
            .len()
            .checked_sub(n)
            .ok_or(TransferError::NotEnoughCards)?;

        let mut run = source.cards.split_off(remaining);
        destination.cards.append(&mut run);
        Ok(())
    }
}
