//! The table layout: draw, waste, tableau columns, and foundations.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::card::{Card, DECK_SIZE, FOUNDATIONS, Suit, TABLEAU_COLUMNS};
use crate::error::{RedealError, TransferError};
use crate::pile::Pile;

/// Names one pile on the table, for index-based transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileId {
    /// The face-down draw pile.
    Draw,
    /// The face-up waste pile.
    Waste,
    /// The face-down part of a tableau column (0..=6).
    Hidden(usize),
    /// The face-up part of a tableau column (0..=6).
    Visible(usize),
    /// A foundation pile (0..=3).
    Foundation(usize),
}

/// The fixed Klondike layout, composed entirely of piles.
///
/// A tableau column is split into an independent face-down pile and a
/// face-up pile; the face-up pile's buried-most card logically sits on top
/// of the face-down pile's top card. Every card belongs to exactly one pile
/// at a time, and all mutation goes through [`Pile::transfer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// The face-down draw pile.
    pub draw: Pile,
    /// The face-up waste pile.
    pub waste: Pile,
    /// The face-down part of each tableau column.
    pub hidden: [Pile; TABLEAU_COLUMNS],
    /// The face-up part of each tableau column.
    pub visible: [Pile; TABLEAU_COLUMNS],
    /// The four foundations.
    pub foundations: [Pile; FOUNDATIONS],
}

impl Table {
    /// Creates a table with every zone empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table with the full ordered 52-card deck in the draw pile
    /// and every other zone empty.
    ///
    /// The deck order matches a fresh pack: Ace of Diamonds on top, then
    /// suits 0..=3 within each rank, King of Spades at the bottom.
    #[must_use]
    pub fn with_fresh_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in (1..=13).rev() {
            for suit in Suit::ALL.iter().rev() {
                cards.push(Card::new(*suit, rank));
            }
        }
        Self {
            draw: Pile::from_cards(cards),
            ..Self::default()
        }
    }

    /// Returns a shared reference to the pile named by `id`, or `None` if
    /// the index is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Draw => Some(&self.draw),
            PileId::Waste => Some(&self.waste),
            PileId::Hidden(i) => self.hidden.get(i),
            PileId::Visible(i) => self.visible.get(i),
            PileId::Foundation(i) => self.foundations.get(i),
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Draw => Some(&mut self.draw),
            PileId::Waste => Some(&mut self.waste),
            PileId::Hidden(i) => self.hidden.get_mut(i),
            PileId::Visible(i) => self.visible.get_mut(i),
            PileId::Foundation(i) => self.foundations.get_mut(i),
        }
    }

    /// Splices the top `n` cards from `source` onto `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two ids name the same pile, either id is out
    /// of range, or `source` holds fewer than `n` cards. The table is
    /// unchanged on error.
    pub fn transfer(
        &mut self,
        source: PileId,
        destination: PileId,
        n: usize,
    ) -> Result<(), TransferError> {
        if source == destination {
            return Err(TransferError::SamePile);
        }
        // Detach the source pile so both ends can be borrowed mutably.
        let mut src = mem::take(self.pile_mut(source).ok_or(TransferError::NoSuchPile)?);
        let result = match self.pile_mut(destination) {
            Some(dst) => Pile::transfer(&mut src, dst, n),
            None => Err(TransferError::NoSuchPile),
        };
        if let Some(slot) = self.pile_mut(source) {
            *slot = src;
        }
        result
    }

    /// Deals the initial layout out of the draw pile: column `i` receives
    /// `i` face-down cards, then every column receives one face-up card.
    ///
    /// Expects a full 52-card draw pile; 24 cards remain in it afterwards.
    pub fn fill_tableau(&mut self) {
        for i in 1..TABLEAU_COLUMNS {
            let _ = self.transfer(PileId::Draw, PileId::Hidden(i), i);
        }
        for i in 0..TABLEAU_COLUMNS {
            let _ = self.transfer(PileId::Draw, PileId::Visible(i), 1);
        }
    }

    /// Turns the waste pile back into the draw pile.
    ///
    /// The whole waste moves as one run and the draw pile is then reversed
    /// in place, so the least-recently-wasted card is drawn first again.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw pile is not empty or the waste is empty.
    /// The table is unchanged on error.
    pub fn redeal(&mut self) -> Result<(), RedealError> {
        if !self.draw.is_empty() {
            return Err(RedealError::DrawNotEmpty);
        }
        if self.waste.is_empty() {
            return Err(RedealError::WasteEmpty);
        }
        let n = self.waste.len();
        let _ = self.transfer(PileId::Waste, PileId::Draw, n);
        self.draw.reverse();
        Ok(())
    }

    /// Flips one face-down card face-up in column `col` if its face-up pile
    /// is empty and a face-down card is available. Returns whether a card
    /// was flipped.
    pub fn flip_facedown(&mut self, col: usize) -> bool {
        if col < TABLEAU_COLUMNS && self.visible[col].is_empty() && !self.hidden[col].is_empty() {
            let _ = self.transfer(PileId::Hidden(col), PileId::Visible(col), 1);
            true
        } else {
            false
        }
    }

    /// Returns whether all four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == 13)
    }

    /// Structural diagnostic: verifies that every one of the 52 card
    /// identities appears exactly once across all piles and that each
    /// foundation is a single-suit run ascending contiguously from Ace.
    ///
    /// Normal-path execution never calls this; it exists for tests.
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        let mut total = 0usize;

        let all_piles = self
            .pile_iter()
            .flat_map(|pile| pile.cards().iter().copied());
        for card in all_piles {
            if !(1..=13).contains(&card.rank) {
                return false;
            }
            let slot = (card.rank as usize - 1) * 4 + card.suit.index() as usize;
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
            total += 1;
        }
        if total != DECK_SIZE {
            return false;
        }

        self.foundations.iter().all(|f| {
            f.cards().iter().enumerate().all(|(i, card)| {
                card.rank as usize == i + 1 && Some(card.suit) == f.bottom().map(|b| b.suit)
            })
        })
    }

    fn pile_iter(&self) -> impl Iterator<Item = &Pile> {
        [&self.draw, &self.waste]
            .into_iter()
            .chain(self.hidden.iter())
            .chain(self.visible.iter())
            .chain(self.foundations.iter())
    }

    /// Writes the machine-readable state dump.
    ///
    /// Fixed order: draw, waste, the four foundations, one line of seven
    /// face-down counts, then the seven face-up tableau piles. Card piles
    /// are written top-first as space-terminated `<rank>:<suit>` tokens;
    /// every line ends with a newline.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from `w`.
    pub fn write_state<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        write_pile(w, &self.draw)?;
        write_pile(w, &self.waste)?;
        for foundation in &self.foundations {
            write_pile(w, foundation)?;
        }
        for hidden in &self.hidden {
            write!(w, "{} ", hidden.len())?;
        }
        writeln!(w)?;
        for visible in &self.visible {
            write_pile(w, visible)?;
        }
        Ok(())
    }
}

fn write_pile<W: fmt::Write>(w: &mut W, pile: &Pile) -> fmt::Result {
    for card in pile.iter_top_first() {
        write!(w, "{card} ")?;
    }
    writeln!(w)
}

impl fmt::Display for Table {
    /// Formats the table as its machine-readable state dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_state(f)
    }
}
