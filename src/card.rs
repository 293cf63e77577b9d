//! Card types and deck constants.

use core::fmt;

/// Card suit, in the engine's 0..=3 wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Diamonds (code 0, red).
    Diamonds = 0,
    /// Clubs (code 1, black).
    Clubs = 1,
    /// Hearts (code 2, red).
    Hearts = 2,
    /// Spades (code 3, black).
    Spades = 3,
}

impl Suit {
    /// All four suits in wire order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Returns the 0..=3 wire code of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks a suit up by its wire code.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the color of the suit. Even codes are red, odd codes black.
    #[must_use]
    pub const fn color(self) -> Color {
        if self as u8 % 2 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// Returns the single-letter name used in human-readable output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Diamonds and hearts.
    Red,
    /// Clubs and spades.
    Black,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will never satisfy the legality predicates in the
    /// positions that matter (Ace starts a foundation, King fills a column).
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the color of the card, derived from its suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns whether this card is a King (rank 13).
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank == 13
    }

    /// Returns the single-character rank name used in human-readable output
    /// (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_letter(self) -> char {
        match self.rank {
            1 => 'A',
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        }
    }
}

impl fmt::Display for Card {
    /// Formats the card as its `<rank>:<suit>` wire token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.rank, self.suit.index())
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles, one per suit.
pub const FOUNDATIONS: usize = 4;
