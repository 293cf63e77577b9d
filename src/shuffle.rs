//! Riffle shuffling over an injected random source.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::pile::Pile;

/// Default number of cut-and-riffle rounds applied to a fresh deck.
pub const DEFAULT_RIFFLES: u32 = 1000;

/// Shuffles `pile` in place with `rounds` cut-and-riffle passes.
///
/// Each pass cuts the pile into two halves at the midpoint and interleaves
/// them card by card: a fair coin draw from `rng` picks which half's top
/// card comes next, and once one half runs out the rest of the other is
/// appended unchanged. The result is always a permutation of the input, and
/// identical RNG output produces an identical order.
pub fn riffle_shuffle<R: Rng>(pile: &mut Pile, rounds: u32, rng: &mut R) {
    // Work in top-first order so "take from the top of a half" is a simple
    // front-of-slice cursor.
    let mut cards: Vec<Card> = pile.iter_top_first().collect();
    let cut = cards.len() / 2;

    for _ in 0..rounds {
        let lower = cards.split_off(cut);
        let upper = cards;

        let mut merged = Vec::with_capacity(upper.len() + lower.len());
        let mut u = 0;
        let mut l = 0;
        while u < upper.len() && l < lower.len() {
            if rng.random() {
                merged.push(upper[u]);
                u += 1;
            } else {
                merged.push(lower[l]);
                l += 1;
            }
        }
        merged.extend_from_slice(&upper[u..]);
        merged.extend_from_slice(&lower[l..]);

        cards = merged;
    }

    cards.reverse();
    *pile = Pile::from_cards(cards);
}
