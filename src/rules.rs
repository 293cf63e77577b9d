//! Pure legality predicates over piles and cards.
//!
//! These functions never mutate anything; the engine applies them before
//! invoking the splice primitive. Note that solver policy (such as the
//! King-to-empty-column suppression) does not live here.

use crate::card::Card;
use crate::pile::Pile;

/// Returns whether `card` may land on top of the tableau pile `target`.
///
/// Legal when `target` is empty and `card` is a King, or when `card` is the
/// opposite color of `target`'s top card and exactly one rank below it.
#[must_use]
pub fn can_single_card_move(card: Card, target: &Pile) -> bool {
    match target.top() {
        None => card.is_king(),
        Some(top) => card.color() != top.color() && card.rank + 1 == top.rank,
    }
}

/// Returns whether the visible run `run` may move onto the tableau pile
/// `target`, judged by the run's buried-most card.
///
/// An empty `run` can never move.
#[must_use]
pub fn can_stack_move(run: &Pile, target: &Pile) -> bool {
    run.bottom()
        .is_some_and(|bottom| can_single_card_move(bottom, target))
}

/// Returns whether `card` may land on top of `foundation`.
///
/// Legal when `foundation` is empty and `card` is an Ace, or when `card`
/// matches the foundation's suit and is exactly one rank above its top card.
#[must_use]
pub fn can_foundation_move(card: Card, foundation: &Pile) -> bool {
    match foundation.top() {
        None => card.rank == 1,
        Some(top) => card.suit == top.suit && card.rank == top.rank + 1,
    }
}

/// Returns whether `foundation`'s top card may move back onto the tableau
/// pile `target` under the ordinary single-card rule.
#[must_use]
pub fn can_foundation_to_tableau(foundation: &Pile, target: &Pile) -> bool {
    foundation
        .top()
        .is_some_and(|card| can_single_card_move(card, target))
}
