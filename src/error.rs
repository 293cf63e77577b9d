//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when splicing cards between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    /// A transfer of zero cards was requested.
    #[error("cannot transfer zero cards")]
    ZeroCards,
    /// The source pile holds fewer cards than requested.
    #[error("source pile holds fewer cards than requested")]
    NotEnoughCards,
    /// Source and destination name the same pile.
    #[error("source and destination are the same pile")]
    SamePile,
    /// A pile id is out of range for the table.
    #[error("no such pile")]
    NoSuchPile,
}

/// Errors that can occur when drawing from the draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The draw pile is empty; a redeal is required instead.
    #[error("draw pile is empty")]
    EmptyDraw,
}

/// Errors that can occur when redealing the waste back into the draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedealError {
    /// The draw pile still holds cards.
    #[error("draw pile is not empty")]
    DrawNotEmpty,
    /// There is nothing in the waste to redeal.
    #[error("waste pile is empty")]
    WasteEmpty,
}

/// Errors that can occur when parsing an action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The token was empty.
    #[error("empty action token")]
    Empty,
    /// The token's zone letter is not one of `D`, `F`, `W`, `T`.
    #[error("unknown zone letter")]
    UnknownZone,
    /// The token does not have the expected `src:count:dst` shape.
    #[error("malformed action token")]
    Malformed,
    /// A pile index is not a number or is out of range.
    #[error("pile index out of range")]
    BadIndex,
    /// The card count is not a positive number.
    #[error("bad card count")]
    BadCount,
}

/// Errors that can occur when executing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The move violates a legality rule for its destination.
    #[error("move is not legal")]
    IllegalMove,
    /// The named source pile does not hold the cards the action references.
    #[error("source pile holds fewer cards than the action names")]
    NotEnoughCards,
    /// A draw was requested with an empty draw pile.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A redeal was requested in an invalid position.
    #[error(transparent)]
    Redeal(#[from] RedealError),
}
