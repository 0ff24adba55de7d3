//! Error types for evaluation and dealing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while evaluating a hand.
///
/// All variants describe malformed input from the caller, never an
/// environmental failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A five-card evaluation received a different number of cards.
    #[error("a hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// Hole and community cards together hold fewer than five cards.
    #[error("need at least 5 cards to evaluate a hand, got {0}")]
    InsufficientCards(usize),
    /// The same card appears twice in the pool.
    #[error("duplicate card {0} in pool")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left.
        remaining: usize,
    },
    /// The operating system entropy source could not seed the shuffle.
    #[cfg(feature = "std")]
    #[error("failed to seed the shuffle from the operating system")]
    Entropy,
}

/// Errors that can occur while parsing card notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card notation")]
    Empty,
    /// The rank part was not one of `2`..`10`, `T`, `J`, `Q`, `K`, `A`.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit part was not one of `h`, `d`, `c`, `s` or a suit symbol.
    #[error("invalid card suit")]
    InvalidSuit,
}
