//! A Texas Hold'em hand evaluator with optional `no_std` support.
//!
//! The crate scores five-card poker hands, finds the best five cards out of a
//! player's hole cards and the board, and ranks players at showdown. Every
//! evaluation yields a [`Strength`] that totally orders hands across all
//! categories.
//!
//! # Example
//!
//! ```
//! use holdem_eval::{Card, HandCategory, evaluate_best_hand};
//!
//! let hole = Card::parse_many("As Ks").unwrap();
//! let board = Card::parse_many("Qs Js 10s 2h 3d").unwrap();
//! let best = evaluate_best_hand(&hole, &board).unwrap();
//! assert_eq!(best.category, HandCategory::RoyalFlush);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod showdown;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, Street, create_deck, shuffle};
pub use error::{DeckError, EvalError, ParseCardError};
pub use eval::{Evaluator, HAND_SIZE, evaluate_best_hand, evaluate_hand};
pub use hand::{HandCategory, HandEvaluation, Strength, compare};
pub use options::EvalOptions;
pub use showdown::{SeatOutcome, SeatResult, Showdown, evaluate_showdown, showdown};
