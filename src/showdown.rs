//! Showdown results across several players.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::EvalError;
use crate::eval::{Evaluator, check_duplicates};
use crate::hand::{HandEvaluation, Strength};

/// Result of a single seat at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatOutcome {
    /// Sole holder of the strongest hand.
    Win,
    /// Shares the strongest hand with at least one other seat.
    Tie,
    /// Beaten by at least one other seat.
    Lose,
}

/// Result for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatResult {
    /// Index of the seat in the input.
    pub seat: usize,
    /// The seat's best hand.
    pub hand: HandEvaluation,
    /// The outcome of the seat.
    pub outcome: SeatOutcome,
}

/// Result of a whole showdown.
///
/// Splitting the pot between tied winners is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Showdown {
    /// Results for each seat, in input order.
    pub seats: Vec<SeatResult>,
    /// Seats holding the strongest hand, in ascending order.
    pub winners: Vec<usize>,
    /// Strength of the winning hand, `None` when no seat took part.
    pub best: Option<Strength>,
}

impl Showdown {
    /// Returns whether more than one seat holds the winning hand.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Ranks already evaluated hands and picks the winner(s).
///
/// Hands of equal strength tie; suits never break a tie.
///
/// # Example
///
/// ```
/// use holdem_eval::{Card, SeatOutcome, evaluate_hand, showdown};
///
/// let a = evaluate_hand(&Card::parse_many("As Ad Ks Kd 2c").unwrap()).unwrap();
/// let b = evaluate_hand(&Card::parse_many("Ac Ah Kc Kh 2d").unwrap()).unwrap();
/// let result = showdown(&[a, b]);
/// assert_eq!(result.winners, vec![0, 1]);
/// assert_eq!(result.seats[0].outcome, SeatOutcome::Tie);
/// ```
#[must_use]
pub fn showdown(hands: &[HandEvaluation]) -> Showdown {
    let Some(best) = hands.iter().map(|h| h.strength).max() else {
        return Showdown::default();
    };

    let winners: Vec<usize> = hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.strength == best)
        .map(|(seat, _)| seat)
        .collect();

    let seats = hands
        .iter()
        .enumerate()
        .map(|(seat, &hand)| {
            let outcome = if hand.strength < best {
                SeatOutcome::Lose
            } else if winners.len() > 1 {
                SeatOutcome::Tie
            } else {
                SeatOutcome::Win
            };
            SeatResult {
                seat,
                hand,
                outcome,
            }
        })
        .collect();

    debug!(
        seats = hands.len(),
        winners = winners.len(),
        strength = best.value(),
        "showdown settled"
    );

    Showdown {
        seats,
        winners,
        best: Some(best),
    }
}

impl Evaluator {
    /// Evaluates every seat's hole cards against the board and ranks them.
    ///
    /// With duplicate checking enabled, a card held by two seats, or by a
    /// seat and the board, is rejected as well.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DuplicateCard`] for a card dealt twice, otherwise
    /// the first [`EvalError`] raised by any seat.
    pub fn showdown(
        &self,
        hole_cards: &[[Card; 2]],
        community_cards: &[Card],
    ) -> Result<Showdown, EvalError> {
        if self.options.check_duplicates {
            let table: Vec<Card> = hole_cards
                .iter()
                .flatten()
                .chain(community_cards)
                .copied()
                .collect();
            check_duplicates(&table)?;
        }

        let hands = hole_cards
            .iter()
            .map(|hole| self.evaluate_best_hand(hole, community_cards))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(showdown(&hands))
    }
}

/// Evaluates every seat with default options and ranks them.
///
/// # Errors
///
/// Returns the first [`EvalError`] raised by any seat.
pub fn evaluate_showdown(
    hole_cards: &[[Card; 2]],
    community_cards: &[Card],
) -> Result<Showdown, EvalError> {
    Evaluator::default().showdown(hole_cards, community_cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandCategory;

    fn hole(s: &str) -> [Card; 2] {
        let cards = Card::parse_many(s).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn empty_table_has_no_winner() {
        let result = showdown(&[]);
        assert!(result.seats.is_empty());
        assert!(result.winners.is_empty());
        assert_eq!(result.best, None);
    }

    #[test]
    fn strongest_seat_wins_alone() {
        let board = Card::parse_many("2c 7d 9h Js Kc").unwrap();
        let result =
            evaluate_showdown(&[hole("Ah Qd"), hole("Kd 3s"), hole("4c 5c")], &board).unwrap();

        assert_eq!(result.winners, alloc::vec![1]);
        assert!(!result.is_split());
        assert_eq!(result.seats[1].outcome, SeatOutcome::Win);
        assert_eq!(result.seats[1].hand.category, HandCategory::Pair);
        assert_eq!(result.seats[0].outcome, SeatOutcome::Lose);
        assert_eq!(result.seats[2].outcome, SeatOutcome::Lose);
    }

    #[test]
    fn board_playing_for_everyone_splits() {
        let board = Card::parse_many("10h Jh Qh Kh Ah").unwrap();
        let result = evaluate_showdown(&[hole("2c 3d"), hole("4s 5s")], &board).unwrap();

        assert!(result.is_split());
        assert_eq!(result.winners, alloc::vec![0, 1]);
        assert!(result.seats.iter().all(|s| s.outcome == SeatOutcome::Tie));
    }

    #[test]
    fn seat_errors_propagate() {
        let board = Card::parse_many("2c 7d 9h").unwrap();
        let result = evaluate_showdown(&[hole("Ah Qd"), hole("Ah 3s")], &board);
        assert!(matches!(result, Err(EvalError::DuplicateCard(_))));

        let short = evaluate_showdown(&[hole("Ah Qd")], &board[..2]);
        assert_eq!(short, Err(EvalError::InsufficientCards(4)));
    }
}
