//! Five-card scoring and best-hand search.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{Card, Rank};
use crate::error::EvalError;
use crate::hand::{HandCategory, HandEvaluation, Strength};
use crate::options::EvalOptions;

/// Number of cards in a scored hand.
pub const HAND_SIZE: usize = 5;

/// Rank groups of a five-card hand, sorted by count then rank, both descending.
struct RankGroups {
    groups: [(u8, Rank); HAND_SIZE],
    len: usize,
}

impl RankGroups {
    fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }

        let mut groups = [(0, Rank::Two); HAND_SIZE];
        let mut len = 0;
        for rank in Rank::ALL.iter().rev() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                groups[len] = (count, *rank);
                len += 1;
            }
        }
        // Ranks are already descending; a stable sort by count keeps them so.
        groups[..len].sort_by(|a, b| b.0.cmp(&a.0));

        Self { groups, len }
    }

    fn counts(&self) -> (u8, u8) {
        let first = self.groups[0].0;
        let second = if self.len > 1 { self.groups[1].0 } else { 0 };
        (first, second)
    }

    fn rank(&self, index: usize) -> u32 {
        u32::from(self.groups[index].1.value())
    }
}

/// Returns the straight's high card, treating A-2-3-4-5 as five-high.
fn straight_high(sorted_ascending: &[u8; HAND_SIZE]) -> Option<u8> {
    if *sorted_ascending == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    sorted_ascending
        .windows(2)
        .all(|w| w[1] == w[0] + 1)
        .then_some(sorted_ascending[HAND_SIZE - 1])
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

fn score(cards: &[Card; HAND_SIZE]) -> (HandCategory, u32) {
    let mut ranks = cards.map(|c| c.rank.value());
    ranks.sort_unstable();
    let straight = straight_high(&ranks);
    ranks.reverse();
    let r = ranks.map(u32::from);
    let flush = is_flush(cards);
    let groups = RankGroups::new(cards);

    if let (true, Some(high)) = (flush, straight) {
        if high == Rank::Ace.value() && r[4] == u32::from(Rank::Ten.value()) {
            return (HandCategory::RoyalFlush, u32::from(high));
        }
        return (HandCategory::StraightFlush, u32::from(high));
    }

    match groups.counts() {
        (4, _) => {
            return (
                HandCategory::FourOfAKind,
                groups.rank(0) * 100 + groups.rank(1),
            );
        }
        (3, 2) => {
            return (
                HandCategory::FullHouse,
                groups.rank(0) * 100 + groups.rank(1),
            );
        }
        _ => {}
    }

    if flush {
        return (HandCategory::Flush, r[0] * 10_000 + r[1] * 100 + r[2]);
    }

    if let Some(high) = straight {
        return (HandCategory::Straight, u32::from(high));
    }

    match groups.counts() {
        (3, _) => (
            HandCategory::ThreeOfAKind,
            groups.rank(0) * 10_000 + groups.rank(1) * 100 + groups.rank(2),
        ),
        (2, 2) => (
            HandCategory::TwoPair,
            groups.rank(0) * 10_000 + groups.rank(1) * 100 + groups.rank(2),
        ),
        (2, _) => (
            HandCategory::Pair,
            groups.rank(0) * 10_000 + groups.rank(1) * 100 + groups.rank(2) * 10 + groups.rank(3),
        ),
        _ => (
            HandCategory::HighCard,
            r[0] * 10_000 + r[1] * 1_000 + r[2] * 100 + r[3] * 10 + r[4],
        ),
    }
}

fn evaluate_five(cards: [Card; HAND_SIZE]) -> HandEvaluation {
    let (category, kickers) = score(&cards);
    HandEvaluation {
        category,
        strength: Strength::new(category, kickers),
        cards,
    }
}

/// Scores exactly five cards.
///
/// # Errors
///
/// Returns [`EvalError::InvalidHandSize`] if `cards` does not hold exactly five
/// cards.
///
/// # Example
///
/// ```
/// use holdem_eval::{Card, HandCategory, evaluate_hand};
///
/// let cards = Card::parse_many("As Ks Qs Js 10s").unwrap();
/// let hand = evaluate_hand(&cards).unwrap();
/// assert_eq!(hand.category, HandCategory::RoyalFlush);
/// assert_eq!(hand.strength.value(), 9_000_014);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    let five: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    Ok(evaluate_five(five))
}

/// Finds the best five-card hand from hole and community cards.
///
/// Uses [`EvalOptions::default`], which rejects duplicate cards.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] when fewer than five cards are
/// supplied and [`EvalError::DuplicateCard`] when a card repeats.
///
/// # Example
///
/// ```
/// use holdem_eval::{Card, HandCategory, evaluate_best_hand};
///
/// let hole = Card::parse_many("As 2d").unwrap();
/// let board = Card::parse_many("3c 4h 5s 9d Kc").unwrap();
/// let best = evaluate_best_hand(&hole, &board).unwrap();
/// assert_eq!(best.category, HandCategory::Straight);
/// assert_eq!(best.strength.value(), 4_000_005);
/// ```
pub fn evaluate_best_hand(
    hole_cards: &[Card],
    community_cards: &[Card],
) -> Result<HandEvaluation, EvalError> {
    Evaluator::default().evaluate_best_hand(hole_cards, community_cards)
}

/// Hand evaluator configured by [`EvalOptions`].
///
/// The evaluator holds no state between calls and can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    /// Evaluator options.
    pub options: EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator with the given options.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Scores exactly five cards. See [`evaluate_hand`].
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidHandSize`] if `cards` does not hold exactly
    /// five cards.
    pub fn evaluate_hand(&self, cards: &[Card]) -> Result<HandEvaluation, EvalError> {
        evaluate_hand(cards)
    }

    /// Finds the best five-card hand among every 5-card subset of the pool.
    ///
    /// Subsets are visited in lexicographic index order and the first subset
    /// with the greatest strength wins.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InsufficientCards`] when the pool holds fewer than
    /// five cards, and [`EvalError::DuplicateCard`] when duplicate checking is
    /// enabled and a card repeats.
    pub fn evaluate_best_hand(
        &self,
        hole_cards: &[Card],
        community_cards: &[Card],
    ) -> Result<HandEvaluation, EvalError> {
        let mut pool = Vec::with_capacity(hole_cards.len() + community_cards.len());
        pool.extend_from_slice(hole_cards);
        pool.extend_from_slice(community_cards);

        if pool.len() < HAND_SIZE {
            return Err(EvalError::InsufficientCards(pool.len()));
        }

        if self.options.check_duplicates {
            check_duplicates(&pool)?;
        }

        let mut best: Option<HandEvaluation> = None;
        let mut visited = 0usize;
        for_each_combination(&pool, |five| {
            visited += 1;
            let hand = evaluate_five(five);
            if best.is_none_or(|b| hand.beats(&b)) {
                best = Some(hand);
            }
        });

        trace!(pool = pool.len(), subsets = visited, "searched five-card subsets");

        // The pool has at least five cards, so one subset was scored.
        let best = best.ok_or(EvalError::InsufficientCards(pool.len()))?;
        debug!(
            category = best.name(),
            strength = best.strength.value(),
            "best hand selected"
        );
        Ok(best)
    }
}

pub(crate) fn check_duplicates(pool: &[Card]) -> Result<(), EvalError> {
    for (i, card) in pool.iter().enumerate() {
        if pool[i + 1..].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// Calls `f` with every 5-card subset of `cards`, in lexicographic index order.
fn for_each_combination(cards: &[Card], mut f: impl FnMut([Card; HAND_SIZE])) {
    let n = cards.len();
    if n < HAND_SIZE {
        return;
    }

    let mut idx = [0, 1, 2, 3, 4];
    loop {
        f(idx.map(|i| cards[i]));

        // Advance the rightmost index that still has room.
        let Some(pos) = (0..HAND_SIZE).rev().find(|&p| idx[p] < n - HAND_SIZE + p) else {
            return;
        };
        idx[pos] += 1;
        for p in pos + 1..HAND_SIZE {
            idx[p] = idx[p - 1] + 1;
        }
    }
}
