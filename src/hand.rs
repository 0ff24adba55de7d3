//! Hand categories, strength values, and evaluation results.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No pair, straight or flush.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Straight and flush together.
    StraightFlush,
    /// Ace-high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns the human-readable name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// Returns the lowest strength a hand of this category can have.
    ///
    /// Each category above `HighCard` starts a band of one million.
    #[must_use]
    pub const fn base(self) -> u32 {
        self as u32 * Strength::BAND
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total-ordered strength of an evaluated hand.
///
/// The category occupies the millions; kickers fill the band below it, so a
/// stronger category always beats a weaker one regardless of kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Strength(u32);

impl Strength {
    /// Width of one category band.
    pub const BAND: u32 = 1_000_000;

    /// Builds a strength from a category and the kicker score inside its band.
    pub(crate) const fn new(category: HandCategory, kickers: u32) -> Self {
        debug_assert!(kickers < Self::BAND);
        Self(category.base() + kickers)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of scoring a five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandEvaluation {
    /// The hand category.
    pub category: HandCategory,
    /// Comparable strength across all categories.
    pub strength: Strength,
    /// The five cards that make the hand, in the order they were scored.
    pub cards: [Card; 5],
}

impl HandEvaluation {
    /// Returns the human-readable category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Compares two evaluations by strength only.
    ///
    /// Suits never break ties: hands with equal strength compare `Equal`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }

    /// Returns whether this hand is strictly stronger than `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.strength > other.strength
    }

    /// Returns whether both hands have identical strength.
    #[must_use]
    pub fn ties(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} {} {} {} {}]",
            self.category, self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4]
        )
    }
}

/// Compares two evaluations by strength.
///
/// Equal strength is a tie between players; no suit tie-break is applied.
#[must_use]
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.compare(b)
}
