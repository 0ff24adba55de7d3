//! Card types and notation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits never affect hand strength; they only matter for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-letter notation (`h`, `d`, `c`, `s`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'h' | 'H' | '♥' | '♡' => Some(Self::Hearts),
            'd' | 'D' | '♦' | '♢' => Some(Self::Diamonds),
            'c' | 'C' | '♣' | '♧' => Some(Self::Clubs),
            's' | 'S' | '♠' | '♤' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered Two (lowest) to Ace (highest).
///
/// The discriminant is the scoring weight: `Two = 2` up to `Ace = 14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric weight used in scoring (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given weight, if it is in 2..=14.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 2 && value <= 14 {
            Some(Self::ALL[(value - 2) as usize])
        } else {
            None
        }
    }

    /// Returns the notation used by [`Card`]'s `Display` (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        let rank = match s {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a whitespace-separated list of cards such as `"As Kd 10h"`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseCardError`] encountered.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_eval::{Card, Rank, Suit};
    ///
    /// let cards = Card::parse_many("As Td").unwrap();
    /// assert_eq!(cards, vec![
    ///     Card::new(Rank::Ace, Suit::Spades),
    ///     Card::new(Rank::Ten, Suit::Diamonds),
    /// ]);
    /// ```
    pub fn parse_many(s: &str) -> Result<Vec<Self>, ParseCardError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suit_char) = s.chars().last() else {
            return Err(ParseCardError::Empty);
        };
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_part).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
