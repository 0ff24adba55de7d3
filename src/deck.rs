//! Deck construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Creates all 52 cards in a fixed order: suits hearts, diamonds, clubs,
/// spades, and ranks Two through Ace within each suit.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Returns a uniformly shuffled copy of `deck`, leaving the input untouched.
///
/// The permutation is a Fisher–Yates shuffle from the last index down to 1.
///
/// # Example
///
/// ```
/// use holdem_eval::{create_deck, shuffle};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = create_deck();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let shuffled = shuffle(&deck, &mut rng);
/// assert_eq!(shuffled.len(), deck.len());
/// ```
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    trace!(cards = shuffled.len(), "shuffled deck");
    shuffled
}

/// Betting round that reveals community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    /// First three community cards.
    Flop,
    /// Fourth community card.
    Turn,
    /// Fifth community card.
    River,
}

impl Street {
    /// Returns how many community cards the street reveals.
    #[must_use]
    pub const fn cards(self) -> usize {
        match self {
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
        }
    }
}

/// A deck of cards dealt from the top.
///
/// The deck is a transient value: create one per hand and deal from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = create_deck();
        // Top of the deck is the end of the vector.
        cards.reverse();
        Self { cards }
    }

    /// Creates a deck from explicit cards, where `cards[0]` is dealt first.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Creates a 52-card deck shuffled with the given random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cards: shuffle(&create_deck(), rng),
        }
    }

    /// Creates a 52-card deck shuffled from a fixed seed.
    ///
    /// The same seed always yields the same order, which makes hands
    /// reproducible in tests and replays.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_eval::Deck;
    ///
    /// assert_eq!(Deck::from_seed(42), Deck::from_seed(42));
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!(seed, "seeded deck shuffle");
        Self::shuffled(&mut rng)
    }

    /// Creates a 52-card deck shuffled with a generator seeded from the
    /// operating system.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Entropy`] if the operating system cannot provide
    /// a seed.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_os_rng() -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::try_from_os_rng().map_err(|_| DeckError::Entropy)?;
        Ok(Self::shuffled(&mut rng))
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards from the top, in the order they come off the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `n` cards remain.
    /// The deck is left untouched on failure.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        trace!(dealt = n, remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }

    /// Deals two hole cards to each of `players`, one card per player per pass.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck cannot cover every
    /// player. The deck is left untouched on failure.
    pub fn deal_hole_cards(&mut self, players: usize) -> Result<Vec<[Card; 2]>, DeckError> {
        let n = players.checked_mul(2).ok_or(DeckError::NotEnoughCards {
            requested: usize::MAX,
            remaining: self.cards.len(),
        })?;
        let dealt = self.deal(n)?;
        let (first, second) = dealt.split_at(players);
        Ok(first
            .iter()
            .zip(second)
            .map(|(&a, &b)| [a, b])
            .collect())
    }

    /// Deals the community cards for `street`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck runs out.
    pub fn deal_community(&mut self, street: Street) -> Result<Vec<Card>, DeckError> {
        self.deal(street.cards())
    }

    /// Returns the remaining cards; the last element is the top of the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_unstable();
        cards
    }

    #[test]
    fn create_deck_is_complete_and_unique() {
        let deck = sorted(create_deck());
        assert_eq!(deck.len(), DECK_SIZE);
        let mut unique = deck.clone();
        unique.dedup();
        assert_eq!(unique.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(deck.binary_search(&Card::new(rank, suit)).is_ok());
            }
        }
    }

    #[test]
    fn shuffle_preserves_cards_and_input() {
        let deck = create_deck();
        let original = deck.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, original);
        assert_ne!(shuffled, deck);
        assert_eq!(sorted(shuffled), sorted(deck));
    }

    #[test]
    fn seeded_decks_are_reproducible() {
        assert_eq!(Deck::from_seed(9), Deck::from_seed(9));
        assert_ne!(Deck::from_seed(9), Deck::from_seed(10));
    }

    #[test]
    fn deal_takes_from_the_top_in_order() {
        let cards = create_deck();
        let mut deck = Deck::from_cards(cards.clone());
        assert_eq!(deck.draw(), Some(cards[0]));
        assert_eq!(deck.deal(3).unwrap(), cards[1..4].to_vec());
        assert_eq!(deck.len(), DECK_SIZE - 4);
    }

    #[test]
    fn failed_deal_leaves_deck_untouched() {
        let mut deck = Deck::from_cards(create_deck()[..3].to_vec());
        assert_eq!(
            deck.deal(4),
            Err(DeckError::NotEnoughCards {
                requested: 4,
                remaining: 3
            })
        );
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn too_many_players_is_an_error() {
        let mut deck = Deck::new();
        assert_eq!(
            deck.deal_hole_cards(usize::MAX / 2 + 1),
            Err(DeckError::NotEnoughCards {
                requested: usize::MAX,
                remaining: DECK_SIZE
            })
        );
        assert_eq!(
            deck.deal_hole_cards(27),
            Err(DeckError::NotEnoughCards {
                requested: 54,
                remaining: DECK_SIZE
            })
        );
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn hole_cards_are_dealt_round_robin() {
        let cards = create_deck();
        let mut deck = Deck::from_cards(cards.clone());
        let hands = deck.deal_hole_cards(3).unwrap();
        assert_eq!(hands[0], [cards[0], cards[3]]);
        assert_eq!(hands[1], [cards[1], cards[4]]);
        assert_eq!(hands[2], [cards[2], cards[5]]);

        let flop = deck.deal_community(Street::Flop).unwrap();
        assert_eq!(flop, cards[6..9].to_vec());
        assert_eq!(deck.deal_community(Street::Turn).unwrap(), alloc::vec![cards[9]]);
        assert_eq!(deck.deal_community(Street::River).unwrap(), alloc::vec![cards[10]]);
    }
}
