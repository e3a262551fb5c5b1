//! The shuffled multi-deck shoe.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, NUM_DECKS, Rank, Suit};

/// A shoe of one or more shuffled decks.
///
/// Cards are dealt from the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a shuffled shoe of [`NUM_DECKS`] decks.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_decks(NUM_DECKS, rng)
    }

    /// Creates a shuffled shoe with the specified number of decks.
    #[must_use]
    pub fn with_decks<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates an unshuffled shoe from the given cards.
    ///
    /// The last card in `cards` is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deals one card, or `None` once the shoe is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
