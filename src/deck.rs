//! Shoe construction, shuffling and drawing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, FaceValue, Suit};
use crate::error::DeckError;

/// An ordered shoe of one or more standard decks.
///
/// Cards are drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an unshuffled shoe of `num_decks` standard 52-card decks.
    ///
    /// Each deck is laid out suit by suit, Ace to King.
    #[must_use]
    pub fn new(num_decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for face in FaceValue::ALL {
                    cards.push_back(Card::new(suit, face));
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe from cards in draw order (the first card is drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
