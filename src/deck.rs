//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{EmptyDeckError, StackError};

/// An ordered deck of unique cards.
///
/// Cards are drawn from the back of the underlying sequence, which is the
/// "top" of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are laid out suit by suit, each suit running from ace to king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck that yields `draws` in order.
    ///
    /// The deck holds only the given cards, so it may be shorter than a full
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::DuplicateCard`] if any card is given twice.
    pub fn stacked<I>(draws: I) -> Result<Self, StackError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = Vec::new();
        for card in draws {
            if cards.contains(&card) {
                return Err(StackError::DuplicateCard(card));
            }
            cards.push(card);
        }
        cards.reverse();

        Ok(Self { cards })
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
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
