//! Error types for deck and round operations.

use thiserror::Error;

use crate::card::Card;
use crate::round::RoundState;

/// A card was drawn from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when stacking a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Text that does not name a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized player action (expected hit, stand, or quit)")]
pub struct ParseActionError;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not valid in the current round state.
    #[error("operation is not valid in state {0:?}")]
    InvalidState(RoundState),
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}
