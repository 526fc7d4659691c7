use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::TieRule;
use crate::outcome::Outcome;

use super::{Round, RoundState};

impl Round {
    /// Returns whether the dealer must take another card.
    ///
    /// Only meaningful during [`RoundState::DealerTurn`]. The dealer draws
    /// while their score is below the configured threshold (17 by default),
    /// with no soft/hard distinction.
    #[must_use]
    pub fn dealer_should_draw(&self) -> bool {
        self.state == RoundState::DealerTurn
            && self.dealer.score() < self.options.dealer_stands_at
    }

    /// Draws one card into the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn, the dealer
    /// has reached the stand threshold, or the deck is empty.
    pub fn dealer_hit(&mut self) -> Result<Card, RoundError> {
        if !self.dealer_should_draw() {
            return Err(RoundError::InvalidState(self.state));
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        debug!(card = %card, score = self.dealer.score(), "dealer draws");

        Ok(card)
    }

    /// Compares the final scores of two hands that did not bust.
    pub(super) fn compare(&self) -> Outcome {
        match self.player.score().cmp(&self.dealer.score()) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::DealerWins,
            Ordering::Equal => match self.options.tie_rule {
                TieRule::Dealer => Outcome::DealerWins,
                TieRule::Push => Outcome::Push,
            },
        }
    }
}
