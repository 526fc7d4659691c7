use crate::error::RoundError;
use crate::hand::Hand;
use crate::outcome::{Outcome, Participant};

use super::{PlayerAction, Round, RoundState};

/// The interactive side of a round: where actions come from and where hand
/// updates go.
///
/// Only [`Table::request_action`] influences the round. The report methods are
/// notifications for display and default to doing nothing.
pub trait Table {
    /// Asks the player for their next action.
    ///
    /// Called once per iteration of the player's turn, with the round in
    /// [`RoundState::PlayerTurn`].
    fn request_action(&mut self, round: &Round) -> PlayerAction;

    /// Called after a hand receives cards or is revealed.
    fn report_hand(&mut self, participant: Participant, hand: &Hand, score: u16) {
        let _ = (participant, hand, score);
    }

    /// Called once when the round resolves.
    fn report_outcome(&mut self, outcome: Outcome) {
        let _ = outcome;
    }
}

impl Round {
    fn report<T: Table + ?Sized>(&self, table: &mut T, participant: Participant) {
        let hand = self.hand(participant);
        table.report_hand(participant, hand, hand.score());
    }

    /// Plays the round to completion against `table`.
    ///
    /// Returns the outcome, or `None` if the player quit. Calling this on a
    /// finished round returns its result without reporting anything.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if a draw finds the deck empty.
    pub fn play<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<Option<Outcome>, RoundError> {
        match self.state {
            RoundState::Resolved(outcome) => return Ok(Some(outcome)),
            RoundState::Aborted => return Ok(None),
            _ => {}
        }

        loop {
            match self.state {
                RoundState::Dealt => {
                    self.report(table, Participant::Dealer);
                    self.report(table, Participant::Player);
                    self.advance()?;
                }
                RoundState::PlayerTurn => {
                    let action = table.request_action(self);
                    self.act(action)?;
                    if action == PlayerAction::Hit {
                        self.report(table, Participant::Player);
                    }
                }
                RoundState::DealerTurn => {
                    self.report(table, Participant::Dealer);
                    while self.dealer_should_draw() {
                        self.dealer_hit()?;
                        self.report(table, Participant::Dealer);
                    }
                    self.advance()?;
                }
                RoundState::Resolved(outcome) => {
                    table.report_outcome(outcome);
                    return Ok(Some(outcome));
                }
                RoundState::Aborted => return Ok(None),
                RoundState::PlayerBlackjack
                | RoundState::PlayerBust
                | RoundState::DealerBust
                | RoundState::Comparison => {
                    self.advance()?;
                }
            }
        }
    }
}
