use core::fmt;
use core::str::FromStr;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ParseActionError, RoundError};

use super::{Round, RoundState};

/// A decision offered to the player on each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and hand over to the dealer.
    Stand,
    /// Abandon the round without an outcome.
    Quit,
}

impl FromStr for PlayerAction {
    type Err = ParseActionError;

    /// Parses `h`/`hit`, `s`/`stand`, or `q`/`quit`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else if s.eq_ignore_ascii_case("q") || s.eq_ignore_ascii_case("quit") {
            Ok(Self::Quit)
        } else {
            Err(ParseActionError)
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stand => f.write_str("stand"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState(self.state));
        }
        Ok(())
    }

    /// Applies a player action.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the round is not in the
    /// player's turn, or [`RoundError::EmptyDeck`] if a hit finds the deck
    /// empty.
    pub fn act(&mut self, action: PlayerAction) -> Result<RoundState, RoundError> {
        match action {
            PlayerAction::Hit => self.hit().map(|_| self.state),
            PlayerAction::Stand => self.stand(),
            PlayerAction::Quit => self.quit(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 ends the player's turn as a blackjack; going over
    /// 21 ends it as a bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn or the deck
    /// is empty. The player's hand is unchanged on error.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);
        debug!(card = %card, score = self.player.score(), "player hits");

        let next = self.player_state();
        self.transition(next);

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&mut self) -> Result<RoundState, RoundError> {
        self.ensure_player_turn()?;
        debug!(score = self.player.score(), "player stands");
        Ok(self.transition(RoundState::DealerTurn))
    }

    /// Player action: Quit (abandon the round).
    ///
    /// Cards already dealt stay where they are, but no outcome is determined.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn quit(&mut self) -> Result<RoundState, RoundError> {
        self.ensure_player_turn()?;
        info!(score = self.player.score(), "player quit the round");
        Ok(self.transition(RoundState::Aborted))
    }
}
