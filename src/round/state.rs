//! Round state types.

use crate::outcome::Outcome;

/// Round state.
///
/// A round moves through
/// `Dealt -> PlayerTurn -> {PlayerBust | PlayerBlackjack | DealerTurn}`,
/// then `DealerTurn -> {DealerBust | Comparison}`, and finally to
/// [`RoundState::Resolved`]. Quitting during the player's turn ends the round
/// in [`RoundState::Aborted`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Both hands hold their initial two cards.
    Dealt,
    /// Waiting for a player action.
    PlayerTurn,
    /// Player reached exactly 21.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer went over 21.
    DealerBust,
    /// Neither side busted; scores are compared.
    Comparison,
    /// Round has ended with an outcome.
    Resolved(Outcome),
    /// Player quit; no outcome was determined.
    Aborted,
}

impl RoundState {
    /// Returns whether the round can no longer change.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Aborted)
    }
}
