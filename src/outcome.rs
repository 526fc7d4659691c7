//! Round outcome types.

use core::fmt;

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The dealer.
    Dealer,
    /// The player.
    Player,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealer => f.write_str("Dealer"),
            Self::Player => f.write_str("Player"),
        }
    }
}

/// Verdict of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player reached exactly 21.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher score.
    PlayerWins,
    /// Dealer has the higher score, or the scores tied.
    DealerWins,
    /// Scores tied and ties are played as a push.
    Push,
}

impl Outcome {
    /// Returns the winning side, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Participant> {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => {
                Some(Participant::Player)
            }
            Self::PlayerBust | Self::DealerWins => Some(Participant::Dealer),
            Self::Push => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PlayerBlackjack => "Blackjack! Player wins",
            Self::PlayerBust => "Bust! Dealer wins",
            Self::DealerBust => "Dealer bust! Player wins",
            Self::PlayerWins => "Player wins",
            Self::DealerWins => "Dealer wins",
            Self::Push => "Push",
        };
        f.write_str(message)
    }
}
