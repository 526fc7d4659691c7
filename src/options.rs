//! Round configuration options.

/// How a round ends when neither side busts and the scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieRule {
    /// The dealer wins ties.
    #[default]
    Dealer,
    /// Ties are a push; nobody wins.
    Push,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjduel::{RoundOptions, TieRule};
///
/// let options = RoundOptions::default()
///     .with_dealer_stands_at(17)
///     .with_tie_rule(TieRule::Push);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// The dealer draws while their score is below this value.
    pub dealer_stands_at: u16,
    /// Resolution of equal, non-bust scores.
    pub tie_rule: TieRule,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            tie_rule: TieRule::Dealer,
        }
    }
}

impl RoundOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u16) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets how ties are resolved.
    #[must_use]
    pub const fn with_tie_rule(mut self, rule: TieRule) -> Self {
        self.tie_rule = rule;
        self
    }
}
