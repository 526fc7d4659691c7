//! Round engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{EmptyDeckError, RoundError};
use crate::hand::{BLACKJACK, Hand};
use crate::options::RoundOptions;
use crate::outcome::{Outcome, Participant};

mod actions;
mod dealer;
pub mod state;
mod table;

pub use actions::PlayerAction;
pub use state::RoundState;
pub use table::Table;

/// A single heads-up blackjack round between a dealer and one player.
///
/// The round exclusively owns its deck and both hands. Drive it either one
/// step at a time with [`Round::act`] and [`Round::advance`], or all at once
/// with [`Round::play`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// Dealer's hand.
    dealer: Hand,
    /// Player's hand.
    player: Hand,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a round from a fresh deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Dealt);
    /// assert_eq!(round.player_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a round from a fresh deck shuffled with `rng`.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always holds the four opening cards"
    )]
    pub fn with_rng<R: Rng + ?Sized>(options: RoundOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(options, deck).expect("a full deck always holds the four opening cards")
    }

    /// Creates a round that deals from `deck` as-is, without shuffling.
    ///
    /// Cards are dealt alternately: dealer, player, dealer, player.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck holds fewer than four cards.
    pub fn from_deck(options: RoundOptions, mut deck: Deck) -> Result<Self, EmptyDeckError> {
        let mut dealer = Hand::new();
        let mut player = Hand::new();

        for _ in 0..2 {
            dealer.add_card(deck.draw()?);
            player.add_card(deck.draw()?);
        }

        debug!(
            dealer = %dealer,
            player = %player,
            remaining = deck.len(),
            "dealt opening hands"
        );

        Ok(Self {
            deck,
            dealer,
            player,
            options,
            state: RoundState::Dealt,
        })
    }

    /// Performs the next automatic transition.
    ///
    /// From [`RoundState::DealerTurn`] the dealer draws until reaching the
    /// stand threshold before the round moves on.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the round is waiting for a
    /// player action or is finished, or [`RoundError::EmptyDeck`] if the
    /// dealer must draw from an empty deck.
    pub fn advance(&mut self) -> Result<RoundState, RoundError> {
        let next = match self.state {
            RoundState::Dealt => self.player_state(),
            RoundState::PlayerBlackjack => RoundState::Resolved(Outcome::PlayerBlackjack),
            RoundState::PlayerBust => RoundState::Resolved(Outcome::PlayerBust),
            RoundState::DealerTurn => {
                while self.dealer_should_draw() {
                    self.dealer_hit()?;
                }
                if self.dealer.is_bust() {
                    RoundState::DealerBust
                } else {
                    RoundState::Comparison
                }
            }
            RoundState::DealerBust => RoundState::Resolved(Outcome::DealerBust),
            RoundState::Comparison => RoundState::Resolved(self.compare()),
            state @ (RoundState::PlayerTurn | RoundState::Resolved(_) | RoundState::Aborted) => {
                return Err(RoundError::InvalidState(state));
            }
        };

        Ok(self.transition(next))
    }

    fn transition(&mut self, next: RoundState) -> RoundState {
        debug!(from = ?self.state, to = ?next, "round transition");
        self.state = next;
        if let RoundState::Resolved(outcome) = next {
            info!(
                %outcome,
                player = self.player.score(),
                dealer = self.dealer.score(),
                "round resolved"
            );
        }
        next
    }

    /// State that follows a change to the player's hand.
    fn player_state(&self) -> RoundState {
        let score = self.player.score();
        if score == BLACKJACK {
            RoundState::PlayerBlackjack
        } else if score > BLACKJACK {
            RoundState::PlayerBust
        } else {
            RoundState::PlayerTurn
        }
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.deck.draw()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand held by `participant`.
    #[must_use]
    pub const fn hand(&self, participant: Participant) -> &Hand {
        match participant {
            Participant::Dealer => &self.dealer,
            Participant::Player => &self.player,
        }
    }

    /// Returns the cards not yet dealt.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }
}
