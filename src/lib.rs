//! A heads-up blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals from a shuffled [`Deck`],
//! scores each [`Hand`], and runs the player's turn, the dealer's turn, and
//! the final comparison as a small state machine.
//!
//! # Example
//!
//! ```
//! use bjduel::{PlayerAction, Round, RoundOptions, Table};
//!
//! struct AlwaysStand;
//!
//! impl Table for AlwaysStand {
//!     fn request_action(&mut self, _round: &Round) -> PlayerAction {
//!         PlayerAction::Stand
//!     }
//! }
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! let outcome = round.play(&mut AlwaysStand).unwrap();
//! assert!(outcome.is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{EmptyDeckError, ParseActionError, RoundError, StackError};
pub use hand::{BLACKJACK, Hand};
pub use options::{RoundOptions, TieRule};
pub use outcome::{Outcome, Participant};
pub use round::{PlayerAction, Round, RoundState, Table};
