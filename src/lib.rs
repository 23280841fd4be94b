//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate scores hands (Aces count 1 or 11), detects soft seventeens, and
//! runs the dealer's fixed house policy. [`Game`] manages the round flow for
//! one player against the dealer from a three-deck shoe; the dealer wins ties.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//!
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! let result = game.showdown().unwrap();
//! println!("{}", result.outcome);
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
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod worker;

// Re-export main types
pub use card::{Card, DECK_SIZE, FaceValue, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ReshuffleError, ShowdownError};
pub use game::dealer::decide;
pub use game::{DealerDecision, DealerStep, Game, GameState};
pub use hand::{BLACKJACK, DEALER_STANDS_ON, DealerHand, Hand, Seat};
pub use options::{GameOptions, HOUSE_DECKS, SHUFFLE_PASSES};
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use worker::{DealerEvent, DealerWorker, spawn_dealer};
