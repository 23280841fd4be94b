//! Dealer policy and the dealer's turn.

use alloc::vec::Vec;
use core::sync::atomic::Ordering;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{DEALER_STANDS_ON, Hand};
use crate::result::RoundResult;

use super::{Game, GameState};

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerDecision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Decides whether the dealer draws against the player's total.
///
/// The dealer only ever draws while trailing the player, and then only below
/// 17 or on a soft 17.
///
/// ```
/// use bjsolo::{Card, DealerDecision, FaceValue, Hand, Seat, Suit, decide};
///
/// let dealer = Hand::from_cards(
///     Seat::Dealer,
///     &[Card::new(Suit::Spades, FaceValue::Ten), Card::new(Suit::Clubs, FaceValue::Six)],
/// );
/// assert_eq!(decide(&dealer, 18), DealerDecision::Hit);
/// assert_eq!(decide(&dealer, 16), DealerDecision::Stand);
/// ```
#[must_use]
pub fn decide(dealer: &Hand, player_value: u8) -> DealerDecision {
    let value = dealer.value();
    let trailing = value < player_value;

    if trailing && (dealer.is_soft_seventeen() || value < DEALER_STANDS_ON) {
        DealerDecision::Hit
    } else {
        DealerDecision::Stand
    }
}

/// One step of the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew this card.
    Drew(Card),
    /// The dealer stood; the round is over.
    Stood,
}

impl Game {
    /// Plays one step of the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw. An empty shoe abandons the round, so
    /// the next call to [`Game::new_game`] starts over.
    pub fn dealer_step(&self) -> Result<DealerStep, ShowdownError> {
        if self.state() != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_value();
        let decision = decide(self.dealer_hand.lock().hand(), player_value);

        let step = match decision {
            DealerDecision::Hit => {
                let card = self.draw().inspect_err(|_| self.abandon_round())?;
                let mut dealer = self.dealer_hand.lock();
                dealer.push(card);
                tracing::debug!(%card, value = dealer.value(), "dealer hits");
                DealerStep::Drew(card)
            }
            DealerDecision::Stand => {
                self.dealer_stood.store(true, Ordering::SeqCst);
                tracing::debug!(value = self.dealer_hand.lock().value(), "dealer stands");
                DealerStep::Stood
            }
        };

        if !self.winner_unknown() {
            *self.state.lock() = GameState::RoundOver;
        }

        Ok(step)
    }

    /// Plays the dealer's hand to the end without pauses.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&self) -> Result<Vec<Card>, ShowdownError> {
        if self.state() != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.state() == GameState::DealerTurn {
            if let DealerStep::Drew(card) = self.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }

    /// Decides the finished round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state() != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let result = RoundResult::decide(self.player_value(), self.dealer_hand.lock().value());
        tracing::info!(
            outcome = ?result.outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            "round over"
        );

        Ok(result)
    }
}
