use core::sync::atomic::Ordering;

use crate::error::{DealError, DeckError};
use crate::hand::BLACKJACK;

use super::{Game, GameState};

/// Player, player, dealer up card, dealer hole card.
const OPENING_CARDS: usize = 4;

impl Game {
    /// Deals the opening hands from the current shoe.
    ///
    /// The player gets two cards, then the dealer gets an up card and the
    /// hole card. A player 21 ends the round at once; so does a dealer 21,
    /// in which case the dealer stands without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, or
    /// [`DeckError::Exhausted`] if the shoe holds fewer than four cards.
    pub fn deal(&self) -> Result<(), DealError> {
        if !self.state().can_deal() {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < OPENING_CARDS {
            return Err(DeckError::Exhausted.into());
        }

        self.clear_round();

        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.lock().push(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer_hand.lock().push(card);
        }

        let player_value = self.player_value();
        let dealer_value = self.dealer_hand.lock().value();
        tracing::debug!(player_value, "opening hands dealt");

        if dealer_value == BLACKJACK {
            self.dealer_stood.store(true, Ordering::SeqCst);
        }

        if player_value == BLACKJACK || self.dealer_stood() {
            self.finish_player_turn();
        } else {
            *self.state.lock() = GameState::PlayerTurn;
        }

        Ok(())
    }

    /// Starts a new game: a fresh shuffled shoe, then the opening deal.
    ///
    /// A round still waiting on the player is thrown away.
    ///
    /// # Errors
    ///
    /// Returns an error during the dealer's turn.
    pub fn new_game(&self) -> Result<(), DealError> {
        if self.state() == GameState::DealerTurn {
            return Err(DealError::InvalidState);
        }

        self.clear_round();
        self.reshuffle().map_err(|_| DealError::InvalidState)?;
        self.deal()
    }
}
