use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state() != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going bust or reaching 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        let mut hand = self.player_hand.lock();
        hand.push(card);
        let value = hand.value();
        drop(hand);

        tracing::debug!(%card, value, "player hits");

        if value >= BLACKJACK {
            self.finish_player_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(value = self.player_value(), "player stands");
        self.finish_player_turn();

        Ok(())
    }
}
