//! Game engine and state management.

use core::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, ReshuffleError};
use crate::hand::{BLACKJACK, DealerHand, Hand, Seat};
use crate::options::GameOptions;

mod actions;
mod deal;
pub mod dealer;
pub mod state;

pub use dealer::{DealerDecision, DealerStep};
pub use state::GameState;

/// A single-player blackjack round engine.
///
/// The game owns the shoe, both hands, and the round state. All methods take
/// `&self`, so a game can be shared with a background dealer worker.
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand.
    pub dealer_hand: Mutex<DealerHand>,
    /// Whether the dealer has decided to stand this round.
    dealer_stood: AtomicBool,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.cards_remaining(), 156);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Self::create_shoe(&options, &mut rng);

        Self {
            shoe: Mutex::new(shoe),
            options,
            state: Mutex::new(GameState::WaitingForDeal),
            player_hand: Mutex::new(Hand::new(Seat::Player)),
            dealer_hand: Mutex::new(DealerHand::new()),
            dealer_stood: AtomicBool::new(false),
            rng: Mutex::new(rng),
        }
    }

    /// Builds a shoe and shuffles it once per configured pass.
    fn create_shoe(options: &GameOptions, rng: &mut ChaCha8Rng) -> Deck {
        let mut shoe = Deck::new(options.decks);
        for _ in 0..options.shuffle_passes {
            shoe.shuffle(rng);
        }
        shoe
    }

    /// Replaces the shoe with a fresh, shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        if !self.state().can_deal() {
            return Err(ReshuffleError::InvalidState);
        }

        let mut rng = self.rng.lock();
        let shoe = Self::create_shoe(&self.options, &mut rng);
        drop(rng);

        *self.shoe.lock() = shoe;
        tracing::debug!(cards = self.cards_remaining(), "shoe reshuffled");

        Ok(())
    }

    /// Draws a card from the shoe.
    fn draw(&self) -> Result<Card, DeckError> {
        let card = self.shoe.lock().draw();
        match card {
            Ok(card) => tracing::trace!(%card, "drew card"),
            Err(err) => tracing::warn!(%err, "shoe exhausted"),
        }
        card
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.player_hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the player's current hand value.
    pub fn player_value(&self) -> u8 {
        self.player_hand.lock().value()
    }

    /// Returns whether the dealer has stood this round.
    pub fn dealer_stood(&self) -> bool {
        self.dealer_stood.load(Ordering::SeqCst)
    }

    /// Returns whether the dealer still has to play for a winner to emerge.
    ///
    /// That is the case until the dealer stands or the player has reached or
    /// passed 21.
    pub fn winner_unknown(&self) -> bool {
        !self.dealer_stood() && self.player_value() < BLACKJACK
    }

    /// Ends the player's turn: reveals the hole card and hands play to the
    /// dealer, or ends the round if the winner is already known.
    fn finish_player_turn(&self) {
        self.dealer_hand.lock().reveal_hole();

        let next = if self.winner_unknown() {
            GameState::DealerTurn
        } else {
            GameState::RoundOver
        };
        *self.state.lock() = next;
        tracing::debug!(state = ?next, "player turn over");
    }

    /// Gives up on the current round after the shoe ran dry. The hands stay
    /// on the table until the next deal.
    fn abandon_round(&self) {
        *self.state.lock() = GameState::WaitingForDeal;
        tracing::warn!("round abandoned");
    }

    /// Clears both hands and returns to the pre-deal state.
    pub fn clear_round(&self) {
        self.player_hand.lock().clear();
        self.dealer_hand.lock().clear();
        self.dealer_stood.store(false, Ordering::SeqCst);
        *self.state.lock() = GameState::WaitingForDeal;
    }
}
