//! Background dealer turn.
//!
//! The dealer's draws are paced so a person can follow them. The pacing runs
//! on a worker thread while the interface thread keeps rendering; every step
//! is sent back over a channel and the interface thread applies it.

use alloc::sync::Arc;
use core::time::Duration;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::game::{DealerStep, Game, GameState};
use crate::result::RoundResult;

/// Progress reported by the dealer worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerEvent {
    /// The dealer drew a card.
    Drew(Card),
    /// The dealer stood.
    Stood,
    /// The round is decided.
    Finished(RoundResult),
    /// The dealer turn stopped with an error.
    Failed(ShowdownError),
}

/// Handle to a running dealer turn.
#[derive(Debug)]
pub struct DealerWorker {
    /// Events in the order they happened. Closed once the worker exits.
    pub events: Receiver<DealerEvent>,
    handle: JoinHandle<()>,
}

impl DealerWorker {
    /// Blocks until the worker thread exits.
    pub fn join(self) {
        if self.handle.join().is_err() {
            tracing::error!("dealer worker panicked");
        }
    }
}

/// Plays the dealer's turn on a background thread.
///
/// The worker waits `pacing` before each dealer step, then reports the step.
/// When the round is over it reports the result. If the game is not in the
/// dealer's turn it reports the result (or the error) straight away.
#[must_use]
pub fn spawn_dealer(game: Arc<Game>, pacing: Duration) -> DealerWorker {
    let (tx, events) = mpsc::channel();

    let handle = thread::spawn(move || {
        while game.state() == GameState::DealerTurn {
            thread::sleep(pacing);

            let event = match game.dealer_step() {
                Ok(DealerStep::Drew(card)) => DealerEvent::Drew(card),
                Ok(DealerStep::Stood) => DealerEvent::Stood,
                Err(err) => {
                    tracing::warn!(%err, "dealer turn failed");
                    let _ = tx.send(DealerEvent::Failed(err));
                    return;
                }
            };

            if tx.send(event).is_err() {
                tracing::debug!("dealer events receiver dropped");
                return;
            }
        }

        let event = match game.showdown() {
            Ok(result) => DealerEvent::Finished(result),
            Err(err) => DealerEvent::Failed(err),
        };
        let _ = tx.send(event);
    });

    DealerWorker { events, handle }
}
