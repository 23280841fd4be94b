//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been dealt yet.
    WaitingForDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be read.
    RoundOver,
}

impl GameState {
    /// Returns whether a new round may be dealt from this state.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::WaitingForDeal | Self::RoundOver)
    }
}
