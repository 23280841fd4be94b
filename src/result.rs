//! Round result types for showdown.

use core::fmt;

use crate::hand::BLACKJACK;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player reached exactly 21. Beats everything, dealer 21 included.
    TwentyOne,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer reached exactly 21.
    DealerTwentyOne,
    /// Equal totals; the house wins ties.
    Tie,
    /// Dealer finished higher.
    DealerHigher,
    /// Player finished higher.
    PlayerHigher,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::TwentyOne | Self::DealerBust | Self::PlayerHigher)
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TwentyOne => "Blackjack!",
            Self::PlayerBust => "You've gone bust.",
            Self::DealerBust => "Dealer goes bust. You win!",
            Self::DealerTwentyOne => "Dealer has Blackjack.",
            Self::Tie => "Dealer wins ties.",
            Self::DealerHigher => "Dealer has higher.",
            Self::PlayerHigher => "Dealer has lower. You win!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The verdict.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Decides the round from both final totals.
    ///
    /// Checks run in a fixed order: player 21, player bust, dealer bust,
    /// dealer 21, tie, then the higher total.
    #[must_use]
    pub const fn decide(player_value: u8, dealer_value: u8) -> Self {
        let outcome = if player_value == BLACKJACK {
            Outcome::TwentyOne
        } else if player_value > BLACKJACK {
            Outcome::PlayerBust
        } else if dealer_value > BLACKJACK {
            Outcome::DealerBust
        } else if dealer_value == BLACKJACK {
            Outcome::DealerTwentyOne
        } else if dealer_value == player_value {
            Outcome::Tie
        } else if dealer_value > player_value {
            Outcome::DealerHigher
        } else {
            Outcome::PlayerHigher
        };

        Self {
            outcome,
            player_value,
            dealer_value,
        }
    }
}
