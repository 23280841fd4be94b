//! Terminal drawing: cards, the table, and dialogs.

use core::fmt::Display;

use bjsolo::{Card, DealerHand, Game, Hand, Outcome, Suit};

pub const HELP: &str = "\
The goal of Blackjack is to get as close to 21 without going over. The player is dealt \
two cards, and then the dealer deals themselves two cards, one face down, which is called \
the hole, and the other face up.

The scoring for Blackjack is as follows:
  \u{2022} Numbered cards are worth the amount on the card
  \u{2022} Kings, Queens and Jacks are worth 10
  \u{2022} Aces are worth 11 or 1 if 11 would put the player over 21

The player has two options, Hit or Stand. If you choose hit, the dealer deals you another \
card. If you choose stand you end your turn and are not allowed any more cards. After you \
stand the dealer will deal any additional cards to themselves until they beat the player or \
reach 17, unless it is a Soft Seventeen in which case the dealer hits again (unless the \
dealer has already won). A Soft Seventeen is a seventeen in which one of the cards is an \
Ace valued at 11.

This variant of Blackjack uses three decks and the dealer wins all ties except when the \
player has Blackjack.";

pub const COMMANDS: &str = "[h]it  [s]tand  [n]ew game  [?]help  [q]uit";

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

pub fn card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("\u{2665}", "31"),
        Suit::Diamonds => ("\u{2666}", "31"),
        Suit::Clubs => ("\u{2663}", "32"),
        Suit::Spades => ("\u{2660}", "34"),
    };
    colorize(&format!("{}{suit}", card.face.symbol()), color_code)
}

fn card_back() -> String {
    colorize("??", "90")
}

fn hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    hand.cards().iter().map(card).collect::<Vec<_>>().join(" ")
}

fn dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = dealer.visible_cards().map(card).collect();
    if !dealer.is_hole_revealed() && dealer.hole_card().is_some() {
        parts.insert(1, card_back());
    }
    parts.join(" ")
}

pub fn table(game: &Game) {
    let dealer_hand = game.dealer_hand();
    let player_hand = game.player_hand();

    println!();
    println!(
        "Dealer: {} (value {})",
        dealer(&dealer_hand),
        dealer_hand.visible_value()
    );
    println!(
        "You:    {} (value {})",
        hand(&player_hand),
        player_hand.value()
    );
    println!();
}

/// Title line of the end-of-round dialog.
pub const fn caption(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::DealerBust | Outcome::PlayerHigher => "Congratulations!",
        Outcome::TwentyOne => "You win!",
        Outcome::PlayerBust
        | Outcome::DealerTwentyOne
        | Outcome::Tie
        | Outcome::DealerHigher => "You lose!",
    }
}

pub fn dialog(caption: &str, message: impl Display) {
    let message = message.to_string();
    let width = message
        .lines()
        .chain(core::iter::once(caption))
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(width + 4);

    println!("+{rule}+");
    println!("|  {caption:<width$}  |");
    println!("+{rule}+");
    for line in message.lines() {
        println!("|  {line:<width$}  |");
    }
    println!("+{rule}+");
}

pub fn error_dialog(err: &dyn core::error::Error) {
    dialog("Error", err);
}
