//! Game integration tests.

use core::time::Duration;
use std::sync::Arc;

use bjsolo::{
    ActionError, Card, DECK_SIZE, DealError, DealerEvent, DealerStep, Deck, DeckError, FaceValue,
    Game, GameOptions, GameState, Outcome, ReshuffleError, ShowdownError, Suit, spawn_dealer,
};

const fn card(suit: Suit, face: FaceValue) -> Card {
    Card::new(suit, face)
}

fn set_deck_from_draws(game: &Game, draws: &[Card]) {
    *game.shoe.lock() = Deck::from_cards(draws.to_vec());
}

fn game_with_draws(draws: &[Card]) -> Game {
    let game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(&game, draws);
    game
}

#[test]
fn new_game_builds_three_deck_shoe() {
    let game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE);
    assert_eq!(game.state(), GameState::WaitingForDeal);

    game.new_game().unwrap();
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE - 4);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn same_seed_deals_same_cards() {
    let a = Game::new(GameOptions::default(), 42);
    let b = Game::new(GameOptions::default(), 42);
    a.deal().unwrap();
    b.deal().unwrap();
    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.dealer_hand(), b.dealer_hand());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(1)
        .with_shuffle_passes(2);
    assert_eq!(options.decks, 1);
    assert_eq!(options.shuffle_passes, 2);

    let defaults = GameOptions::default();
    assert_eq!(defaults.decks, 3);
    assert_eq!(defaults.shuffle_passes, 7);
}

#[test]
fn deal_errors() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Nine),
        card(Suit::Clubs, FaceValue::Five),
        card(Suit::Diamonds, FaceValue::Seven),
    ]);
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::Deck(DeckError::Exhausted)
    );
    assert_eq!(game.state(), GameState::WaitingForDeal);

    set_deck_from_draws(
        &game,
        &[
            card(Suit::Hearts, FaceValue::Nine),
            card(Suit::Clubs, FaceValue::Five),
            card(Suit::Diamonds, FaceValue::Seven),
            card(Suit::Spades, FaceValue::Two),
        ],
    );
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Five),
        card(Suit::Spades, FaceValue::Six),
        card(Suit::Clubs, FaceValue::Nine),
        card(Suit::Diamonds, FaceValue::Seven),
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);

    let err = game.hit().unwrap_err();
    assert_eq!(err, ActionError::Deck(DeckError::Exhausted));
    assert_eq!(err.to_string(), "there are no cards in the deck - deal again");
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_step().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn basic_round_flow() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Eight),   // player
        card(Suit::Diamonds, FaceValue::Seven), // player
        card(Suit::Clubs, FaceValue::Six),      // dealer up
        card(Suit::Spades, FaceValue::Ten),     // dealer hole
        card(Suit::Hearts, FaceValue::Four),    // player hit
        card(Suit::Clubs, FaceValue::Five),     // dealer draw
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().visible_value(), 6);

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.face, FaceValue::Four);
    assert_eq!(game.player_value(), 19);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.dealer_hand().is_hole_revealed());

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, [card(Suit::Clubs, FaceValue::Five)]);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.outcome, Outcome::DealerTwentyOne);
    assert!(!result.outcome.is_player_win());
}

#[test]
fn player_bust_ends_round_without_dealer_draws() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::King),
        card(Suit::Diamonds, FaceValue::Six),
        card(Suit::Clubs, FaceValue::Two),
        card(Suit::Spades, FaceValue::Three),
        card(Suit::Hearts, FaceValue::Queen), // player hit: bust
        card(Suit::Clubs, FaceValue::Nine),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.player_value, 26);
}

#[test]
fn player_twenty_one_beats_dealer_twenty_one() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ace),
        card(Suit::Diamonds, FaceValue::King),
        card(Suit::Clubs, FaceValue::Ace),
        card(Suit::Spades, FaceValue::Queen),
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(game.dealer_stood());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::TwentyOne);
    assert!(result.outcome.is_player_win());
}

#[test]
fn dealer_twenty_one_on_deal_ends_round() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Nine),
        card(Suit::Clubs, FaceValue::Ace),
        card(Suit::Spades, FaceValue::Jack),
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.showdown().unwrap().outcome, Outcome::DealerTwentyOne);
}

#[test]
fn hitting_to_twenty_one_ends_turn() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Five),
        card(Suit::Diamonds, FaceValue::Six),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Nine),
        card(Suit::Hearts, FaceValue::Queen),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_value(), 21);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.showdown().unwrap().outcome, Outcome::TwentyOne);
}

#[test]
fn dealer_wins_ties() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Eight),
        card(Suit::Clubs, FaceValue::Nine),
        card(Suit::Spades, FaceValue::Nine),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stood);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.player_value, result.dealer_value);
}

#[test]
fn dealer_hits_soft_seventeen_while_trailing() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Nine),
        card(Suit::Clubs, FaceValue::Ace),
        card(Suit::Spades, FaceValue::Six), // soft 17
        card(Suit::Hearts, FaceValue::Two), // soft 19
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Drew(card(Suit::Hearts, FaceValue::Two))
    );
    assert_eq!(game.dealer_hand().value(), 19);
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stood);
    assert_eq!(game.showdown().unwrap().outcome, Outcome::Tie);
}

#[test]
fn dealer_bust_pays_player() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Eight),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Five),
        card(Suit::Hearts, FaceValue::King),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(game.dealer_hand().is_bust());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_value, 25);
}

#[test]
fn dealer_stands_when_already_ahead() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Two),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Three),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.showdown().unwrap().outcome, Outcome::DealerHigher);
}

#[test]
fn dealer_draw_from_empty_shoe_abandons_round() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Eight),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Six),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(
        game.dealer_play().unwrap_err(),
        ShowdownError::Deck(DeckError::Exhausted)
    );
    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.new_game().unwrap();
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE - 4);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn new_game_throws_away_player_turn() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Five),
        card(Suit::Spades, FaceValue::Six),
        card(Suit::Clubs, FaceValue::Nine),
        card(Suit::Diamonds, FaceValue::Seven),
    ]);

    game.deal().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::Deck(DeckError::Exhausted));
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.new_game().unwrap();
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE - 4);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn new_game_waits_for_dealer_turn() {
    let game = game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Nine),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Two),
        card(Suit::Hearts, FaceValue::Three),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.new_game().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn next_round_can_be_dealt_after_round_over() {
    let game = Game::new(GameOptions::default(), 8);
    set_deck_from_draws(
        &game,
        &[
            card(Suit::Hearts, FaceValue::Ten),
            card(Suit::Diamonds, FaceValue::Two),
            card(Suit::Clubs, FaceValue::Ten),
            card(Suit::Spades, FaceValue::Three),
            card(Suit::Hearts, FaceValue::Four),
            card(Suit::Diamonds, FaceValue::Five),
            card(Suit::Clubs, FaceValue::Six),
            card(Suit::Spades, FaceValue::Seven),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_value(), 9);
    assert!(!game.dealer_stood());
    assert!(!game.dealer_hand().is_hole_revealed());

    game.stand().unwrap();
    game.clear_round();
    assert_eq!(game.state(), GameState::WaitingForDeal);
    game.reshuffle().unwrap();
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE);
}

#[test]
fn dealer_worker_reports_each_step() {
    let game = Arc::new(game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Nine),
        card(Suit::Clubs, FaceValue::Five),
        card(Suit::Spades, FaceValue::Six),
        card(Suit::Hearts, FaceValue::Two),
        card(Suit::Clubs, FaceValue::Four),
    ]));

    game.deal().unwrap();
    game.stand().unwrap();

    let worker = spawn_dealer(Arc::clone(&game), Duration::ZERO);
    let events: Vec<DealerEvent> = worker.events.iter().collect();
    worker.join();

    assert_eq!(
        events[..3],
        [
            DealerEvent::Drew(card(Suit::Hearts, FaceValue::Two)),
            DealerEvent::Drew(card(Suit::Clubs, FaceValue::Four)),
            DealerEvent::Stood,
        ]
    );
    let DealerEvent::Finished(result) = events[3] else {
        panic!("expected a result, got {:?}", events[3]);
    };
    assert_eq!(result.outcome, Outcome::PlayerHigher);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(events.len(), 4);
}

#[test]
fn dealer_worker_reports_result_when_round_already_over() {
    let game = Arc::new(game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ace),
        card(Suit::Diamonds, FaceValue::Queen),
        card(Suit::Clubs, FaceValue::Five),
        card(Suit::Spades, FaceValue::Six),
    ]));
    game.deal().unwrap();

    let worker = spawn_dealer(Arc::clone(&game), Duration::from_secs(60));
    let events: Vec<DealerEvent> = worker.events.iter().collect();
    worker.join();

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        DealerEvent::Finished(result) if result.outcome == Outcome::TwentyOne
    ));
}

#[test]
fn dealer_worker_reports_empty_shoe() {
    let game = Arc::new(game_with_draws(&[
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Diamonds, FaceValue::Eight),
        card(Suit::Clubs, FaceValue::Ten),
        card(Suit::Spades, FaceValue::Six),
    ]));

    game.deal().unwrap();
    game.stand().unwrap();

    let worker = spawn_dealer(Arc::clone(&game), Duration::ZERO);
    let events: Vec<DealerEvent> = worker.events.iter().collect();
    worker.join();

    assert_eq!(
        events,
        [DealerEvent::Failed(ShowdownError::Deck(DeckError::Exhausted))]
    );
    game.new_game().unwrap();
}
