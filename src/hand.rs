//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Target total; anything above it is bust.
pub const BLACKJACK: u8 = 21;

/// Total the dealer must reach before standing.
pub const DEALER_STANDS_ON: u8 = 17;

/// Index of the dealer's face-down card.
const HOLE_INDEX: usize = 1;

/// Scores cards highest face value first so that Aces are decided last.
///
/// An Ace counts 11 while that keeps the total under 21. Reaching exactly 21
/// counts 11 only for the last Ace; with more Aces pending it counts 1.
fn score<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    let mut faces: Vec<_> = cards.into_iter().map(|card| card.face).collect();
    faces.sort_unstable_by(|a, b| b.cmp(a));

    let mut aces_left = faces.iter().filter(|face| face.is_ace()).count();
    let mut total: u8 = 0;

    for face in faces {
        if face.is_ace() {
            aces_left -= 1;
            let as_eleven = total.saturating_add(11);
            total = if as_eleven < BLACKJACK || (as_eleven == BLACKJACK && aces_left == 0) {
                as_eleven
            } else {
                total.saturating_add(1)
            };
        } else {
            total = total.saturating_add(face.points());
        }
    }

    total
}

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// An ordered collection of cards.
///
/// The value is derived from the cards every time it is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    owner: Seat,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new(owner: Seat) -> Self {
        Self {
            cards: Vec::new(),
            owner,
        }
    }

    /// Creates a hand holding `cards` in the given order.
    #[must_use]
    pub fn from_cards(owner: Seat, cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            owner,
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn owner(&self) -> Seat {
        self.owner
    }

    /// Returns a copy sorted by face value, Kings first and Aces last.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort_by(|a, b| b.face.cmp(&a.face));
        Self {
            cards,
            owner: self.owner,
        }
    }

    /// Returns whether a card with the same suit and face value is held.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Calculates the blackjack value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a seventeen with an Ace counted as 11.
    #[must_use]
    pub fn is_soft_seventeen(&self) -> bool {
        if self.value() != DEALER_STANDS_ON {
            return false;
        }

        let (aces, others): (Vec<Card>, Vec<Card>) =
            self.cards.iter().partition(|card| card.face.is_ace());
        if aces.is_empty() {
            return false;
        }

        score(&others) + score(&aces) == DEALER_STANDS_ON
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand totals exactly 21.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card and stays hidden until revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(Seat::Dealer),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Returns the full hand, hole card included.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the hole card, if dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().get(HOLE_INDEX)
    }

    /// Returns the cards a player can see, in deal order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        let hide_hole = !self.hole_revealed;
        self.hand
            .cards()
            .iter()
            .enumerate()
            .filter(move |&(index, _)| !(hide_hole && index == HOLE_INDEX))
            .map(|(_, card)| card)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the visible cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        score(self.visible_cards())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the full hand is a soft seventeen.
    #[must_use]
    pub fn is_soft_seventeen(&self) -> bool {
        self.hand.is_soft_seventeen()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
