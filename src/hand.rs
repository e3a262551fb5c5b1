//! Hand accumulation and participant display.

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Placeholder shown in place of the dealer's hole card.
pub const HIDDEN_CARD: &str = "[Hidden Card]";

/// Cards held by a participant together with their running total.
///
/// Aces enter the total as 11 and are re-counted as 1, one at a time, while
/// the total exceeds 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Best total not exceeding 21 when one exists.
    total: u8,
    /// Aces currently counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and re-counts aces if needed.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = self.total.saturating_add(card.value());
        if card.rank.is_ace() {
            self.soft_aces += 1;
        }

        while self.total > BLACKJACK && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
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
}

/// Seat role at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A player acting on a decision policy.
    Player,
    /// The dealer, drawing to a fixed threshold.
    Dealer,
}

/// A named seat holding a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Player,
            hand: Hand::new(),
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: "Dealer".into(),
            role: Role::Dealer,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the participant's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the current hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Describes every held card and the current total.
    ///
    /// ```
    /// use bjsim::{Card, Participant, Rank, Suit};
    ///
    /// let mut player = Participant::player("Player 1");
    /// player.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// player.add_card(Card::new(Rank::King, Suit::Clubs));
    /// assert_eq!(
    ///     player.describe(),
    ///     "Player 1's hand: A of Hearts, K of Clubs | Total: 21"
    /// );
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let cards: Vec<String> = self.hand.cards().iter().map(ToString::to_string).collect();
        format!(
            "{}'s hand: {} | Total: {}",
            self.name,
            cards.join(", "),
            self.hand.total()
        )
    }

    /// Describes the dealer's hand, masking everything but the up-card
    /// unless `reveal` is set.
    #[must_use]
    pub fn describe_dealer(&self, reveal: bool) -> String {
        if reveal {
            return self.describe();
        }
        match self.up_card() {
            Some(card) => format!("{}'s hand: {card}, {HIDDEN_CARD}", self.name),
            None => format!("{}'s hand: {HIDDEN_CARD}", self.name),
        }
    }
}
