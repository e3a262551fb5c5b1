//! Round engine and state management.

use rand::Rng;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Participant;
use crate::options::GameOptions;
use crate::policy::DecisionPolicy;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Initial cards dealt to every participant.
const INITIAL_CARDS: usize = 2;

/// A single round of blackjack between a dealer and a fixed set of players.
///
/// The round owns a fresh shoe and fresh hands. Player decisions come from
/// the injected [`DecisionPolicy`]; the dealer draws to
/// [`GameOptions::dealer_stands_on`].
///
/// # Example
///
/// ```
/// use bjsim::{AutomatedPolicy, GameOptions, Round};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut round = Round::new(&GameOptions::default(), AutomatedPolicy, &mut rng);
/// let result = round.play().unwrap();
/// assert_eq!(result.players.len(), 5);
/// ```
#[derive(Debug)]
pub struct Round<P> {
    /// Cards in the shoe.
    shoe: Shoe,
    /// The dealer.
    dealer: Participant,
    /// Players in seat order.
    players: Vec<Participant>,
    /// Policy consulted on every player decision.
    policy: P,
    /// Current round state.
    state: RoundState,
    /// Index of the player whose turn is next.
    current_player: usize,
    /// Total at which the dealer stops drawing.
    dealer_stands_on: u8,
    /// Whether the dealer's hole card is shown.
    revealed: bool,
}

impl<P: DecisionPolicy> Round<P> {
    /// Creates a round with a freshly shuffled shoe.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(options: &GameOptions, policy: P, rng: &mut R) -> Self {
        Self::with_shoe(options, policy, Shoe::with_decks(options.decks, rng))
    }

    /// Creates a round that deals from the given shoe.
    #[must_use]
    pub fn with_shoe(options: &GameOptions, policy: P, shoe: Shoe) -> Self {
        let players = (1..=options.players)
            .map(|seat| Participant::player(format!("Player {seat}")))
            .collect();

        Self {
            shoe,
            dealer: Participant::dealer(),
            players,
            policy,
            state: RoundState::Dealing,
            current_player: 0,
            dealer_stands_on: options.dealer_stands_on,
            revealed: false,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns whether the dealer's hole card is shown.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Describes the dealer's hand, masked until the dealer's turn.
    #[must_use]
    pub fn dealer_view(&self) -> String {
        self.dealer.describe_dealer(self.revealed)
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, RoundError> {
        let card = self.shoe.deal().ok_or(RoundError::OutOfCards)?;
        log::trace!("dealt {card}");
        Ok(card)
    }

    /// Deals two cards to every participant, dealer first in each pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the shoe
    /// runs out of cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        for _ in 0..INITIAL_CARDS {
            let card = self.draw()?;
            self.dealer.add_card(card);
            for index in 0..self.players.len() {
                let card = self.draw()?;
                self.players[index].add_card(card);
            }
        }

        self.state = RoundState::PlayersActing;
        Ok(())
    }

    /// Plays every stage of the round and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started, the shoe runs out
    /// of cards, or the policy fails.
    pub fn play(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        self.play_players()?;
        self.dealer_play()?;
        self.showdown()
    }
}
