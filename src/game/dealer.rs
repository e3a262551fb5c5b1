use crate::card::Card;
use crate::error::RoundError;
use crate::policy::DecisionPolicy;
use crate::result::{PlayerResult, RoundResult, resolve};

use super::{Round, RoundState};

impl<P: DecisionPolicy> Round<P> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching the
    /// stand threshold. There is no soft 17 distinction beyond the ace
    /// re-counting already built into the total.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn state or the
    /// shoe is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerActing {
            return Err(RoundError::InvalidState);
        }

        self.revealed = true;
        let mut drawn_cards = Vec::new();

        while self.dealer.total() < self.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer stands on {} after drawing {}",
            self.dealer.total(),
            drawn_cards.len()
        );
        self.state = RoundState::Resolved;

        Ok(drawn_cards)
    }

    /// Compares every player's hand to the dealer's.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn showdown(&self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::Resolved {
            return Err(RoundError::InvalidState);
        }

        let dealer_total = self.dealer.total();
        let players = self
            .players
            .iter()
            .map(|player| PlayerResult {
                name: player.name().to_owned(),
                hand: player.describe(),
                total: player.total(),
                outcome: resolve(player.total(), dealer_total),
            })
            .collect();

        Ok(RoundResult {
            players,
            dealer_hand: self.dealer.describe_dealer(true),
            dealer_total,
        })
    }
}
