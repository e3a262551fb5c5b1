use crate::error::RoundError;
use crate::policy::{Action, DecisionPolicy};

use super::{Round, RoundState};

impl<P: DecisionPolicy> Round<P> {
    /// Plays the next player's whole turn.
    ///
    /// The player keeps consulting the policy until it stands or the hand
    /// busts. Returns the seat index of the player who just acted, or `None`
    /// once every player is done, at which point the dealer is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn state, the
    /// shoe is empty, or the policy fails.
    pub fn play_turn(&mut self) -> Result<Option<usize>, RoundError> {
        if self.state != RoundState::PlayersActing {
            return Err(RoundError::InvalidState);
        }

        let index = self.current_player;
        if index >= self.players.len() {
            self.state = RoundState::DealerActing;
            return Ok(None);
        }

        let up_card = self.dealer.up_card().ok_or(RoundError::InvalidState)?;

        loop {
            match self.policy.decide(&self.players[index], up_card)? {
                Action::Hit => {
                    let card = self.draw()?;
                    let player = &mut self.players[index];
                    player.add_card(card);
                    if player.hand().is_bust() {
                        log::debug!("{} busts with {}", player.name(), player.total());
                        break;
                    }
                }
                Action::Stand => break,
            }
        }

        self.current_player += 1;
        Ok(Some(index))
    }

    /// Plays every remaining player turn in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Round::play_turn`].
    pub fn play_players(&mut self) -> Result<(), RoundError> {
        while self.play_turn()?.is_some() {}
        Ok(())
    }
}
