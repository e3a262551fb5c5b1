//! Round result types for showdown.

use std::fmt;

use crate::hand::BLACKJACK;

/// Outcome of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player beats the dealer (dealer busts or player has higher total).
    Wins,
    /// Player loses (player busts or dealer has higher total).
    Loses,
    /// Equal totals.
    Ties,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wins => "wins",
            Self::Loses => "loses",
            Self::Ties => "ties",
        })
    }
}

/// Resolves a player's final total against the dealer's.
///
/// A busted player always loses, even when the dealer busts too.
///
/// ```
/// use bjsim::{Outcome, resolve};
///
/// assert_eq!(resolve(22, 23), Outcome::Loses);
/// assert_eq!(resolve(20, 22), Outcome::Wins);
/// assert_eq!(resolve(20, 20), Outcome::Ties);
/// ```
#[must_use]
pub const fn resolve(player_total: u8, dealer_total: u8) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::Loses
    } else if dealer_total > BLACKJACK || player_total > dealer_total {
        Outcome::Wins
    } else if player_total < dealer_total {
        Outcome::Loses
    } else {
        Outcome::Ties
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The player's hand as displayed at showdown.
    pub hand: String,
    /// The player's final total.
    pub total: u8,
    /// The outcome against the dealer.
    pub outcome: Outcome,
}

impl PlayerResult {
    /// Returns whether the player busted.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's fully revealed hand.
    pub dealer_hand: String,
    /// The dealer's final total.
    pub dealer_total: u8,
}

impl RoundResult {
    /// Returns whether the dealer busted.
    #[must_use]
    pub const fn dealer_bust(&self) -> bool {
        self.dealer_total > BLACKJACK
    }

    /// Counts players with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.players.iter().filter(|p| p.outcome == outcome).count()
    }

    /// Every player's hand, joined for storage.
    #[must_use]
    pub fn player_hands_text(&self) -> String {
        self.players
            .iter()
            .map(|p| p.hand.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Every player's outcome, joined for storage.
    ///
    /// Reads like `Player 1 wins; Player 2 loses; Player 3 ties`.
    #[must_use]
    pub fn summary_text(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{} {}", p.name, p.outcome))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
