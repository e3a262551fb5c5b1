//! Table rules and batch settings.

use std::path::PathBuf;

use crate::card::NUM_DECKS;

/// Table rules for a single round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_players(3)
///     .with_dealer_stands_on(17);
/// assert_eq!(options.players, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of automated players seated at the table.
    pub players: u8,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: NUM_DECKS,
            players: 5,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of players.
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Number of rounds the `bjsim` binary plays.
    pub rounds: usize,
    /// Path of the JSON lines result store.
    pub store_path: PathBuf,
    /// Path of the CSV export.
    pub export_path: PathBuf,
    /// Log a progress line every this many rounds. 0 disables progress lines.
    pub log_every: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            store_path: PathBuf::from("results.jsonl"),
            export_path: PathBuf::from("results.csv"),
            log_every: 1_000,
        }
    }
}

impl BatchOptions {
    /// Sets the number of rounds.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the result store path.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Sets the export path.
    #[must_use]
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Sets the progress logging interval.
    #[must_use]
    pub const fn with_log_every(mut self, rounds: usize) -> Self {
        self.log_every = rounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_table() {
        let game = GameOptions::default();
        assert_eq!(game.decks, 6);
        assert_eq!(game.players, 5);
        assert_eq!(game.dealer_stands_on, 17);

        let batch = BatchOptions::default();
        assert_eq!(batch.rounds, 10_000);
        assert_eq!(batch.export_path, PathBuf::from("results.csv"));
    }

    #[test]
    fn builders_set_fields() {
        let batch = BatchOptions::default()
            .with_rounds(3)
            .with_store_path("a.jsonl")
            .with_export_path("b.csv")
            .with_log_every(0);
        assert_eq!(batch.rounds, 3);
        assert_eq!(batch.store_path, PathBuf::from("a.jsonl"));
        assert_eq!(batch.export_path, PathBuf::from("b.csv"));
        assert_eq!(batch.log_every, 0);
    }
}
