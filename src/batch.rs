//! Batch execution of many rounds with a single export at the end.

use std::fmt;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::BatchError;
use crate::export::export_all;
use crate::game::Round;
use crate::options::{BatchOptions, GameOptions};
use crate::policy::DecisionPolicy;
use crate::result::{Outcome, RoundResult};
use crate::store::ResultStore;

/// Totals accumulated over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rounds played and recorded.
    pub rounds: usize,
    /// Player hands that beat the dealer.
    pub wins: usize,
    /// Player hands that lost to the dealer.
    pub losses: usize,
    /// Player hands that tied the dealer.
    pub ties: usize,
    /// Player hands that busted.
    pub player_busts: usize,
    /// Rounds in which the dealer busted.
    pub dealer_busts: usize,
    /// Data rows written to the export file.
    pub exported: usize,
}

impl BatchSummary {
    /// Folds one round into the totals.
    pub fn add_round(&mut self, result: &RoundResult) {
        self.rounds += 1;
        self.wins += result.count(Outcome::Wins);
        self.losses += result.count(Outcome::Loses);
        self.ties += result.count(Outcome::Ties);
        self.player_busts += result.players.iter().filter(|p| p.is_bust()).count();
        if result.dealer_bust() {
            self.dealer_busts += 1;
        }
    }

    /// Total player hands resolved.
    #[must_use]
    pub const fn hands(&self) -> usize {
        self.wins + self.losses + self.ties
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 48;
        const TEXT_WIDTH: usize = 32;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

        writeln!(f, "{:-^WIDTH$}", " batch summary ")?;
        for (label, value) in [
            ("rounds played", self.rounds),
            ("player hands", self.hands()),
            ("hands won", self.wins),
            ("hands lost", self.losses),
            ("hands tied", self.ties),
            ("player busts", self.player_busts),
            ("dealer busts", self.dealer_busts),
            ("rows exported", self.exported),
        ] {
            writeln!(f, "{label:<TEXT_WIDTH$}{value:>NUM_WIDTH$}")?;
        }
        write!(f, "{}", "-".repeat(WIDTH))
    }
}

/// Runs rounds back to back, recording each one and exporting once at the end.
pub struct BatchRunner<S, P> {
    game: GameOptions,
    export_path: PathBuf,
    log_every: usize,
    store: S,
    policy: P,
    rng: ChaCha8Rng,
}

impl<S: ResultStore, P: DecisionPolicy> BatchRunner<S, P> {
    /// Creates a runner whose shuffles are derived from `seed`.
    #[must_use]
    pub fn new(game: GameOptions, batch: &BatchOptions, store: S, policy: P, seed: u64) -> Self {
        Self {
            game,
            export_path: batch.export_path.clone(),
            log_every: batch.log_every,
            store,
            policy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the result store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the runner and returns the result store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Plays `n` rounds, recording each, then exports every recorded row.
    ///
    /// The schema is ensured once up front. A failing round or storage write
    /// aborts the batch before the export step.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails, the store is unavailable, or the
    /// export cannot be written.
    pub fn run_many(&mut self, n: usize) -> Result<BatchSummary, BatchError> {
        self.store.ensure_schema()?;
        log::info!("playing {n} rounds with {} players", self.game.players);

        let mut summary = BatchSummary::default();
        for round_index in 1..=n {
            let result = Round::new(&self.game, &mut self.policy, &mut self.rng)
                .play()
                .map_err(|source| BatchError::Round {
                    round: round_index,
                    source,
                })?;

            let id = self.store.record_result(
                &result.player_hands_text(),
                &result.dealer_hand,
                &result.summary_text(),
            )?;
            log::debug!("round {round_index} recorded as {id}: {}", result.summary_text());
            summary.add_round(&result);

            if self.log_every > 0 && round_index % self.log_every == 0 {
                log::info!("{round_index}/{n} rounds played");
            }
        }

        summary.exported = export_all(&self.store, &self.export_path)?;
        log::info!(
            "batch complete: {} won, {} lost, {} tied",
            summary.wins,
            summary.losses,
            summary.ties
        );
        Ok(summary)
    }
}
