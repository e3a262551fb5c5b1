//! A batch blackjack simulator.
//!
//! The crate plays rounds of a simple hit/stand blackjack variant between a
//! dealer and automated players, records every round to an append-only
//! [`ResultStore`], and exports the recorded rounds to CSV.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{AutomatedPolicy, BatchOptions, BatchRunner, GameOptions, JsonLinesStore};
//!
//! let batch = BatchOptions::default().with_rounds(100);
//! let store = JsonLinesStore::new(&batch.store_path);
//! let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 42);
//! let summary = runner.run_many(batch.rounds).unwrap();
//! println!("{summary}");
//! ```

pub mod batch;
pub mod card;
pub mod error;
pub mod export;
pub mod game;
pub mod hand;
pub mod narrate;
pub mod options;
pub mod policy;
pub mod result;
pub mod shoe;
pub mod store;

// Re-export main types
pub use batch::{BatchRunner, BatchSummary};
pub use card::{Card, DECK_SIZE, NUM_DECKS, Rank, Suit};
pub use error::{BatchError, ExportError, PolicyError, RoundError, StorageError};
pub use export::{HEADER, export_all, write_csv};
pub use game::{Round, RoundState};
pub use hand::{BLACKJACK, Hand, Participant, Role};
pub use narrate::narrate_round;
pub use options::{BatchOptions, GameOptions};
pub use policy::{
    Action, AutomatedPolicy, DecisionPolicy, InteractivePolicy, NarratedPolicy, automated_decision,
};
pub use result::{Outcome, PlayerResult, RoundResult, resolve};
pub use shoe::Shoe;
pub use store::{JsonLinesStore, MemoryStore, ResultStore, RoundRecord};
