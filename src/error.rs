//! Error types for rounds, storage, and export.

use std::io;

use thiserror::Error;

/// Errors that can occur while a policy is choosing an action.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The input stream ended before an action was chosen.
    #[error("input closed before a decision was made")]
    InputClosed,
    /// Reading the decision or writing the prompt failed.
    #[error("decision prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while playing a round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The shoe ran out of cards mid-round.
    #[error("no cards left in the shoe")]
    OutOfCards,
    /// The decision policy failed.
    #[error(transparent)]
    Policy(#[from] PolicyError),
    /// Narrating the round to its output failed.
    #[error("round output failed: {0}")]
    Output(#[from] io::Error),
}

/// Errors that can occur while accessing the durable result store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be created, opened, read, or written.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] io::Error),
    /// A stored row could not be decoded or encoded.
    #[error("storage unavailable: malformed row at line {line}: {source}")]
    MalformedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Underlying decode error.
        source: serde_json::Error,
    },
}

/// Errors that can occur while exporting recorded rounds.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Reading the recorded rounds failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Writing the export file failed.
    #[error("export write failed: {0}")]
    Write(#[from] csv::Error),
}

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A round could not be completed.
    #[error("round {round} failed: {source}")]
    Round {
        /// One-based index of the failed round.
        round: usize,
        /// Underlying round error.
        source: RoundError,
    },
    /// The result store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The export step failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
