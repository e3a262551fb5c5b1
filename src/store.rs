//! Durable, append-only storage for round results.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// One recorded round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Auto-incremented identifier, starting at 1.
    pub id: u64,
    /// Every player's hand.
    pub player_hands: String,
    /// The dealer's revealed hand.
    pub dealer_hand: String,
    /// Every player's outcome.
    pub result: String,
}

/// An append-only table of round records.
pub trait ResultStore {
    /// Creates the table if it does not exist yet. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be created or read.
    fn ensure_schema(&mut self) -> Result<(), StorageError>;

    /// Appends one row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    fn record_result(
        &mut self,
        player_hands: &str,
        dealer_hand: &str,
        result: &str,
    ) -> Result<u64, StorageError>;

    /// Reads every row in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or a row is malformed.
    fn fetch_all(&self) -> Result<Vec<RoundRecord>, StorageError>;
}

impl<S: ResultStore + ?Sized> ResultStore for &mut S {
    fn ensure_schema(&mut self) -> Result<(), StorageError> {
        (**self).ensure_schema()
    }

    fn record_result(
        &mut self,
        player_hands: &str,
        dealer_hand: &str,
        result: &str,
    ) -> Result<u64, StorageError> {
        (**self).record_result(player_hands, dealer_hand, result)
    }

    fn fetch_all(&self) -> Result<Vec<RoundRecord>, StorageError> {
        (**self).fetch_all()
    }
}

/// In-memory store, useful for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<RoundRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns the number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn ensure_schema(&mut self) -> Result<(), StorageError> {
        Ok(())
    }

    fn record_result(
        &mut self,
        player_hands: &str,
        dealer_hand: &str,
        result: &str,
    ) -> Result<u64, StorageError> {
        let id = self.rows.last().map_or(1, |row| row.id + 1);
        self.rows.push(RoundRecord {
            id,
            player_hands: player_hands.to_owned(),
            dealer_hand: dealer_hand.to_owned(),
            result: result.to_owned(),
        });
        Ok(id)
    }

    fn fetch_all(&self) -> Result<Vec<RoundRecord>, StorageError> {
        Ok(self.rows.clone())
    }
}

/// File-backed store holding one JSON object per line.
///
/// The file is opened for each write and closed right after, so rows are
/// visible to readers as soon as [`ResultStore::record_result`] returns.
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    path: PathBuf,
    next_id: Option<u64>,
}

impl JsonLinesStore {
    /// Creates a store backed by the file at `path`. Nothing is touched on disk
    /// until [`ResultStore::ensure_schema`] or a write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_id: None,
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_id(&mut self) -> Result<u64, StorageError> {
        if let Some(id) = self.next_id {
            return Ok(id);
        }
        self.repair_tail()?;
        let id = self
            .fetch_all()?
            .iter()
            .map(|row| row.id)
            .max()
            .map_or(1, |max| max + 1);
        self.next_id = Some(id);
        Ok(id)
    }

    /// Cuts off a final row that an interrupted write left without its newline,
    /// so the next append starts on a fresh line.
    fn repair_tail(&self) -> Result<(), StorageError> {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        if contents.last().is_none_or(|&byte| byte == b'\n') {
            return Ok(());
        }

        let keep = contents
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |index| index + 1);
        log::warn!(
            "{}: dropping {} bytes of an unterminated row",
            self.path.display(),
            contents.len() - keep
        );
        file.set_len(keep as u64)?;
        Ok(())
    }
}

impl ResultStore for JsonLinesStore {
    fn ensure_schema(&mut self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.next_id = None;
        self.next_id()?;
        Ok(())
    }

    fn record_result(
        &mut self,
        player_hands: &str,
        dealer_hand: &str,
        result: &str,
    ) -> Result<u64, StorageError> {
        let id = self.next_id()?;
        let row = RoundRecord {
            id,
            player_hands: player_hands.to_owned(),
            dealer_hand: dealer_hand.to_owned(),
            result: result.to_owned(),
        };
        let mut line = serde_json::to_string(&row).map_err(|source| {
            StorageError::MalformedRow {
                line: id as usize,
                source,
            }
        })?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        self.next_id = Some(id + 1);
        Ok(id)
    }

    fn fetch_all(&self) -> Result<Vec<RoundRecord>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut rows = Vec::new();
        for (index, raw) in contents.split_inclusive('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            // Only the last segment can lack a newline.
            if !raw.ends_with('\n') {
                log::warn!(
                    "{}: ignoring unterminated row at line {}",
                    self.path.display(),
                    index + 1
                );
                break;
            }
            let row = serde_json::from_str(line).map_err(|source| StorageError::MalformedRow {
                line: index + 1,
                source,
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}
