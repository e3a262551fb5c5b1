//! Batch, storage, and export integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use bjsim::{
    AutomatedPolicy, BatchError, BatchOptions, BatchRunner, ExportError, GameOptions,
    JsonLinesStore, MemoryStore, ResultStore, RoundRecord, StorageError, export_all,
};

fn temp_dir() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("bjsim-batch-{}-{id}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn batch_options(dir: &Path) -> BatchOptions {
    BatchOptions::default()
        .with_store_path(dir.join("results.jsonl"))
        .with_export_path(dir.join("results.csv"))
        .with_log_every(0)
}

fn read_csv(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
    assert_eq!(headers, ["ID", "Player Hands", "Dealer Hand", "Result"]);
    reader.records().map(Result::unwrap).collect()
}

#[test]
fn single_round_records_and_exports_one_row() {
    let dir = temp_dir();
    let batch = batch_options(&dir);
    let mut runner = BatchRunner::new(
        GameOptions::default(),
        &batch,
        MemoryStore::new(),
        AutomatedPolicy,
        1,
    );

    let summary = runner.run_many(1).unwrap();
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.exported, 1);
    assert_eq!(summary.hands(), 5);
    assert_eq!(runner.store().len(), 1);

    let text = fs::read_to_string(&batch.export_path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("ID,Player Hands,Dealer Hand,Result\n"));

    let rows = read_csv(&batch.export_path);
    assert_eq!(&rows[0][0], "1");
    assert!(rows[0][1].starts_with("Player 1's hand: "));
    assert!(rows[0][2].starts_with("Dealer's hand: "));
    assert!(rows[0][3].starts_with("Player 1 "));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn ids_are_contiguous_from_one() {
    let dir = temp_dir();
    let batch = batch_options(&dir);
    let store = JsonLinesStore::new(&batch.store_path);
    let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 9);

    let summary = runner.run_many(40).unwrap();
    assert_eq!(summary.rounds, 40);
    assert_eq!(summary.hands(), 200);

    let ids: Vec<u64> = runner.store().fetch_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=40).collect::<Vec<_>>());

    let rows = read_csv(&batch.export_path);
    assert_eq!(rows.len(), 40);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row[0].parse::<usize>().unwrap(), index + 1);
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn same_seed_records_the_same_rounds() {
    let dir = temp_dir();
    let batch = batch_options(&dir);

    let mut first = BatchRunner::new(
        GameOptions::default(),
        &batch,
        MemoryStore::new(),
        AutomatedPolicy,
        77,
    );
    first.run_many(20).unwrap();
    let mut second = BatchRunner::new(
        GameOptions::default(),
        &batch,
        MemoryStore::new(),
        AutomatedPolicy,
        77,
    );
    second.run_many(20).unwrap();

    assert_eq!(
        first.store().fetch_all().unwrap(),
        second.store().fetch_all().unwrap()
    );

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn unavailable_store_aborts_before_export() {
    let dir = temp_dir();
    // The store path is a directory, so it cannot be opened as a file.
    let batch = batch_options(&dir).with_store_path(&dir);
    let store = JsonLinesStore::new(&batch.store_path);
    let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 3);

    let err = runner.run_many(5).unwrap_err();
    assert!(matches!(err, BatchError::Storage(StorageError::Unavailable(_))));
    assert!(err.to_string().starts_with("storage unavailable"));
    assert!(!batch.export_path.exists());

    fs::remove_dir_all(dir).unwrap();
}

/// Accepts a fixed number of rows, then fails every write.
struct FlakyStore {
    inner: MemoryStore,
    remaining: usize,
}

impl ResultStore for FlakyStore {
    fn ensure_schema(&mut self) -> Result<(), StorageError> {
        self.inner.ensure_schema()
    }

    fn record_result(
        &mut self,
        player_hands: &str,
        dealer_hand: &str,
        result: &str,
    ) -> Result<u64, StorageError> {
        if self.remaining == 0 {
            return Err(StorageError::Unavailable(std::io::Error::other("disk full")));
        }
        self.remaining -= 1;
        self.inner.record_result(player_hands, dealer_hand, result)
    }

    fn fetch_all(&self) -> Result<Vec<RoundRecord>, StorageError> {
        self.inner.fetch_all()
    }
}

#[test]
fn failed_write_aborts_remaining_rounds() {
    let dir = temp_dir();
    let batch = batch_options(&dir);
    let store = FlakyStore {
        inner: MemoryStore::new(),
        remaining: 3,
    };
    let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 4);

    assert!(matches!(runner.run_many(10), Err(BatchError::Storage(_))));
    assert_eq!(runner.store().inner.len(), 3);
    assert!(!batch.export_path.exists());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn export_failure_keeps_recorded_rows() {
    let dir = temp_dir();
    let batch = batch_options(&dir).with_export_path(dir.join("missing").join("results.csv"));
    let store = JsonLinesStore::new(&batch.store_path);
    let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 8);

    let err = runner.run_many(6).unwrap_err();
    assert!(matches!(err, BatchError::Export(ExportError::Write(_))));
    assert!(err.to_string().starts_with("export write failed"));

    let store = runner.into_store();
    assert_eq!(store.fetch_all().unwrap().len(), 6);

    // Exporting again to a valid destination picks up every recorded row.
    let destination = dir.join("retry.csv");
    assert_eq!(export_all(&store, &destination).unwrap(), 6);
    assert_eq!(read_csv(&destination).len(), 6);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn second_batch_appends_to_existing_store() {
    let dir = temp_dir();
    let batch = batch_options(&dir);

    let store = JsonLinesStore::new(&batch.store_path);
    BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 1)
        .run_many(3)
        .unwrap();

    let store = JsonLinesStore::new(&batch.store_path);
    let summary = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 2)
        .run_many(2)
        .unwrap();

    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.exported, 5);
    let ids: Vec<String> = read_csv(&batch.export_path)
        .iter()
        .map(|row| row[0].to_owned())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn interrupted_write_does_not_block_next_batch() {
    let dir = temp_dir();
    let batch = batch_options(&dir);

    let store = JsonLinesStore::new(&batch.store_path);
    BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 1)
        .run_many(3)
        .unwrap();
    let mut torn = fs::read_to_string(&batch.store_path).unwrap();
    torn.push_str(r#"{"id":4,"player_hands":"Pla"#);
    fs::write(&batch.store_path, torn).unwrap();

    let store = JsonLinesStore::new(&batch.store_path);
    let summary = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, 2)
        .run_many(2)
        .unwrap();

    assert_eq!(summary.exported, 5);
    let ids: Vec<String> = read_csv(&batch.export_path)
        .iter()
        .map(|row| row[0].to_owned())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);

    fs::remove_dir_all(dir).unwrap();
}
