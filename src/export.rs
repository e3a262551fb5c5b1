//! CSV export of recorded rounds.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::store::{ResultStore, RoundRecord};

/// Header row of the export file.
pub const HEADER: [&str; 4] = ["ID", "Player Hands", "Dealer Hand", "Result"];

/// Writes `records` as CSV, header first.
///
/// Fields containing commas, quotes, or newlines are quoted.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(records: &[RoundRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.id.to_string().as_str(),
            record.player_hands.as_str(),
            record.dealer_hand.as_str(),
            record.result.as_str(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Reads every row from `store` and writes them to `destination`.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the file cannot be written.
pub fn export_all<S: ResultStore + ?Sized>(
    store: &S,
    destination: &Path,
) -> Result<usize, ExportError> {
    let records = store.fetch_all()?;
    let file = File::create(destination).map_err(csv::Error::from)?;
    write_csv(&records, file)?;
    log::info!(
        "exported {} rounds to {}",
        records.len(),
        destination.display()
    );
    Ok(records.len())
}
