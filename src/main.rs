//! Plays the default batch of automated rounds and exports the results.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{AutomatedPolicy, BatchOptions, BatchRunner, GameOptions, JsonLinesStore};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let batch = BatchOptions::default();
    let store = JsonLinesStore::new(&batch.store_path);
    let mut runner = BatchRunner::new(GameOptions::default(), &batch, store, AutomatedPolicy, seed);

    match runner.run_many(batch.rounds) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
