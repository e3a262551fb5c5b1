//! Watch automated players at the table, one narrated round at a time.

use std::env;
use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{AutomatedPolicy, GameOptions, NarratedPolicy, Round, narrate_round};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let rounds = match env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => 1,
        Some(Ok(rounds)) => rounds,
        Some(Err(err)) => {
            log::error!("invalid round count: {err}");
            return ExitCode::FAILURE;
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let options = GameOptions::default();
    let mut policy = NarratedPolicy::new(AutomatedPolicy, io::stdout());

    for number in 1..=rounds {
        println!("\n=== Round {number} ===");
        let mut round = Round::new(&options, &mut policy, &mut rng);
        if let Err(err) = narrate_round(&mut round, &mut io::stdout()) {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
