//! Interactive blackjack: every seat is played from the terminal.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{GameOptions, InteractivePolicy, Round, narrate_round};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack (answer 'hit' or 'stand' at each decision)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let options = GameOptions::default();
    let mut policy = InteractivePolicy::new(io::stdin().lock(), io::stdout());

    loop {
        let mut round = Round::new(&options, &mut policy, &mut rng);
        if let Err(err) = narrate_round(&mut round, &mut io::stdout()) {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }

        match policy.ask("\nPlay another round? (y/n): ") {
            Ok(Some(answer)) if is_yes(&answer) => {}
            Ok(_) => {
                println!("Goodbye.");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
