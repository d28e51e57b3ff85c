//! Fair RPS command line game
//!
//! Plays one round of extended rock-paper-scissors against the computer. The
//! computer's move is committed with an HMAC before you choose, and the key is
//! printed afterwards so the commitment can be checked.

mod config;
mod session;

use config::{CliConfig, TRANSCRIPT_VAR};
use fair_rps_core::RuleSet;
use session::SessionEnd;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "Usage: fair-rps <move1> <move2> <move3> [...]
Give an odd number (at least 3) of distinct moves, e.g.
    fair-rps rock paper scissors
    fair-rps rock paper scissors lizard spock";

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the game on stdout
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = CliConfig::from_env();

    let rules = match RuleSet::build(config.moves.iter().cloned()) {
        Ok(rules) => rules,
        Err(e) => {
            error!("Rejected move list {:?}: {}", config.moves, e);
            eprintln!("Error: {}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Starting round with {} moves (transcript via {}: {})",
        rules.moves().len(),
        TRANSCRIPT_VAR,
        config.transcript
    );

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    match session::play_round(&rules, &mut rand::thread_rng(), &mut input, &mut out, &config) {
        Ok(SessionEnd::Played(result)) => {
            info!("Round finished: {:?}", result);
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::Aborted) => {
            info!("Round aborted by player");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Round failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
