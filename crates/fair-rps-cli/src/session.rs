//! Interactive round over any line-based input and text output.

use crate::config::CliConfig;
use fair_rps_core::{GameError, RoundCommitment, RoundResult, RuleSet};
use rand::{CryptoRng, RngCore};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that end the session
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Transcript encoding failed: {0}")]
    Transcript(#[from] serde_json::Error),
}

/// One parsed line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Exit,
    Help,
    /// 1-based menu position
    Move(usize),
}

/// How the session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Played(RoundResult),
    Aborted,
}

/// Parse a menu line; `None` means re-prompt
pub fn parse_choice(line: &str, move_count: usize) -> Option<Choice> {
    match line.trim() {
        "?" => Some(Choice::Help),
        "0" => Some(Choice::Exit),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=move_count).contains(n))
            .map(Choice::Move),
    }
}

/// Commit, ask for the player's move, then judge and reveal.
///
/// The commitment is written before the menu. Exiting with `0` (or closing
/// the input) leaves the round unjudged and the key undisclosed.
pub fn play_round<G, R, W>(
    rules: &RuleSet,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
    config: &CliConfig,
) -> Result<SessionEnd, CliError>
where
    G: RngCore + CryptoRng,
    R: BufRead,
    W: Write,
{
    let mut round = RoundCommitment::start(rules, rng)?;
    writeln!(out, "HMAC: {}", round.commitment())?;

    let moves = rules.moves();
    let mut line = String::new();
    let human_move = loop {
        writeln!(out, "Available moves:")?;
        for (i, name) in moves.iter().enumerate() {
            writeln!(out, "{} - {}", i + 1, name)?;
        }
        writeln!(out, "0 - exit")?;
        writeln!(out, "? - help")?;
        write!(out, "Enter your move: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            warn!(round_id = %round.id(), "input closed before a move was chosen");
            writeln!(out)?;
            return Ok(SessionEnd::Aborted);
        }

        match parse_choice(&line, moves.len()) {
            Some(Choice::Exit) => {
                writeln!(out, "Exiting the game.")?;
                return Ok(SessionEnd::Aborted);
            }
            Some(Choice::Help) => write!(out, "{}", rules.outcome_table())?,
            Some(Choice::Move(choice)) => match moves.by_choice(choice) {
                Some(name) => break name,
                None => writeln!(out, "Invalid input. Please enter a valid choice.")?,
            },
            None => {
                debug!(input = line.trim(), "rejected menu input");
                writeln!(out, "Invalid input. Please enter a valid choice.")?;
            }
        }
    };

    let result = round.judge(human_move)?;
    let reveal = round.reveal()?;

    writeln!(out, "Your move: {}", human_move)?;
    writeln!(out, "Computer move: {}", reveal.computer_move)?;
    writeln!(out, "Result: {}", result)?;
    writeln!(out, "HMAC key: {}", reveal.key.to_hex())?;

    if config.transcript {
        writeln!(out, "Transcript:")?;
        writeln!(out, "{}", round.transcript()?.to_json()?)?;
    }

    Ok(SessionEnd::Played(result))
}
