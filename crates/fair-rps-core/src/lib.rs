//! Fair RPS Core Library
//!
//! This crate provides the cyclic rule engine, the HMAC commit-reveal
//! primitives, and the round state machine for a provably fair game of
//! extended rock-paper-scissors against the computer.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, SecretKey};
pub use error::{GameError, MoveSetError};
pub use games::{MoveSet, Outcome, OutcomeTable, Reveal, RoundCommitment, RoundPhase, RuleSet};
pub use protocol::{RoundId, RoundResult, RoundTranscript};
