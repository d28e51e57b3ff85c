//! Error types for move sets, rounds, and transcript verification.

use thiserror::Error;

/// Why a list of move names cannot form a game
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenCount(usize),

    #[error("move {0:?} appears more than once")]
    Duplicate(String),

    #[error("move #{0} has an empty name")]
    EmptyName(usize),
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("Invalid move: {0:?} is not part of this game")]
    InvalidMove(String),

    #[error("Human move already recorded as {recorded:?}, cannot judge {attempted:?}")]
    MoveAlreadyRecorded { recorded: String, attempted: String },

    #[error("Round not judged yet: the key stays sealed until the human move is recorded")]
    NotJudged,

    #[error("Random source failure: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Commitment mismatch: revealed key and move do not reproduce the published tag")]
    CommitmentMismatch,

    #[error("Result mismatch: recorded {recorded}, moves imply {expected}")]
    ResultMismatch {
        recorded: crate::protocol::RoundResult,
        expected: crate::protocol::RoundResult,
    },
}

impl GameError {
    /// Can the caller recover by asking the player again?
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}
