//! Protocol messages.

use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use crate::games::{MoveSet, RuleSet};
use crate::protocol::{RoundId, RoundResult};
use serde::{Deserialize, Serialize};

/// Record of a finished round, sufficient to re-check it offline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTranscript {
    pub round_id: RoundId,
    pub moves: MoveSet,
    /// Tag published before the human chose
    pub commitment: Commitment,
    pub human_move: String,
    pub computer_move: String,
    pub key: SecretKey,
    pub result: RoundResult,
}

impl RoundTranscript {
    /// Recompute the commitment and the result from the disclosed data
    pub fn verify(&self) -> Result<(), GameError> {
        if !self.commitment.verify(&self.key, &self.computer_move) {
            return Err(GameError::CommitmentMismatch);
        }

        let rules = RuleSet::from_move_set(self.moves.clone());
        let expected = RoundResult::from(rules.compare(&self.human_move, &self.computer_move)?);
        if expected != self.result {
            return Err(GameError::ResultMismatch {
                recorded: self.result,
                expected,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
