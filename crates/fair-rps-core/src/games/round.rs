//! One round against the computer: commit, judge, reveal.

use super::RuleSet;
use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use crate::protocol::{RoundId, RoundResult, RoundTranscript};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Where a round is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Computer move, key, and commitment are fixed; human move pending
    Committed,
    /// Human move recorded and result computed; the key may be disclosed
    Judged,
}

/// Disclosed key and computer move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub key: SecretKey,
    pub computer_move: String,
}

impl Reveal {
    /// Check the disclosure against the tag published before the human chose
    pub fn verify(&self, commitment: &Commitment) -> bool {
        commitment.verify(&self.key, &self.computer_move)
    }
}

/// A single round.
///
/// [`RoundCommitment::start`] draws the computer's move and a fresh key and
/// publishes only the commitment. The key and move stay sealed until
/// [`RoundCommitment::judge`] has recorded the human's move.
pub struct RoundCommitment<'r> {
    id: RoundId,
    rules: &'r RuleSet,
    computer_move: usize,
    key: SecretKey,
    commitment: Commitment,
    /// Human move index and the cached result
    judged: Option<(usize, RoundResult)>,
}

impl<'r> RoundCommitment<'r> {
    /// Draw the computer's move and key from `rng` and commit to the move
    pub fn start<R>(rules: &'r RuleSet, rng: &mut R) -> Result<Self, GameError>
    where
        R: RngCore + CryptoRng,
    {
        let computer_move = rng.gen_range(0..rules.moves().len());
        let key = SecretKey::generate(rng)?;
        let commitment = Commitment::new(&key, move_name(rules, computer_move));

        let id = RoundId::new();
        debug!(round_id = %id, moves = rules.moves().len(), %commitment, "round committed");

        Ok(Self {
            id,
            rules,
            computer_move,
            key,
            commitment,
            judged: None,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    pub fn phase(&self) -> RoundPhase {
        match self.judged {
            None => RoundPhase::Committed,
            Some(_) => RoundPhase::Judged,
        }
    }

    /// Tag to publish before asking for the human's move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The recorded human move, once judged
    pub fn human_move(&self) -> Option<&'r str> {
        self.judged.map(|(human, _)| move_name(self.rules, human))
    }

    /// The cached result, once judged
    pub fn result(&self) -> Option<RoundResult> {
        self.judged.map(|(_, result)| result)
    }

    /// Record the human's move and decide the round.
    ///
    /// Calling again with the same move returns the cached result. A
    /// different move after one is recorded is refused.
    pub fn judge(&mut self, human_move: &str) -> Result<RoundResult, GameError> {
        let human = self
            .rules
            .moves()
            .index_of(human_move)
            .ok_or_else(|| GameError::InvalidMove(human_move.to_string()))?;

        if let Some((recorded, result)) = self.judged {
            if recorded == human {
                return Ok(result);
            }
            return Err(GameError::MoveAlreadyRecorded {
                recorded: move_name(self.rules, recorded).to_string(),
                attempted: human_move.to_string(),
            });
        }

        let result = RoundResult::from(self.rules.compare_index(human, self.computer_move));
        self.judged = Some((human, result));

        info!(round_id = %self.id, human_move, %result, "round judged");
        Ok(result)
    }

    /// Disclose the key and the computer's move
    pub fn reveal(&self) -> Result<Reveal, GameError> {
        if self.judged.is_none() {
            return Err(GameError::NotJudged);
        }
        Ok(Reveal {
            key: self.key.clone(),
            computer_move: move_name(self.rules, self.computer_move).to_string(),
        })
    }

    /// Everything a third party needs to re-check the round
    pub fn transcript(&self) -> Result<RoundTranscript, GameError> {
        let (human, result) = self.judged.ok_or(GameError::NotJudged)?;
        let reveal = self.reveal()?;
        Ok(RoundTranscript {
            round_id: self.id,
            moves: self.rules.moves().clone(),
            commitment: self.commitment,
            human_move: move_name(self.rules, human).to_string(),
            computer_move: reveal.computer_move,
            key: reveal.key,
            result,
        })
    }
}

// Leaves out the computer's move; rounds are logged before the reveal.
impl fmt::Debug for RoundCommitment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundCommitment")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

// Indices come from the move set itself, so they are always in range.
fn move_name(rules: &RuleSet, index: usize) -> &str {
    &rules.moves().as_slice()[index]
}
