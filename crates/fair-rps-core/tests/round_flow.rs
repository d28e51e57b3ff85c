//! Integration tests for the full round flow.
//!
//! These tests play complete rounds from commitment to verification, the way
//! a skeptical player would check them.

use fair_rps_core::{
    crypto::{Commitment, SecretKey},
    error::{GameError, MoveSetError},
    games::{RoundCommitment, RoundPhase, RuleSet},
    protocol::{RoundResult, RoundTranscript},
};
use rand::rngs::StdRng;
use rand::{CryptoRng, Error, RngCore, SeedableRng};

/// Random source that hands out move draws but refuses to fill key bytes
struct BrokenEntropy;

impl RngCore for BrokenEntropy {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::new("entropy pool drained"))
    }
}

impl CryptoRng for BrokenEntropy {}

/// Simulate a complete round where the player checks the reveal
#[test]
fn test_full_round_with_player_verification() {
    // Setup: rules from the command line
    let rules = RuleSet::build(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
    let mut rng = rand::thread_rng();

    // Phase 1: computer commits, player sees only the tag
    let mut round = RoundCommitment::start(&rules, &mut rng).unwrap();
    let shown_tag = round.commitment().to_string();
    assert_eq!(round.phase(), RoundPhase::Committed);

    // Phase 2: player picks menu item 4
    let human_move = rules.moves().by_choice(4).unwrap();
    assert_eq!(human_move, "lizard");
    let result = round.judge(human_move).unwrap();

    // Phase 3: reveal
    let reveal = round.reveal().unwrap();
    let key_hex = reveal.key.to_hex();

    // Phase 4: player recomputes the HMAC from what was printed
    let key: SecretKey = key_hex.parse().unwrap();
    let tag: Commitment = shown_tag.parse().unwrap();
    assert!(tag.verify(&key, &reveal.computer_move));
    assert_eq!(Commitment::new(&key, &reveal.computer_move).to_string(), shown_tag);

    // And re-derives the outcome
    let expected = RoundResult::from(rules.compare(human_move, &reveal.computer_move).unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_transcript_survives_json_and_verifies() {
    let rules = RuleSet::build(["fire", "water", "air", "earth", "ice", "wood", "metal"]).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for choice in 1..=7 {
        let mut round = RoundCommitment::start(&rules, &mut rng).unwrap();
        let human_move = rules.moves().by_choice(choice).unwrap();
        round.judge(human_move).unwrap();

        let json = round.transcript().unwrap().to_json().unwrap();
        let transcript = RoundTranscript::from_json(&json).unwrap();

        assert_eq!(transcript.round_id, round.id());
        assert_eq!(transcript.human_move, human_move);
        assert!(transcript.verify().is_ok());
    }
}

#[test]
fn test_tampered_transcript_fails() {
    let rules = RuleSet::build(["rock", "paper", "scissors"]).unwrap();
    let mut round = RoundCommitment::start(&rules, &mut rand::thread_rng()).unwrap();
    round.judge("scissors").unwrap();
    let honest = round.transcript().unwrap();

    // The computer claims a different move after the fact
    let mut forged = honest.clone();
    forged.computer_move = rules
        .moves()
        .iter()
        .find(|m| *m != honest.computer_move)
        .unwrap()
        .to_string();

    assert!(matches!(forged.verify(), Err(GameError::CommitmentMismatch)));
}

#[test]
fn test_independent_rounds_share_rules() {
    let rules = RuleSet::build(["a", "b", "c"]).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let mut rounds: Vec<RoundCommitment<'_>> = (0..4)
        .map(|_| RoundCommitment::start(&rules, &mut rng).unwrap())
        .collect();

    for round in rounds.iter_mut() {
        round.judge("b").unwrap();
        let reveal = round.reveal().unwrap();
        assert!(reveal.verify(round.commitment()));
    }

    let keys: Vec<_> = rounds.iter().map(|r| r.reveal().unwrap().key).collect();
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            assert_ne!(keys[i], keys[j]);
        }
    }
}

#[test]
fn test_entropy_failure_aborts_round() {
    let rules = RuleSet::build(["rock", "paper", "scissors"]).unwrap();
    let err = RoundCommitment::start(&rules, &mut BrokenEntropy).unwrap_err();

    assert!(matches!(err, GameError::Entropy(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_invalid_move_sets_cannot_start() {
    assert_eq!(RuleSet::build(["x"]).unwrap_err(), MoveSetError::TooFew(1));
    assert_eq!(
        RuleSet::build(["w", "x", "y", "z"]).unwrap_err(),
        MoveSetError::EvenCount(4)
    );

    let err = GameError::from(RuleSet::build(["x", "y", "x"]).unwrap_err());
    assert_eq!(err.to_string(), "Invalid move set: move \"x\" appears more than once");
}
