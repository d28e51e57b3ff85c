//! Move sets, rules, and round logic.

mod moveset;
mod round;
mod rules;

pub use moveset::MoveSet;
pub use round::{Reveal, RoundCommitment, RoundPhase};
pub use rules::{Outcome, OutcomeTable, RuleSet};
