//! Protocol types and messages.

mod messages;
mod types;

pub use messages::RoundTranscript;
pub use types::{RoundId, RoundResult};
