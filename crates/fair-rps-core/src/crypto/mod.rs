//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey, the per-round 32-byte HMAC key
//! - Commitment, the HMAC-SHA-256 tag over the computer's move

mod commitment;
mod hex_serde;
mod key;

pub use commitment::Commitment;
pub use key::{SecretKey, KEY_LEN};
