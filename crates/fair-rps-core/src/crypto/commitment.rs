//! Commitment = HMAC-SHA-256(key, move name).

use super::SecretKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Keyed tag binding the computer to its move before the human chooses
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "super::hex_serde")] [u8; 32]);

impl Commitment {
    /// Commit to a move name under the given key
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        let mac = Self::mac(key, move_name);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move reproduce this commitment.
    ///
    /// The tag comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        Self::mac(key, move_name).verify_slice(&self.0).is_ok()
    }

    fn mac(key: &SecretKey, move_name: &str) -> HmacSha256 {
        // HMAC pads or hashes the key, so no key length is rejected.
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        mac
    }
}

impl FromStr for Commitment {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
