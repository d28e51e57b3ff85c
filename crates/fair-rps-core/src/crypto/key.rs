//! Per-round secret key for the move commitment.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a round key in bytes
pub const KEY_LEN: usize = 32;

/// Secret HMAC key, drawn fresh for every round and disclosed at the reveal
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "super::hex_serde")] [u8; KEY_LEN]);

impl SecretKey {
    /// Draw a new key from a cryptographically secure source.
    ///
    /// Uses the fallible fill so a broken source surfaces as an error
    /// instead of a key with predictable bytes.
    pub fn generate<R>(rng: &mut R) -> Result<Self, rand::Error>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex form shown to the player at the reveal
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for SecretKey {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; KEY_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

// Never print key material through Debug; rounds get logged before the reveal.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<sealed>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_keys_differ() {
        let mut rng = rand::thread_rng();
        let key1 = SecretKey::generate(&mut rng).unwrap();
        let key2 = SecretKey::generate(&mut rng).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let key1 = SecretKey::generate(&mut StdRng::seed_from_u64(42)).unwrap();
        let key2 = SecretKey::generate(&mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_hex_parse() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);
        let parsed: SecretKey = key.to_hex().parse().unwrap();

        assert_eq!(parsed, key);
        assert!("abcd".parse::<SecretKey>().is_err());
        assert!("zz".repeat(KEY_LEN).parse::<SecretKey>().is_err());
    }

    #[test]
    fn test_debug_hides_key_bytes() {
        let key = SecretKey::from_bytes([0x5a; KEY_LEN]);
        let debug = format!("{:?}", key);

        assert!(!debug.contains("5a5a"));
    }
}
