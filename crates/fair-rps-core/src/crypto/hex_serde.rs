//! Serde helpers encoding 32-byte arrays as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
    hex::encode(bytes).serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
    let hex_str = String::deserialize(d)?;
    let mut arr = [0u8; 32];
    hex::decode_to_slice(&hex_str, &mut arr).map_err(serde::de::Error::custom)?;
    Ok(arr)
}
