// SPDX-License-Identifier: AGPL-3.0-or-later

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes bytes as a hexadecimal string for human-readable formats and as a plain byte
/// sequence otherwise.
pub fn serialize_hex<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        hex::serde::serialize(value, serializer)
    } else {
        value.serialize(serializer)
    }
}

/// Deserializes bytes from a hexadecimal string for human-readable formats and from a plain byte
/// sequence otherwise.
pub fn deserialize_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        hex::serde::deserialize(deserializer)
    } else {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        Ok(bytes)
    }
}
