// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::hash::Hash as StdHash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_hex, serialize_hex};

/// Wrapper type for XDR encoded operation bytes.
///
/// The bytes are meant to be embedded unmodified into a transaction before it gets signed.
#[derive(Clone, Debug, PartialEq, Eq, StdHash, Serialize, Deserialize)]
pub struct EncodedOperation(
    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")] Vec<u8>,
);

impl EncodedOperation {
    /// Returns new `EncodedOperation` instance from given bytes.
    ///
    /// This does not check if the bytes describe a valid operation, use `decode_operation` for
    /// that.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_owned())
    }

    /// Returns operation as bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns a reference to the operation bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns payload size (number of bytes) of encoded operation.
    pub fn size(&self) -> u64 {
        self.0.len() as u64
    }
}

impl From<Vec<u8>> for EncodedOperation {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for EncodedOperation {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for EncodedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Convert hex-encoded operation bytes into an `EncodedOperation` instance.
impl FromStr for EncodedOperation {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex::decode(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::EncodedOperation;

    #[test]
    fn hex_representation() {
        let encoded_operation = EncodedOperation::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 9]);

        assert_eq!(encoded_operation.size(), 8);
        assert_eq!(encoded_operation.to_string(), "0000000000000009");
        assert_eq!(
            "0000000000000009".parse::<EncodedOperation>().unwrap(),
            encoded_operation
        );
        assert!("not hex".parse::<EncodedOperation>().is_err());
    }

    #[test]
    fn serde_hex_string() {
        let encoded_operation = EncodedOperation::from(vec![0, 0, 0, 0, 0, 0, 0, 9]);
        let json = serde_json::to_string(&encoded_operation).unwrap();

        assert_eq!(json, "\"0000000000000009\"");
        assert_eq!(
            serde_json::from_str::<EncodedOperation>(&json).unwrap(),
            encoded_operation
        );
    }
}
