// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Errors from `AccountId` struct.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    /// Account id string contains invalid hex characters.
    #[error("invalid hex encoding in account id string")]
    InvalidHexEncoding,

    /// Account id string is neither a hex nor a strkey encoding.
    #[error("invalid base32 encoding in account id string")]
    InvalidStrKeyEncoding,

    /// Strkey account id string has the wrong number of characters.
    #[error("invalid account id strkey length {0}, expected 56 characters")]
    InvalidStrKeyLength(usize),

    /// Strkey version byte does not denote an account id.
    #[error("invalid strkey version byte {0}, expected account id")]
    InvalidStrKeyVersion(u8),

    /// Strkey checksum does not match its payload.
    #[error("invalid strkey checksum")]
    InvalidStrKeyChecksum,

    /// Account id has an invalid length.
    #[error("invalid account id length {0} bytes, expected {1} bytes")]
    InvalidLength(usize, usize),

    /// Bytes do not describe a valid Ed25519 public key.
    #[error("invalid ed25519 public key: {0}")]
    InvalidPublicKey(String),
}
