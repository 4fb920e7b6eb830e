// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for validating, encoding and decoding operations.
use thiserror::Error;

use crate::identity::AccountIdError;
use crate::xdr::{DecodeXdrError, EncodingError, MalformedInputError};

/// Errors from validating operation fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Data entry name exceeds the maximum length.
    #[error("data name is {0} bytes long, expected at most 64 bytes")]
    DataNameTooLong(usize),

    /// Data entry value exceeds the maximum length.
    #[error("data value is {0} bytes long, expected at most 64 bytes")]
    DataValueTooLong(usize),

    /// Sequence numbers can not be negative.
    #[error("sequence number {0} must not be negative")]
    NegativeSequenceNumber(i64),

    /// Handle errors from `AccountId` struct.
    #[error("invalid account id: {0}")]
    InvalidAccount(#[from] AccountIdError),
}

/// Type discriminant does not match any known operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
#[error(
    "unknown operation type {type_code}{}",
    .offset.map(|offset| format!(" at byte {}", offset)).unwrap_or_default()
)]
pub struct UnknownOperationTypeError {
    /// Discriminant which was not recognized.
    pub type_code: i32,

    /// Byte offset of the discriminant when it was read from wire bytes.
    pub offset: Option<usize>,
}

/// Errors from `operation::encode` module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeOperationError {
    /// Operation failed validation and was not encoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors from `operation::decode` module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
pub enum DecodeOperationError {
    /// Wire bytes are structurally inconsistent.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),

    /// String field does not hold valid UTF-8.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Type discriminant is not a known operation.
    #[error(transparent)]
    UnknownOperationType(#[from] UnknownOperationTypeError),
}

impl From<DecodeXdrError> for DecodeOperationError {
    fn from(err: DecodeXdrError) -> Self {
        match err {
            DecodeXdrError::MalformedInput(err) => Self::MalformedInput(err),
            DecodeXdrError::Encoding(err) => Self::Encoding(err),
        }
    }
}
