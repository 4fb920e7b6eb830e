// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for decoding XDR primitives.
use std::str::Utf8Error;

use thiserror::Error;

/// Wire bytes are structurally inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
pub enum MalformedInputError {
    /// Fewer bytes remain than the value at this offset requires.
    #[error("unexpected end of input at byte {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Byte offset where the value starts.
        offset: usize,
        /// Number of bytes the value requires.
        needed: usize,
        /// Number of bytes left in the buffer.
        remaining: usize,
    },

    /// Padding byte after an opaque value is not zero.
    #[error("non-zero padding byte at byte {0}")]
    NonZeroPadding(usize),

    /// Boolean field holds a value other than 0 or 1.
    #[error("invalid boolean value {value} at byte {offset}")]
    InvalidBool {
        /// Byte offset of the boolean field.
        offset: usize,
        /// Value found on the wire.
        value: u32,
    },

    /// Public key union carries an unsupported key type.
    #[error("unknown public key type {key_type} at byte {offset}")]
    UnknownKeyType {
        /// Byte offset of the key type discriminant.
        offset: usize,
        /// Key type found on the wire.
        key_type: i32,
    },

    /// Buffer holds more bytes than the decoded value.
    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),
}

/// Decoded string bytes are not valid UTF-8.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
#[error("invalid utf-8 string at byte {offset}: {source}")]
pub struct EncodingError {
    /// Byte offset of the string payload.
    pub offset: usize,

    /// Underlying UTF-8 validation error.
    #[source]
    pub source: Utf8Error,
}

/// Errors from `xdr::reader` and `xdr::opaque` modules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
pub enum DecodeXdrError {
    /// Handle structural errors in the wire bytes.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),

    /// Handle invalid UTF-8 in string fields.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
