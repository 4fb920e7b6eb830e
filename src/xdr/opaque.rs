// SPDX-License-Identifier: AGPL-3.0-or-later

//! Variable-length opaque values.
//!
//! An opaque value is written as a 4-byte big-endian length, followed by the raw bytes and 0 to
//! 3 zero bytes which align the value to the next multiple of 4:
//!
//! ```text
//! ┌────────────┬───────────────┬─────────────┐
//! │ length: u32│ bytes[length] │ 0x00 * pad  │
//! └────────────┴───────────────┴─────────────┘
//! ```
//!
//! Decoding is strict: padding bytes must be zero.
use crate::xdr::error::DecodeXdrError;
use crate::xdr::{XdrReader, XdrWriter};

/// Returns the number of zero bytes needed to align a value of `len` bytes to 4 bytes.
pub const fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Encodes bytes as length-prefixed and padded opaque value.
pub fn encode_opaque(bytes: &[u8]) -> Vec<u8> {
    let mut writer = XdrWriter::with_capacity(4 + bytes.len() + padding_len(bytes.len()));
    writer.write_opaque(bytes);
    writer.into_bytes()
}

/// Decodes an opaque value starting at `cursor`.
///
/// Returns the payload and the cursor position right after the padding.
pub fn decode_opaque(bytes: &[u8], cursor: usize) -> Result<(Vec<u8>, usize), DecodeXdrError> {
    let mut reader = XdrReader::at(bytes, cursor);
    let value = reader.read_opaque()?;
    Ok((value, reader.offset()))
}
