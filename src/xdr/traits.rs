// SPDX-License-Identifier: AGPL-3.0-or-later

//! Interfaces for types with a canonical XDR representation.
use crate::xdr::error::DecodeXdrError;
use crate::xdr::{XdrReader, XdrWriter};

/// Types which can write themselves into an XDR byte buffer.
pub trait EncodeXdr {
    /// Appends the XDR representation of this value to the writer.
    fn encode_xdr(&self, writer: &mut XdrWriter);
}

/// Types which can be read back from an XDR byte buffer.
///
/// Decoding only checks the wire structure, it does not validate the decoded value.
pub trait DecodeXdr: Sized {
    /// Error returned when the bytes can not be decoded into this type.
    type Error: From<DecodeXdrError>;

    /// Reads a value from the reader and advances its cursor.
    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error>;
}
