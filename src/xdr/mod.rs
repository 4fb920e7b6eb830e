// SPDX-License-Identifier: AGPL-3.0-or-later

//! Primitives of the XDR (External Data Representation) wire format.
//!
//! Every value occupies a multiple of 4 bytes and integers are big-endian. Variable-length values
//! are length-prefixed and zero-padded, optional values are preceded by a 4-byte presence flag.
mod error;
pub mod opaque;
mod reader;
mod traits;
mod writer;

pub use error::{DecodeXdrError, EncodingError, MalformedInputError};
pub use opaque::{decode_opaque, encode_opaque, padding_len};
pub use reader::XdrReader;
pub use traits::{DecodeXdr, EncodeXdr};
pub use writer::XdrWriter;
