// SPDX-License-Identifier: AGPL-3.0-or-later

use log::trace;

use crate::xdr::error::{DecodeXdrError, EncodingError, MalformedInputError};
use crate::xdr::opaque::padding_len;
use crate::xdr::traits::DecodeXdr;

/// Reads XDR encoded values from a borrowed byte slice.
///
/// The reader keeps a cursor which advances with every successful read. Errors carry the byte
/// offset (relative to the start of the slice) where the problem was detected.
#[derive(Clone, Debug)]
pub struct XdrReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> XdrReader<'a> {
    /// Returns a new reader positioned at the start of the slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::at(bytes, 0)
    }

    /// Returns a new reader positioned at the given cursor.
    pub fn at(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset }
    }

    /// Returns the current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Returns true if all bytes have been read.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads a 4-byte big-endian unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32, DecodeXdrError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    /// Reads a 4-byte big-endian signed integer.
    pub fn read_i32(&mut self) -> Result<i32, DecodeXdrError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    /// Reads an 8-byte big-endian unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64, DecodeXdrError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    /// Reads an 8-byte big-endian signed integer.
    pub fn read_i64(&mut self) -> Result<i64, DecodeXdrError> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    /// Reads a 4-byte boolean, anything but `0` or `1` is rejected.
    pub fn read_bool(&mut self) -> Result<bool, DecodeXdrError> {
        let offset = self.offset;

        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(MalformedInputError::InvalidBool { offset, value }.into()),
        }
    }

    /// Reads `len` bytes without length prefix and skips the zero padding behind them.
    pub fn read_fixed_opaque(&mut self, len: usize) -> Result<&'a [u8], DecodeXdrError> {
        let offset = self.offset;
        let padding = padding_len(len);

        // Check payload and padding together so truncated padding is reported at the value
        let needed = len.saturating_add(padding);
        if self.remaining() < needed {
            return Err(MalformedInputError::UnexpectedEnd {
                offset,
                needed,
                remaining: self.remaining(),
            }
            .into());
        }

        let value = self.take(len)?;
        let padding_offset = self.offset;
        let padding_bytes = self.take(padding)?;

        if let Some(position) = padding_bytes.iter().position(|byte| *byte != 0) {
            return Err(MalformedInputError::NonZeroPadding(padding_offset + position).into());
        }

        Ok(value)
    }

    /// Reads a length-prefixed opaque value.
    pub fn read_opaque(&mut self) -> Result<Vec<u8>, DecodeXdrError> {
        let len = self.read_u32()? as usize;
        trace!("Reading opaque value of {} bytes at {}", len, self.offset);
        Ok(self.read_fixed_opaque(len)?.to_vec())
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, DecodeXdrError> {
        let len = self.read_u32()? as usize;
        let offset = self.offset;
        let bytes = self.read_fixed_opaque(len)?;

        let value = std::str::from_utf8(bytes).map_err(|source| EncodingError { offset, source })?;

        Ok(value.to_owned())
    }

    /// Reads a presence flag and, if it is set, the value behind it.
    pub fn read_optional<T, E, F>(&mut self, read_value: F) -> Result<Option<T>, E>
    where
        E: From<DecodeXdrError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        if self.read_bool()? {
            Ok(Some(read_value(self)?))
        } else {
            Ok(None)
        }
    }

    /// Reads any value which knows its own XDR representation.
    pub fn read<T: DecodeXdr>(&mut self) -> Result<T, T::Error> {
        T::decode_xdr(self)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], MalformedInputError> {
        // Cursor may have been placed behind the end of the input with `at`
        let value = self
            .offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(self.offset..end))
            .ok_or(MalformedInputError::UnexpectedEnd {
                offset: self.offset,
                needed: len,
                remaining: self.remaining(),
            })?;

        self.offset += len;
        Ok(value)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], MalformedInputError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }
}
