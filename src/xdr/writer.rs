// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::xdr::opaque::padding_len;
use crate::xdr::traits::EncodeXdr;

/// Appends XDR encoded values to an owned byte buffer.
///
/// Writing never fails. Values are expected to be validated before they reach the writer, the
/// buffer is handed to the caller with `into_bytes` once encoding is finished.
#[derive(Clone, Debug, Default)]
pub struct XdrWriter {
    bytes: Vec<u8>,
}

impl XdrWriter {
    /// Returns a new writer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new writer with pre-allocated buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Writes a 4-byte big-endian unsigned integer.
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a 4-byte big-endian signed integer.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an 8-byte big-endian unsigned integer ("unsigned hyper").
    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an 8-byte big-endian signed integer ("hyper").
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a boolean as 4-byte `0` or `1`.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(u32::from(value));
    }

    /// Writes bytes without length prefix, padded with zeroes to a multiple of 4.
    pub fn write_fixed_opaque(&mut self, value: &[u8]) {
        self.bytes.extend_from_slice(value);
        self.write_padding(value.len());
    }

    /// Writes a length-prefixed opaque value, padded with zeroes to a multiple of 4.
    ///
    /// The length prefix counts the payload bytes only, never the padding.
    pub fn write_opaque(&mut self, value: &[u8]) {
        debug_assert!(value.len() <= u32::MAX as usize);
        self.write_u32(value.len() as u32);
        self.write_fixed_opaque(value);
    }

    /// Writes a string as opaque UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) {
        self.write_opaque(value.as_bytes());
    }

    /// Writes a presence flag followed by the value if it is set.
    pub fn write_optional<T, F>(&mut self, value: Option<&T>, write_value: F)
    where
        T: ?Sized,
        F: FnOnce(&mut Self, &T),
    {
        match value {
            Some(value) => {
                self.write_bool(true);
                write_value(self, value);
            }
            None => self.write_bool(false),
        }
    }

    /// Writes any value which knows its own XDR representation.
    pub fn write<T: EncodeXdr + ?Sized>(&mut self, value: &T) {
        value.encode_xdr(self);
    }

    /// Returns number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing was written yet.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn write_padding(&mut self, len: usize) {
        self.bytes.resize(self.bytes.len() + padding_len(len), 0);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::XdrWriter;

    #[test]
    fn integers_are_big_endian() {
        let mut writer = XdrWriter::new();
        writer.write_u32(1);
        writer.write_i32(-2);
        writer.write_u64(3);
        writer.write_i64(-4);

        assert_eq!(
            writer.into_bytes(),
            vec![
                0, 0, 0, 1, //
                255, 255, 255, 254, //
                0, 0, 0, 0, 0, 0, 0, 3, //
                255, 255, 255, 255, 255, 255, 255, 252,
            ]
        );
    }

    #[rstest]
    #[case::empty(b"", vec![0, 0, 0, 0])]
    #[case::one_byte(b"a", vec![0, 0, 0, 1, 97, 0, 0, 0])]
    #[case::three_bytes(b"foo", vec![0, 0, 0, 3, 102, 111, 111, 0])]
    #[case::four_bytes(b"food", vec![0, 0, 0, 4, 102, 111, 111, 100])]
    #[case::five_bytes(b"foods", vec![0, 0, 0, 5, 102, 111, 111, 100, 115, 0, 0, 0])]
    fn opaque_padding(#[case] value: &[u8], #[case] expected: Vec<u8>) {
        let mut writer = XdrWriter::new();
        writer.write_opaque(value);
        assert_eq!(writer.len() % 4, 0);
        assert_eq!(writer.into_bytes(), expected);
    }

    #[test]
    fn fixed_opaque_has_no_length_prefix() {
        let mut writer = XdrWriter::new();
        writer.write_fixed_opaque(&[7, 7]);
        assert_eq!(writer.into_bytes(), vec![7, 7, 0, 0]);
    }

    #[test]
    fn optional_values() {
        let mut writer = XdrWriter::new();
        writer.write_optional(None::<&[u8]>, |writer, value| writer.write_opaque(value));
        writer.write_optional(Some(&b""[..]), |writer, value| writer.write_opaque(value));

        assert_eq!(
            writer.into_bytes(),
            vec![
                0, 0, 0, 0, // absent
                0, 0, 0, 1, 0, 0, 0, 0, // present but empty
            ]
        );
    }
}
