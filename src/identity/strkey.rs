// SPDX-License-Identifier: AGPL-3.0-or-later

//! Checksummed base32 "strkey" text form of account ids.
//!
//! ```text
//! base32( version byte | 32 key bytes | crc16-xmodem checksum, little endian )
//! ```
//!
//! Account ids use the version byte `6 << 3`, which makes every encoded key start with `G`.
use base32::Alphabet;
use crc::{Crc, CRC_16_XMODEM};
use ed25519_dalek::PUBLIC_KEY_LENGTH;

use crate::identity::AccountIdError;

/// Version byte of Ed25519 account ids.
pub const VERSION_BYTE_ACCOUNT_ID: u8 = 6 << 3;

/// Number of characters of an encoded account id.
pub const ACCOUNT_STRKEY_LENGTH: usize = 56;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Encodes public key bytes into their strkey form.
pub fn encode_account_strkey(key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    let mut payload = Vec::with_capacity(PUBLIC_KEY_LENGTH + 3);
    payload.push(VERSION_BYTE_ACCOUNT_ID);
    payload.extend_from_slice(key);

    let checksum = CRC16.checksum(&payload);
    payload.extend_from_slice(&checksum.to_le_bytes());

    base32::encode(ALPHABET, &payload)
}

/// Decodes public key bytes from their strkey form.
///
/// Only the uppercase alphabet is accepted. The key bytes are not checked for being a valid curve
/// point.
pub fn decode_account_strkey(value: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], AccountIdError> {
    if value.len() != ACCOUNT_STRKEY_LENGTH {
        return Err(AccountIdError::InvalidStrKeyLength(value.len()));
    }

    let payload = base32::decode(ALPHABET, value)
        .filter(|_| value.bytes().all(|c| c.is_ascii_uppercase() || (b'2'..=b'7').contains(&c)))
        .ok_or(AccountIdError::InvalidStrKeyEncoding)?;

    let (data, checksum) = payload.split_at(payload.len() - 2);
    let version = data[0];
    if version != VERSION_BYTE_ACCOUNT_ID {
        return Err(AccountIdError::InvalidStrKeyVersion(version));
    }

    if CRC16.checksum(data).to_le_bytes() != checksum {
        return Err(AccountIdError::InvalidStrKeyChecksum);
    }

    let mut key = [0u8; PUBLIC_KEY_LENGTH];
    key.copy_from_slice(&data[1..]);
    Ok(key)
}
