// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::hash::Hash as StdHash;
use std::str::FromStr;

use ed25519_dalek::{PublicKey, PUBLIC_KEY_LENGTH};
use serde::{Deserialize, Serialize};

use crate::identity::{decode_account_strkey, encode_account_strkey, AccountIdError};
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr, MalformedInputError, XdrReader, XdrWriter};
use crate::{Human, Validate};

/// Discriminant of Ed25519 keys in the `PublicKey` wire union.
pub const KEY_TYPE_ED25519: i32 = 0;

/// Accounts are identified by their Ed25519 public key.
///
/// The textual representation is the checksummed base32 strkey starting with `G`, the hex
/// encoded key is accepted as well. On the wire an account id is the `PublicKey` union: the
/// 4-byte key type followed by the 32 raw key bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, StdHash)]
pub struct AccountId([u8; PUBLIC_KEY_LENGTH]);

impl AccountId {
    /// Validates and wraps a strkey or hex encoded Ed25519 public key string into a new
    /// `AccountId`.
    ///
    /// ## Example
    ///
    /// ```
    /// # use paydex_base::identity::AccountId;
    /// let strkey = "GB6PJ5MKFWE6SMYT6LPJSYCKQFHM5KMABTZBPMKA5HB2POSZUXMYFC4Z";
    /// let hex_str = "7cf4f58a2d89e93313f2de99604a814ecea9800cf217b140e9c3a7ba59a5d982";
    ///
    /// let account_id = AccountId::new(strkey).unwrap();
    /// assert_eq!(account_id, AccountId::new(hex_str).unwrap());
    /// assert_eq!(account_id.to_string(), strkey);
    /// assert_eq!(account_id.to_hex(), hex_str);
    /// ```
    pub fn new(value: &str) -> Result<Self, AccountIdError> {
        // Hex strings never contain a `G`
        if value.starts_with('G') {
            let bytes = decode_account_strkey(value)?;
            return Self::from_bytes(&bytes);
        }

        let bytes = hex::decode(value).map_err(|_| AccountIdError::InvalidHexEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// Validates and wraps raw public key bytes into a new `AccountId`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AccountIdError> {
        let array = <[u8; PUBLIC_KEY_LENGTH]>::try_from(bytes)
            .map_err(|_| AccountIdError::InvalidLength(bytes.len(), PUBLIC_KEY_LENGTH))?;

        let account_id = Self(array);
        account_id.validate()?;
        Ok(account_id)
    }

    /// Returns the raw public key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Returns the public key bytes as owned vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Returns the hex encoded public key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Validate for AccountId {
    type Error = AccountIdError;

    fn validate(&self) -> Result<(), Self::Error> {
        PublicKey::from_bytes(&self.0)
            .map(|_| ())
            .map_err(|err| AccountIdError::InvalidPublicKey(err.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_account_strkey(&self.0))
    }
}

impl Human for AccountId {
    /// Return a shortened six character representation.
    ///
    /// ## Example
    ///
    /// ```
    /// # use paydex_base::identity::AccountId;
    /// # use paydex_base::Human;
    /// let key = "7cf4f58a2d89e93313f2de99604a814ecea9800cf217b140e9c3a7ba59a5d982";
    /// let account_id: AccountId = key.parse().unwrap();
    /// assert_eq!(account_id.display(), "<AccountId a5d982>");
    /// ```
    fn display(&self) -> String {
        let hex_str = self.to_hex();
        let offset = PUBLIC_KEY_LENGTH * 2 - 6;
        format!("<AccountId {}>", &hex_str[offset..])
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = AccountIdError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<&PublicKey> for AccountId {
    fn from(public_key: &PublicKey) -> Self {
        Self(public_key.to_bytes())
    }
}

impl EncodeXdr for AccountId {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        writer.write_i32(KEY_TYPE_ED25519);
        writer.write_fixed_opaque(&self.0);
    }
}

impl DecodeXdr for AccountId {
    type Error = DecodeXdrError;

    /// Reads the key bytes without checking them for a valid curve point, use `validate` for
    /// that.
    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error> {
        let offset = reader.offset();
        let key_type = reader.read_i32()?;

        if key_type != KEY_TYPE_ED25519 {
            return Err(MalformedInputError::UnknownKeyType { offset, key_type }.into());
        }

        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(reader.read_fixed_opaque(PUBLIC_KEY_LENGTH)?);
        Ok(Self(bytes))
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            self.to_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let account_id = if deserializer.is_human_readable() {
            let hex_str = String::deserialize(deserializer)?;
            Self::new(&hex_str)
        } else {
            let bytes = <[u8; PUBLIC_KEY_LENGTH]>::deserialize(deserializer)?;
            Self::from_bytes(&bytes)
        };

        account_id.map_err(|err| serde::de::Error::custom(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::identity::AccountIdError;
    use crate::test_utils::constants::{ACCOUNT_ID, ACCOUNT_ID_STRKEY, INVALID_CURVE_POINT};
    use crate::test_utils::fixtures::random_account_id;
    use crate::xdr::{DecodeXdrError, MalformedInputError, XdrReader, XdrWriter};
    use crate::Validate;

    use super::AccountId;

    #[rstest]
    #[case::valid_hex(ACCOUNT_ID, None)]
    #[case::valid_strkey(ACCOUNT_ID_STRKEY, None)]
    #[case::strkey_checksum(
        "GB6PJ5MKFWE6SMYT6LPJSYCKQFHM5KMABTZBPMKA5HB2POSZUXMYFC5Z",
        Some(AccountIdError::InvalidStrKeyChecksum)
    )]
    #[case::strkey_not_on_curve(
        "GABAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABVCX",
        Some(AccountIdError::InvalidPublicKey(String::new()))
    )]
    #[case::invalid_hex("7cf4f58a2d89e93313f2de99604a814ecea9800cf217b140e9c3a7ba59a5d98z", Some(AccountIdError::InvalidHexEncoding))]
    #[case::too_short("7cf4f58a", Some(AccountIdError::InvalidLength(4, 32)))]
    #[case::not_on_curve(INVALID_CURVE_POINT, Some(AccountIdError::InvalidPublicKey(String::new())))]
    fn parse_account_id(#[case] value: &str, #[case] expected: Option<AccountIdError>) {
        let result = AccountId::new(value);

        match (result, expected) {
            (Ok(account_id), None) => {
                assert_eq!(account_id.to_hex(), ACCOUNT_ID);
                assert_eq!(account_id.to_string(), ACCOUNT_ID_STRKEY);
            }
            (Err(AccountIdError::InvalidPublicKey(_)), Some(AccountIdError::InvalidPublicKey(_))) => (),
            (Err(err), Some(expected)) => assert_eq!(err, expected),
            (result, expected) => panic!("expected {:?}, got {:?}", expected, result),
        }
    }

    #[rstest]
    fn xdr_layout(random_account_id: AccountId) {
        let mut writer = XdrWriter::new();
        writer.write(&random_account_id);
        let bytes = writer.into_bytes();

        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[..4], &[0, 0, 0, 0]);
        assert_eq!(&bytes[4..], random_account_id.as_bytes());

        let mut reader = XdrReader::new(&bytes);
        assert_eq!(reader.read::<AccountId>().unwrap(), random_account_id);
        assert!(reader.is_empty());
    }

    #[test]
    fn unknown_key_type() {
        let mut bytes = vec![0, 0, 0, 1];
        bytes.extend([0u8; 32]);

        assert_eq!(
            XdrReader::new(&bytes).read::<AccountId>(),
            Err(DecodeXdrError::MalformedInput(
                MalformedInputError::UnknownKeyType {
                    offset: 0,
                    key_type: 1
                }
            ))
        );
    }

    #[test]
    fn decoding_defers_key_validation() {
        let key_bytes = hex::decode(INVALID_CURVE_POINT).unwrap();
        let mut writer = XdrWriter::new();
        writer.write_i32(0);
        writer.write_fixed_opaque(&key_bytes);
        let bytes = writer.into_bytes();

        let account_id = XdrReader::new(&bytes).read::<AccountId>().unwrap();
        assert!(account_id.validate().is_err());
    }

    #[rstest]
    fn serde_text_form(random_account_id: AccountId) {
        let json = serde_json::to_string(&random_account_id).unwrap();
        assert_eq!(json, format!("\"{}\"", random_account_id));

        let account_id: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account_id, random_account_id);

        let from_hex: AccountId =
            serde_json::from_str(&format!("\"{}\"", random_account_id.to_hex())).unwrap();
        assert_eq!(from_hex, random_account_id);

        let invalid = format!("\"{}\"", INVALID_CURVE_POINT);
        assert!(serde_json::from_str::<AccountId>(&invalid).is_err());
    }
}
