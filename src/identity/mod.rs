// SPDX-License-Identifier: AGPL-3.0-or-later

//! Account identities which sign and own ledger entries.
mod account_id;
mod error;
mod strkey;

pub use account_id::{AccountId, KEY_TYPE_ED25519};
pub use error::AccountIdError;
pub use strkey::{
    decode_account_strkey, encode_account_strkey, ACCOUNT_STRKEY_LENGTH, VERSION_BYTE_ACCOUNT_ID,
};
