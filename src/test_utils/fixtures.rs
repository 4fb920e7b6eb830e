// SPDX-License-Identifier: AGPL-3.0-or-later

//! `rstest` fixtures for accounts and operations.
use ed25519_dalek::Keypair;
use rand::rngs::OsRng;
use rstest::fixture;

use crate::identity::AccountId;
use crate::operation::{
    AccountMergeOperation, BumpSequenceOperation, ManageDataOperation, Operation,
};
use crate::test_utils::constants::ACCOUNT_ID;

/// Account id of the fixed test account.
#[fixture]
pub fn account_id() -> AccountId {
    AccountId::new(ACCOUNT_ID).unwrap()
}

/// Account id derived from a freshly generated key pair.
#[fixture]
pub fn random_account_id() -> AccountId {
    let key_pair = Keypair::generate(&mut OsRng);
    AccountId::from(&key_pair.public)
}

/// Data entry mutation setting "foo" to "bar", without source account.
#[fixture]
pub fn manage_data_operation() -> Operation {
    manage_data("foo", Some(&b"bar"[..]), None)
}

/// Returns a data entry mutation, panics on invalid input.
pub fn manage_data(
    data_name: &str,
    data_value: Option<&[u8]>,
    source: Option<AccountId>,
) -> Operation {
    let data_value = data_value.map(|value| value.to_vec());
    let body = ManageDataOperation::new(data_name, data_value).unwrap();
    Operation::new(body, source)
}

/// Returns an account merge into the fixed test account.
pub fn account_merge(source: Option<AccountId>) -> Operation {
    let body = AccountMergeOperation::new(account_id()).unwrap();
    Operation::new(body, source)
}

/// Returns a sequence bump, panics on negative targets.
pub fn bump_sequence(bump_to: i64, source: Option<AccountId>) -> Operation {
    let body = BumpSequenceOperation::new(bump_to).unwrap();
    Operation::new(body, source)
}
