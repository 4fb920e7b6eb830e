// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::identity::AccountId;
use crate::operation::error::ValidationError;
use crate::operation::traits::AsOperationBody;
use crate::operation::OperationType;
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr, XdrReader, XdrWriter};
use crate::Validate;

/// Transfers the native balance of the source account into the destination account and removes
/// the source account from the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountMergeOperation {
    destination: AccountId,
}

impl AccountMergeOperation {
    /// Returns a new account merge into the given destination.
    pub fn new(destination: AccountId) -> Result<Self, ValidationError> {
        let operation = Self { destination };
        operation.validate()?;
        Ok(operation)
    }

    /// Returns the account receiving the merged balance.
    pub fn destination(&self) -> &AccountId {
        &self.destination
    }
}

impl Validate for AccountMergeOperation {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        self.destination.validate()?;
        Ok(())
    }
}

impl EncodeXdr for AccountMergeOperation {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        writer.write(&self.destination);
    }
}

impl DecodeXdr for AccountMergeOperation {
    type Error = DecodeXdrError;

    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            destination: reader.read()?,
        })
    }
}

impl AsOperationBody for AccountMergeOperation {
    const OPERATION_TYPE: OperationType = OperationType::AccountMerge;
}
