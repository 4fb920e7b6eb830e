// SPDX-License-Identifier: AGPL-3.0-or-later

use log::trace;

use crate::identity::AccountId;
use crate::operation::error::{DecodeOperationError, UnknownOperationTypeError, ValidationError};
use crate::operation::traits::AsOperationBody;
use crate::operation::{
    AccountMergeOperation, BumpSequenceOperation, ManageDataOperation, OperationType,
};
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr, XdrReader, XdrWriter};
use crate::{Human, Validate};

/// Variant specific part of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationBody {
    /// Merge source account into destination.
    AccountMerge(AccountMergeOperation),

    /// Run inflation, this operation has no fields.
    Inflation,

    /// Set, modify or delete a data entry.
    ManageData(ManageDataOperation),

    /// Bump the sequence number of the source account.
    BumpSequence(BumpSequenceOperation),
}

impl OperationBody {
    /// Returns the operation type of this body.
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationBody::AccountMerge(_) => OperationType::AccountMerge,
            OperationBody::Inflation => OperationType::Inflation,
            OperationBody::ManageData(_) => OperationType::ManageData,
            OperationBody::BumpSequence(_) => OperationType::BumpSequence,
        }
    }

    /// Returns the type discriminant of this body.
    pub fn type_code(&self) -> i32 {
        self.operation_type().as_i32()
    }

    /// Reads the body of the given operation type.
    fn decode_body(
        operation_type: OperationType,
        reader: &mut XdrReader<'_>,
    ) -> Result<Self, DecodeXdrError> {
        let body = match operation_type {
            OperationType::AccountMerge => read_body::<AccountMergeOperation>(reader)?,
            OperationType::Inflation => OperationBody::Inflation,
            OperationType::ManageData => read_body::<ManageDataOperation>(reader)?,
            OperationType::BumpSequence => read_body::<BumpSequenceOperation>(reader)?,
        };

        Ok(body)
    }
}

fn read_body<T: AsOperationBody>(
    reader: &mut XdrReader<'_>,
) -> Result<OperationBody, DecodeXdrError> {
    Ok(reader.read::<T>()?.into())
}

impl Validate for OperationBody {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        match self {
            OperationBody::AccountMerge(body) => body.validate(),
            OperationBody::Inflation => Ok(()),
            OperationBody::ManageData(body) => body.validate(),
            OperationBody::BumpSequence(body) => body.validate(),
        }
    }
}

impl EncodeXdr for OperationBody {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        match self {
            OperationBody::AccountMerge(body) => writer.write(body),
            OperationBody::Inflation => (),
            OperationBody::ManageData(body) => writer.write(body),
            OperationBody::BumpSequence(body) => writer.write(body),
        }
    }
}

impl From<AccountMergeOperation> for OperationBody {
    fn from(body: AccountMergeOperation) -> Self {
        OperationBody::AccountMerge(body)
    }
}

impl From<ManageDataOperation> for OperationBody {
    fn from(body: ManageDataOperation) -> Self {
        OperationBody::ManageData(body)
    }
}

impl From<BumpSequenceOperation> for OperationBody {
    fn from(body: BumpSequenceOperation) -> Self {
        OperationBody::BumpSequence(body)
    }
}

/// One atomic ledger mutation.
///
/// An operation is made of the shared envelope, which is the optional source account, and the
/// variant specific body. Its wire layout is:
///
/// ```text
/// ┌───────────────────────────┬────────────────┬──────────────────┐
/// │ source: AccountId (opt)   │ type code: i32 │ body (by type)   │
/// └───────────────────────────┴────────────────┴──────────────────┘
/// ```
///
/// The source is only present if this operation is authorized by another account than the
/// transaction's source account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    source: Option<AccountId>,
    body: OperationBody,
}

impl Operation {
    /// Returns a new operation.
    pub fn new(body: impl Into<OperationBody>, source: Option<AccountId>) -> Self {
        Self {
            source,
            body: body.into(),
        }
    }

    /// Returns a new inflation operation.
    pub fn inflation(source: Option<AccountId>) -> Self {
        Self::new(OperationBody::Inflation, source)
    }

    /// Returns a copy of this operation authorized by the given source account.
    pub fn with_source(self, source: AccountId) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// Returns the source account of this operation if it differs from the transaction's.
    pub fn source(&self) -> Option<&AccountId> {
        self.source.as_ref()
    }

    /// Returns the variant specific body.
    pub fn body(&self) -> &OperationBody {
        &self.body
    }

    /// Returns the operation type.
    pub fn operation_type(&self) -> OperationType {
        self.body.operation_type()
    }

    /// Returns the type discriminant.
    pub fn type_code(&self) -> i32 {
        self.body.type_code()
    }
}

impl Validate for Operation {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(source) = &self.source {
            source.validate()?;
        }

        self.body.validate()
    }
}

impl EncodeXdr for Operation {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        writer.write_optional(self.source.as_ref(), |writer, source| writer.write(source));
        writer.write_i32(self.type_code());
        writer.write(&self.body);
    }
}

impl DecodeXdr for Operation {
    type Error = DecodeOperationError;

    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error> {
        let source = reader.read_optional(|reader| reader.read::<AccountId>())?;

        if let Some(source) = &source {
            trace!("Operation source account {}", source.display());
        }

        let offset = reader.offset();
        let type_code = reader.read_i32()?;
        let operation_type =
            OperationType::try_from(type_code).map_err(|_| UnknownOperationTypeError {
                type_code,
                offset: Some(offset),
            })?;

        let body = OperationBody::decode_body(operation_type, reader)?;

        Ok(Self { source, body })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::identity::AccountId;
    use crate::operation::error::ValidationError;
    use crate::operation::{BumpSequenceOperation, ManageDataOperation, OperationType};
    use crate::test_utils::constants::INVALID_CURVE_POINT;
    use crate::test_utils::fixtures::random_account_id;
    use crate::xdr::{XdrReader, XdrWriter};
    use crate::Validate;

    use super::{Operation, OperationBody};

    #[rstest]
    fn source_account(random_account_id: AccountId) {
        let body = BumpSequenceOperation::new(1).unwrap();

        let operation = Operation::new(body, None);
        assert_eq!(operation.source(), None);

        let operation = operation.with_source(random_account_id);
        assert_eq!(operation.source(), Some(&random_account_id));
        assert_eq!(operation.operation_type(), OperationType::BumpSequence);
        assert_eq!(operation.type_code(), 11);
    }

    #[test]
    fn body_conversions() {
        let manage_data = ManageDataOperation::delete("foo").unwrap();
        let operation = Operation::new(manage_data.clone(), None);

        assert_eq!(operation.body(), &OperationBody::ManageData(manage_data));
        assert_eq!(Operation::inflation(None).type_code(), 9);
    }

    #[test]
    fn validates_source_account() {
        let mut writer = XdrWriter::new();
        writer.write_bool(true);
        writer.write_i32(0);
        writer.write_fixed_opaque(&hex::decode(INVALID_CURVE_POINT).unwrap());
        writer.write_i32(9);
        let bytes = writer.into_bytes();

        let operation = XdrReader::new(&bytes).read::<Operation>().unwrap();
        assert!(matches!(
            operation.validate(),
            Err(ValidationError::InvalidAccount(_))
        ));
    }
}
