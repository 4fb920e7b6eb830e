// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::operation::error::ValidationError;
use crate::operation::traits::AsOperationBody;
use crate::operation::OperationType;
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr, XdrReader, XdrWriter};
use crate::Validate;

/// Bumps the sequence number of the source account to the given value.
///
/// The body is a single 8-byte signed sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BumpSequenceOperation {
    bump_to: i64,
}

impl BumpSequenceOperation {
    /// Returns a new sequence bump, fails if the target is negative.
    pub fn new(bump_to: i64) -> Result<Self, ValidationError> {
        let operation = Self { bump_to };
        operation.validate()?;
        Ok(operation)
    }

    /// Returns the sequence number the account gets bumped to.
    pub fn bump_to(&self) -> i64 {
        self.bump_to
    }
}

impl Validate for BumpSequenceOperation {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.bump_to < 0 {
            return Err(ValidationError::NegativeSequenceNumber(self.bump_to));
        }

        Ok(())
    }
}

impl EncodeXdr for BumpSequenceOperation {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        writer.write_i64(self.bump_to);
    }
}

impl DecodeXdr for BumpSequenceOperation {
    type Error = DecodeXdrError;

    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            bump_to: reader.read_i64()?,
        })
    }
}

impl AsOperationBody for BumpSequenceOperation {
    const OPERATION_TYPE: OperationType = OperationType::BumpSequence;
}

#[cfg(test)]
mod tests {
    use crate::operation::error::ValidationError;
    use crate::xdr::{XdrReader, XdrWriter};
    use crate::Validate;

    use super::BumpSequenceOperation;

    #[test]
    fn rejects_negative_targets() {
        assert!(BumpSequenceOperation::new(0).is_ok());
        assert!(BumpSequenceOperation::new(i64::MAX).is_ok());
        assert_eq!(
            BumpSequenceOperation::new(-1),
            Err(ValidationError::NegativeSequenceNumber(-1))
        );
    }

    #[test]
    fn body_layout() {
        let operation = BumpSequenceOperation::new(0x0102_0304_0506_0708).unwrap();

        let mut writer = XdrWriter::new();
        writer.write(&operation);
        let bytes = writer.into_bytes();
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let decoded = XdrReader::new(&bytes)
            .read::<BumpSequenceOperation>()
            .unwrap();
        assert_eq!(decoded.bump_to(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn decoding_defers_validation() {
        let bytes = (-5i64).to_be_bytes();
        let operation = XdrReader::new(&bytes)
            .read::<BumpSequenceOperation>()
            .unwrap();

        assert_eq!(operation.bump_to(), -5);
        assert!(operation.validate().is_err());
    }
}
