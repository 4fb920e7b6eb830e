// SPDX-License-Identifier: AGPL-3.0-or-later

//! Methods to decode operations from their XDR representation.
//!
//! Decoding checks the wire structure only: length prefixes, padding, presence flags, UTF-8 and
//! the type discriminant. Field constraints are not checked so that operations read from the
//! ledger can be inspected even if they are invalid, use `Validate::validate` on the result.
//!
//! ```text
//!             ┌────────────────┐                             ┌─────────┐
//!  bytes ───► │EncodedOperation│ ────decode_operation()────► │Operation│
//!             └────────────────┘                             └─────────┘
//! ```
use log::debug;

use crate::operation::error::DecodeOperationError;
use crate::operation::{EncodedOperation, Operation};
use crate::xdr::{MalformedInputError, XdrReader};

/// Decodes an operation at the start of the given bytes.
///
/// Returns the operation and the number of bytes it occupied, bytes behind it are left
/// untouched so the caller can continue reading the surrounding structure.
pub fn decode_operation(bytes: &[u8]) -> Result<(Operation, usize), DecodeOperationError> {
    let mut reader = XdrReader::new(bytes);
    let operation = reader.read::<Operation>()?;

    debug!(
        "Decoded {} operation from {} bytes",
        operation.operation_type(),
        reader.offset()
    );

    Ok((operation, reader.offset()))
}

/// Decodes an operation which occupies the whole encoded buffer.
pub fn decode_encoded_operation(
    encoded_operation: &EncodedOperation,
) -> Result<Operation, DecodeOperationError> {
    let bytes = encoded_operation.as_bytes();
    let (operation, consumed) = decode_operation(bytes)?;

    if consumed < bytes.len() {
        return Err(MalformedInputError::TrailingBytes(bytes.len() - consumed).into());
    }

    Ok(operation)
}

impl TryFrom<&EncodedOperation> for Operation {
    type Error = DecodeOperationError;

    fn try_from(encoded_operation: &EncodedOperation) -> Result<Self, Self::Error> {
        decode_encoded_operation(encoded_operation)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rstest_reuse::apply;

    use crate::operation::encode::encode_operation;
    use crate::operation::error::{DecodeOperationError, UnknownOperationTypeError};
    use crate::operation::{EncodedOperation, ManageDataOperation, Operation, OperationBody};
    use crate::test_utils::fixtures::manage_data_operation;
    use crate::test_utils::templates::all_operations;
    use crate::xdr::MalformedInputError;

    use super::{decode_encoded_operation, decode_operation};

    #[rstest]
    fn manage_data_scenario(manage_data_operation: Operation) {
        let bytes: Vec<u8> = vec![
            0, 0, 0, 0, // no source account
            0, 0, 0, 10, // MANAGE_DATA
            0, 0, 0, 3, b'f', b'o', b'o', 0, // data_name
            0, 0, 0, 1, // data_value is present
            0, 0, 0, 3, b'b', b'a', b'r', 0, // data_value
        ];

        let (operation, consumed) = decode_operation(&bytes).unwrap();
        assert_eq!(operation, manage_data_operation);
        assert_eq!(consumed, bytes.len());
    }

    #[apply(all_operations)]
    fn round_trip(#[case] operation: Operation) {
        let encoded_operation = encode_operation(&operation).unwrap();
        let decoded = decode_encoded_operation(&encoded_operation).unwrap();

        assert_eq!(decoded, operation);
        assert_eq!(Operation::try_from(&encoded_operation).unwrap(), operation);
    }

    #[apply(all_operations)]
    fn reports_consumed_bytes(#[case] operation: Operation) {
        let encoded_operation = encode_operation(&operation).unwrap();

        let mut bytes = encoded_operation.as_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4]);

        let (decoded, consumed) = decode_operation(&bytes).unwrap();
        assert_eq!(decoded, operation);
        assert_eq!(consumed, encoded_operation.as_bytes().len());
        assert_eq!(
            decode_encoded_operation(&EncodedOperation::from(bytes)),
            Err(DecodeOperationError::MalformedInput(
                MalformedInputError::TrailingBytes(4)
            ))
        );
    }

    #[test]
    fn absent_and_empty_values_survive() {
        for data_value in [None, Some(vec![])] {
            let operation = Operation::new(
                ManageDataOperation::new("foo", data_value.clone()).unwrap(),
                None,
            );
            let encoded_operation = encode_operation(&operation).unwrap();
            let decoded = decode_encoded_operation(&encoded_operation).unwrap();

            match decoded.body() {
                OperationBody::ManageData(body) => {
                    assert_eq!(body.data_value(), data_value.as_deref());
                }
                other => panic!("unexpected body {:?}", other),
            }
        }
    }

    #[rstest]
    #[case::create_account("00000000 00000000", 0)]
    #[case::payment("00000000 00000001", 1)]
    #[case::after_known_range("00000000 0000000c", 12)]
    #[case::negative("00000000 ffffffff", -1)]
    fn unknown_operation_type(#[case] hex_str: &str, #[case] type_code: i32) {
        let bytes = hex::decode(hex_str.replace(' ', "")).unwrap();

        assert_eq!(
            decode_operation(&bytes).map(|(operation, _)| operation),
            Err(DecodeOperationError::UnknownOperationType(
                UnknownOperationTypeError {
                    type_code,
                    offset: Some(4),
                }
            ))
        );
    }

    #[test]
    fn unknown_type_after_source_account() {
        let mut bytes = vec![0, 0, 0, 1, 0, 0, 0, 0];
        bytes.extend_from_slice(&[1; 32]);
        bytes.extend_from_slice(&[0, 0, 0, 42]);

        let err = decode_operation(&bytes).expect_err("expected unknown type");
        assert_eq!(err.to_string(), "unknown operation type 42 at byte 40");
    }

    #[rstest]
    #[case::empty(
        "",
        "unexpected end of input at byte 0: needed 4 bytes, 0 remaining"
    )]
    #[case::invalid_source_flag(
        "00000002 0000000a",
        "invalid boolean value 2 at byte 0"
    )]
    #[case::missing_type_code(
        "00000000",
        "unexpected end of input at byte 4: needed 4 bytes, 0 remaining"
    )]
    #[case::truncated_source_account(
        "00000001 00000000 0102",
        "unexpected end of input at byte 8: needed 32 bytes, 2 remaining"
    )]
    #[case::unknown_key_type(
        "00000001 00000005",
        "unknown public key type 5 at byte 4"
    )]
    #[case::truncated_data_name(
        "00000000 0000000a 00000008 666f6f00",
        "unexpected end of input at byte 12: needed 8 bytes, 4 remaining"
    )]
    #[case::non_zero_padding(
        "00000000 0000000a 00000003 666f6f01 00000000",
        "non-zero padding byte at byte 15"
    )]
    #[case::invalid_utf8_name(
        "00000000 0000000a 00000002 c3280000 00000000",
        "invalid utf-8 string at byte 12: invalid utf-8 sequence of 1 bytes from index 0"
    )]
    #[case::missing_value_flag(
        "00000000 0000000a 00000003 666f6f00",
        "unexpected end of input at byte 16: needed 4 bytes, 0 remaining"
    )]
    #[case::invalid_value_flag(
        "00000000 0000000a 00000003 666f6f00 00000007",
        "invalid boolean value 7 at byte 16"
    )]
    #[case::truncated_data_value(
        "00000000 0000000a 00000003 666f6f00 00000001 00000003 6261",
        "unexpected end of input at byte 24: needed 4 bytes, 2 remaining"
    )]
    #[case::truncated_bump_sequence(
        "00000000 0000000b 00000000",
        "unexpected end of input at byte 8: needed 8 bytes, 4 remaining"
    )]
    fn malformed_input(#[case] hex_str: &str, #[case] expected: &str) {
        let bytes = hex::decode(hex_str.replace(' ', "")).unwrap();

        let err = decode_operation(&bytes).expect_err("expected decoding error");
        assert!(matches!(
            err,
            DecodeOperationError::MalformedInput(_) | DecodeOperationError::Encoding(_)
        ));
        assert_eq!(err.to_string(), expected);
    }
}
