// SPDX-License-Identifier: AGPL-3.0-or-later

//! Interfaces shared by all operation body variants.
use crate::operation::error::ValidationError;
use crate::operation::{OperationBody, OperationType};
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr};
use crate::Validate;

/// Body of one concrete operation variant.
///
/// Each variant has a fixed type discriminant and knows how to write and read its fields in
/// canonical order. Validation is kept separate from decoding so bodies read from untrusted bytes
/// can still be inspected.
pub trait AsOperationBody:
    Validate<Error = ValidationError>
    + EncodeXdr
    + DecodeXdr<Error = DecodeXdrError>
    + Into<OperationBody>
{
    /// Operation type of this variant.
    const OPERATION_TYPE: OperationType;

    /// Returns the type discriminant of this variant.
    fn type_code(&self) -> i32 {
        Self::OPERATION_TYPE.as_i32()
    }
}
