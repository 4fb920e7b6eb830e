// SPDX-License-Identifier: AGPL-3.0-or-later

//! Create, validate, encode and decode ledger operations.
//!
//! Operations describe data mutations on the ledger. Each operation carries an optional source
//! account and one of a closed set of bodies, tagged with the body's type discriminant on the
//! wire.
mod account_merge;
mod bump_sequence;
pub mod decode;
pub mod encode;
mod encoded_operation;
mod error;
mod manage_data;
#[allow(clippy::module_inception)]
mod operation;
mod operation_type;
pub mod traits;

pub use account_merge::AccountMergeOperation;
pub use bump_sequence::BumpSequenceOperation;
pub use encoded_operation::EncodedOperation;
pub use error::{
    DecodeOperationError, EncodeOperationError, UnknownOperationTypeError, ValidationError,
};
pub use manage_data::{
    data_value_from_text, ManageDataOperation, MAX_DATA_NAME_LENGTH, MAX_DATA_VALUE_LENGTH,
};
pub use operation::{Operation, OperationBody};
pub use operation_type::OperationType;
