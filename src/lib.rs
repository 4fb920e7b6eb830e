// SPDX-License-Identifier: AGPL-3.0-or-later

//! # paydex-base
//!
//! Build, validate and encode ledger operations for the Paydex network and format read queries
//! against its indexing service.
//!
//! Operations are serialized into the network's canonical XDR representation. The codec is
//! bit-exact: every variable-length value is length-prefixed and zero-padded to a 4-byte
//! boundary, optional values carry a presence flag and every operation is tagged with its type
//! discriminant.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use paydex_base::operation::decode::decode_encoded_operation;
//! use paydex_base::operation::encode::encode_operation;
//! use paydex_base::operation::{ManageDataOperation, Operation};
//!
//! let manage_data = ManageDataOperation::new("foo", Some(b"bar".to_vec()))?;
//! let operation = Operation::new(manage_data, None);
//!
//! let encoded_operation = encode_operation(&operation)?;
//! assert_eq!(decode_encoded_operation(&encoded_operation)?, operation);
//! # Ok(())
//! # }
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

#[cfg(test)]
use rstest_reuse;

pub mod call_builder;
pub mod identity;
pub mod operation;
pub mod serde;
#[cfg(any(feature = "test-utils", test))]
pub mod test_utils;
pub mod xdr;

/// Trait used by paydex structs to validate their own state.
pub trait Validate {
    /// Validation error type.
    type Error: std::fmt::Debug + std::error::Error + Send + Sync + 'static;

    /// Validates the instance and returns an error if it is in an invalid state.
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Trait used by paydex structs to create a shortened, human readable representation.
pub trait Human {
    /// Returns a short identifier for logs and debug output.
    fn display(&self) -> String;
}
