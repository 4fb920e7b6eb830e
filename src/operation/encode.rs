// SPDX-License-Identifier: AGPL-3.0-or-later

//! Methods to encode operations.
//!
//! Encoding validates the operation first, an invalid operation never turns into bytes. The
//! resulting `EncodedOperation` is ready to be embedded into a transaction.
//!
//! ```text
//! ┌─────────┐                           ┌────────────────┐
//! │Operation│ ───encode_operation()───► │EncodedOperation│ ────► bytes
//! └─────────┘                           └────────────────┘
//! ```
use log::debug;

use crate::operation::error::EncodeOperationError;
use crate::operation::{EncodedOperation, Operation};
use crate::xdr::XdrWriter;
use crate::Validate;

/// Encodes an operation in canonic XDR format.
pub fn encode_operation(operation: &Operation) -> Result<EncodedOperation, EncodeOperationError> {
    operation.validate()?;

    let mut writer = XdrWriter::new();
    writer.write(operation);
    let bytes = writer.into_bytes();

    debug!(
        "Encoded {} operation into {} bytes",
        operation.operation_type(),
        bytes.len()
    );

    Ok(EncodedOperation::from(bytes))
}
