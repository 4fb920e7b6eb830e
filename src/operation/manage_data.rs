// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::operation::error::ValidationError;
use crate::operation::traits::AsOperationBody;
use crate::operation::OperationType;
use crate::xdr::{DecodeXdr, DecodeXdrError, EncodeXdr, XdrReader, XdrWriter};
use crate::Validate;

/// Maximum number of bytes of a data entry name.
pub const MAX_DATA_NAME_LENGTH: usize = 64;

/// Maximum number of bytes of a data entry value.
pub const MAX_DATA_VALUE_LENGTH: usize = 64;

/// Converts text into a data entry value by taking its UTF-8 bytes.
pub fn data_value_from_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Sets, modifies or deletes a data entry (name/value pair) attached to the source account.
///
/// An absent value deletes the entry while a present but empty value sets it to the empty value,
/// these are two distinct states on the wire.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────┐
/// │ data_name: string<64>│ data_value: opaque<64> (opt) │
/// └──────────────────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManageDataOperation {
    data_name: String,
    data_value: Option<Vec<u8>>,
}

impl ManageDataOperation {
    /// Returns a new data entry mutation.
    ///
    /// Fails if the name or value are longer than 64 bytes.
    pub fn new(
        data_name: impl Into<String>,
        data_value: Option<Vec<u8>>,
    ) -> Result<Self, ValidationError> {
        let operation = Self {
            data_name: data_name.into(),
            data_value,
        };
        operation.validate()?;
        Ok(operation)
    }

    /// Returns a new data entry mutation with a text value stored as UTF-8 bytes.
    pub fn with_text_value(
        data_name: impl Into<String>,
        data_value: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(data_name, Some(data_value_from_text(data_value)))
    }

    /// Returns a new mutation deleting the data entry with this name.
    pub fn delete(data_name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(data_name, None)
    }

    /// Returns the name of the data entry.
    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    /// Returns the value of the data entry, `None` if the entry gets deleted.
    pub fn data_value(&self) -> Option<&[u8]> {
        self.data_value.as_deref()
    }

    /// Returns true if this operation deletes the data entry.
    pub fn is_delete(&self) -> bool {
        self.data_value.is_none()
    }
}

impl Validate for ManageDataOperation {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.data_name.len() > MAX_DATA_NAME_LENGTH {
            return Err(ValidationError::DataNameTooLong(self.data_name.len()));
        }

        if let Some(data_value) = &self.data_value {
            if data_value.len() > MAX_DATA_VALUE_LENGTH {
                return Err(ValidationError::DataValueTooLong(data_value.len()));
            }
        }

        Ok(())
    }
}

impl EncodeXdr for ManageDataOperation {
    fn encode_xdr(&self, writer: &mut XdrWriter) {
        writer.write_string(&self.data_name);
        writer.write_optional(self.data_value.as_deref(), |writer, value| {
            writer.write_opaque(value)
        });
    }
}

impl DecodeXdr for ManageDataOperation {
    type Error = DecodeXdrError;

    fn decode_xdr(reader: &mut XdrReader<'_>) -> Result<Self, Self::Error> {
        let data_name = reader.read_string()?;
        let data_value = reader.read_optional(|reader| reader.read_opaque())?;

        Ok(Self {
            data_name,
            data_value,
        })
    }
}

impl AsOperationBody for ManageDataOperation {
    const OPERATION_TYPE: OperationType = OperationType::ManageData;
}
