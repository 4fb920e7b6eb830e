// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::fmt::Display;

use crate::operation::error::UnknownOperationTypeError;

/// Operations are categorised by their type.
///
/// The type defines the layout of the operation body on the wire. Its discriminant matches the
/// network's `OperationType` enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// Merges the source account into a destination account.
    AccountMerge,

    /// Runs the weekly inflation payout.
    Inflation,

    /// Sets, modifies or deletes a data entry attached to the source account.
    ManageData,

    /// Bumps the sequence number of the source account.
    BumpSequence,
}

impl OperationType {
    /// Returns the operation type as a string.
    pub fn as_str(&self) -> &str {
        match self {
            OperationType::AccountMerge => "account_merge",
            OperationType::Inflation => "inflation",
            OperationType::ManageData => "manage_data",
            OperationType::BumpSequence => "bump_sequence",
        }
    }

    /// Returns the type discriminant as it is encoded on the wire.
    pub fn as_i32(&self) -> i32 {
        match self {
            OperationType::AccountMerge => 8,
            OperationType::Inflation => 9,
            OperationType::ManageData => 10,
            OperationType::BumpSequence => 11,
        }
    }
}

impl TryFrom<i32> for OperationType {
    type Error = UnknownOperationTypeError;

    fn try_from(type_code: i32) -> Result<Self, Self::Error> {
        match type_code {
            8 => Ok(OperationType::AccountMerge),
            9 => Ok(OperationType::Inflation),
            10 => Ok(OperationType::ManageData),
            11 => Ok(OperationType::BumpSequence),
            _ => Err(UnknownOperationTypeError {
                type_code,
                offset: None,
            }),
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
