// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use crate::call_builder::CallBuilder;

/// Query operations known to the indexing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationsCallBuilder(CallBuilder);

impl OperationsCallBuilder {
    /// Returns a builder pointing at all operations of the given server.
    pub fn new(server_url: &str) -> Self {
        Self(CallBuilder::new(server_url, "operations"))
    }

    /// Point at a single operation.
    pub fn operation(self, operation_id: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("operations/{}", operation_id)))
    }

    /// Point at all operations which affected the given account.
    pub fn for_account(self, account_id: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("accounts/{}/operations", account_id)))
    }

    /// Point at all operations which occurred in the given ledger.
    pub fn for_ledger(self, sequence: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("ledgers/{}/operations", sequence)))
    }

    /// Point at all operations of the given transaction.
    pub fn for_transaction(self, transaction_hash: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("transactions/{}/operations", transaction_hash)))
    }

    /// Set whether operations of failed transactions are included, by default they are not.
    pub fn include_failed(self, include_failed: bool) -> Self {
        Self(self.0.with_param("include_failed", include_failed))
    }

    /// Set related resources to join into the response, currently only `transactions`.
    pub fn join(self, join: &str) -> Self {
        Self(self.0.with_param("join", join))
    }

    /// Returns the full request url.
    pub fn url(&self) -> String {
        self.0.url()
    }
}

impl AsRef<CallBuilder> for OperationsCallBuilder {
    fn as_ref(&self) -> &CallBuilder {
        &self.0
    }
}

impl From<OperationsCallBuilder> for CallBuilder {
    fn from(builder: OperationsCallBuilder) -> Self {
        builder.0
    }
}
