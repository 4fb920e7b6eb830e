// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use crate::call_builder::CallBuilder;

/// Query transactions known to the indexing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionsCallBuilder(CallBuilder);

impl TransactionsCallBuilder {
    /// Returns a builder pointing at all transactions of the given server.
    pub fn new(server_url: &str) -> Self {
        Self(CallBuilder::new(server_url, "transactions"))
    }

    /// Point at a single transaction.
    pub fn transaction(self, transaction_hash: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("transactions/{}", transaction_hash)))
    }

    /// Point at all transactions which affected the given account.
    pub fn for_account(self, account_id: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("accounts/{}/transactions", account_id)))
    }

    /// Point at all transactions in the given ledger.
    pub fn for_ledger(self, sequence: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("ledgers/{}/transactions", sequence)))
    }

    /// Set whether failed transactions are included, by default they are not.
    pub fn include_failed(self, include_failed: bool) -> Self {
        Self(self.0.with_param("include_failed", include_failed))
    }

    /// Returns the full request url.
    pub fn url(&self) -> String {
        self.0.url()
    }
}

impl AsRef<CallBuilder> for TransactionsCallBuilder {
    fn as_ref(&self) -> &CallBuilder {
        &self.0
    }
}

impl From<TransactionsCallBuilder> for CallBuilder {
    fn from(builder: TransactionsCallBuilder) -> Self {
        builder.0
    }
}
