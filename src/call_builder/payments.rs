// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use crate::call_builder::CallBuilder;

/// Query payment operations known to the indexing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentsCallBuilder(CallBuilder);

impl PaymentsCallBuilder {
    /// Returns a builder pointing at all payments of the given server.
    pub fn new(server_url: &str) -> Self {
        Self(CallBuilder::new(server_url, "payments"))
    }

    /// Point at all payments where the given account was sender or receiver.
    pub fn for_account(self, account_id: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("accounts/{}/payments", account_id)))
    }

    /// Point at all payments of valid transactions in the given ledger.
    pub fn for_ledger(self, sequence: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("ledgers/{}/payments", sequence)))
    }

    /// Point at all payments of the given transaction.
    pub fn for_transaction(self, transaction_hash: impl Display) -> Self {
        Self(self.0.with_endpoint(format!("transactions/{}/payments", transaction_hash)))
    }

    /// Set whether payments of failed transactions are included, by default they are not.
    pub fn include_failed(self, include_failed: bool) -> Self {
        Self(self.0.with_param("include_failed", include_failed))
    }

    /// Returns the full request url.
    pub fn url(&self) -> String {
        self.0.url()
    }
}

impl AsRef<CallBuilder> for PaymentsCallBuilder {
    fn as_ref(&self) -> &CallBuilder {
        &self.0
    }
}

impl From<PaymentsCallBuilder> for CallBuilder {
    fn from(builder: PaymentsCallBuilder) -> Self {
        builder.0
    }
}
