// SPDX-License-Identifier: AGPL-3.0-or-later

//! Format read queries against the ledger indexing service.
//!
//! Builders only assemble the endpoint path and query string, sending the request is up to the
//! caller. Every method consumes the builder and returns a new one:
//!
//! ```
//! use paydex_base::call_builder::OperationsCallBuilder;
//!
//! let url = OperationsCallBuilder::new("https://indexer.example.org/")
//!     .for_ledger(42)
//!     .include_failed(true)
//!     .join("transactions")
//!     .url();
//!
//! assert_eq!(
//!     url,
//!     "https://indexer.example.org/ledgers/42/operations?include_failed=true&join=transactions"
//! );
//! ```
#[allow(clippy::module_inception)]
mod call_builder;
mod operations;
mod payments;
mod transactions;

pub use call_builder::CallBuilder;
pub use operations::OperationsCallBuilder;
pub use payments::PaymentsCallBuilder;
pub use transactions::TransactionsCallBuilder;
