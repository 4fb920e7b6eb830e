// SPDX-License-Identifier: AGPL-3.0-or-later

//! Test utilities for the operation codec.
//!
//! `rstest` fixtures can be injected into tests by naming them as test arguments. Inside this crate
//! the templates apply a shared set of `#[case]`s to many tests with `rstest_reuse`.
//!
//! ```
//! # #[cfg(test)]
//! # mod tests {
//! use rstest::rstest;
//!
//! use paydex_base::operation::encode::encode_operation;
//! use paydex_base::operation::Operation;
//! use paydex_base::test_utils::fixtures::manage_data_operation;
//!
//! #[rstest]
//! fn encode(manage_data_operation: Operation) {
//!     assert!(encode_operation(&manage_data_operation).is_ok());
//! }
//! # }
//! ```
pub mod constants;
pub mod fixtures;
pub mod templates;
