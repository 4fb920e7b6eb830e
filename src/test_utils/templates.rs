// SPDX-License-Identifier: AGPL-3.0-or-later

//! With these templates you can apply many rstest cases to a single test. They utilize the
//! [rstest_reuse](https://github.com/la10736/rstest/tree/master/rstest_reuse) crate.
use rstest_reuse::template;

// Valid operations of every type, with and without source account.
#[template]
#[rstest]
#[case::manage_data(crate::test_utils::fixtures::manage_data("foo", Some(&b"bar"[..]), None))]
#[case::manage_data_delete(crate::test_utils::fixtures::manage_data("foo", None, None))]
#[case::manage_data_empty_value(crate::test_utils::fixtures::manage_data("foo", Some(&b""[..]), None))]
#[case::manage_data_empty_name(crate::test_utils::fixtures::manage_data("", Some(&b"x"[..]), None))]
#[case::manage_data_max_lengths(crate::test_utils::fixtures::manage_data(&"n".repeat(64), Some(&[255u8; 64][..]), Some(crate::test_utils::fixtures::account_id())))]
#[case::manage_data_unicode(crate::test_utils::fixtures::manage_data("grüße 👋", Some("wörld".as_bytes()), None))]
#[case::account_merge(crate::test_utils::fixtures::account_merge(None))]
#[case::account_merge_with_source(crate::test_utils::fixtures::account_merge(Some(crate::test_utils::fixtures::random_account_id())))]
#[case::inflation(crate::operation::Operation::inflation(None))]
#[case::inflation_with_source(crate::operation::Operation::inflation(Some(crate::test_utils::fixtures::account_id())))]
#[case::bump_sequence_zero(crate::test_utils::fixtures::bump_sequence(0, None))]
#[case::bump_sequence_max(crate::test_utils::fixtures::bump_sequence(i64::MAX, Some(crate::test_utils::fixtures::random_account_id())))]
fn all_operations(#[case] operation: Operation) {}
