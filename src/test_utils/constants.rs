// SPDX-License-Identifier: AGPL-3.0-or-later

//! Constants used across tests.

/// Hex encoded Ed25519 public key of a test account.
pub const ACCOUNT_ID: &str = "7cf4f58a2d89e93313f2de99604a814ecea9800cf217b140e9c3a7ba59a5d982";

/// Same test account in its checksummed base32 form.
pub const ACCOUNT_ID_STRKEY: &str = "GB6PJ5MKFWE6SMYT6LPJSYCKQFHM5KMABTZBPMKA5HB2POSZUXMYFC4Z";

/// 32 bytes of the right length which do not decompress to a point on the curve.
pub const INVALID_CURVE_POINT: &str =
    "0200000000000000000000000000000000000000000000000000000000000000";
