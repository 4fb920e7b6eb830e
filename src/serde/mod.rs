// SPDX-License-Identifier: AGPL-3.0-or-later

//! Commonly used functions for serialization and deserialization of values.
mod hex_str;

pub use hex_str::{deserialize_hex, serialize_hex};
