//! Serde helpers for provider payloads.

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; providers also send
/// `null` for leaves they could not resolve.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
