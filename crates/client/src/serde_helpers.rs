//! Serde helpers for lenient envelope decoding.
//!
//! Invariants / assumptions:
//! - The API may send `null` where a list, map or string would otherwise be
//!   empty; those decode to the type's default instead of failing.
//! - Type mismatches (e.g. a number where a list is expected) still fail.

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping an explicit JSON `null` to `T::default()`.
///
/// Combine with `#[serde(default)]` so an absent field behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a field that is present, keeping an explicit `null` as `Some(null)`.
///
/// Combine with `#[serde(default)]` so only an absent field becomes `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
