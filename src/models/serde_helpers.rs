//! Serde helpers for request payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be `null`, treating `null` like an absent
/// field: the type's default value. Pair with `#[serde(default)]`.
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
