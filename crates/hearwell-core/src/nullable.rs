//! Session blobs written by the form layer use `null` for "never filled in"
//! on lists and nested records as well as on scalars.

use serde::{Deserialize, Deserializer};

/// Read `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same way.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
