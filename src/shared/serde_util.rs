//! Custom serde helpers for backend wire formats.

/// Deserializes an explicit JSON `null` into `T::default()`.
///
/// The backend sends `"properties": null` for profiles and events that never
/// had custom properties, rather than omitting the member.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
