//! API data transfer objects shared by request handlers and services.
//!
//! Every entity exposes a fixed subset of its columns as its external representation,
//! request bodies are deserialized into `Create*Dto` and `Update*Dto` types where
//! presence of a key is significant.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

use serde::{Deserialize, Deserializer};

/// Deserializes a present key into `Some`, including an explicit `null` as `Some(None)`.
///
/// Combined with `#[serde(default)]` this distinguishes an absent key (`None`) from a key
/// explicitly set to `null` (`Some(None)`) for partial updates of nullable columns.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
