mod common;
mod envelope;
mod matches;
mod performance;
mod prediction;
mod team;

pub use common::*;
pub use envelope::*;
pub use matches::*;
pub use performance::*;
pub use prediction::*;
pub use team::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize a field that the backend does not type reliably.
///
/// Values of the wrong type decode as `None` instead of failing the whole record.
pub(crate) fn lenient<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], falling back to the type's default.
pub(crate) fn lenient_or_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}
