pub mod blog;
pub mod card;
pub mod market;
pub mod price;

pub use blog::*;
pub use card::*;
pub use market::*;
pub use price::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a JSON `null` as the type's default value.
///
/// The upstream API emits `null` for aggregates it could not compute
/// (no sales in the window), which the dashboards treat as zero.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
