//! Forgiving field deserializers for hand-edited documents and loosely typed API payloads.
//!
//! A wrong-typed value degrades to "absent" for that one field instead of
//! failing the whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Loose::Number(n) => Some(*n),
            Loose::Text(t) => t.trim().parse::<f64>().ok(),
            Loose::Other(_) => None,
        }
        .filter(|n| n.is_finite())
    }
}

/// `1.5`, `"1.5"` -> `Some(1.5)`. `null`, `true`, `"abc"` -> `None`.
pub(crate) fn flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|v| v.as_f64()))
}

/// Like `flexible_f64`, but anything unusable reads as `0`.
pub(crate) fn flexible_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_f64(deserializer)?.unwrap_or(0.0))
}

/// Whole numbers only: `5`, `5.0`, `"5"` -> `Some(5)`. `2.5`, `"five"`, `null` -> `None`.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_f64(deserializer)?
        .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
        .map(|n| n as i64))
}

/// `null` reads as the type's default. Other type mismatches are still errors.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
