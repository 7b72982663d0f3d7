//! Serde helpers for Oracle dictionary exports
//!
//! Dictionary queries report flags as `'Y'`/`'N'` and missing comments as empty
//! strings or nulls. These helpers normalize both at deserialization time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};

/// Deserialize a primary-key flag from a JSON bool or a `"Y"`/`"N"` string.
///
/// Any string other than `Y` (case-insensitive) is `false`, as is `null`.
#[cfg(feature = "serde")]
pub fn primary_key_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Str(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Str(s)) => s.trim().eq_ignore_ascii_case("y"),
        None => false,
    })
}

/// Deserialize an optional string, mapping `""` to `None`.
#[cfg(feature = "serde")]
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}
