#![deny(clippy::unwrap_used)]

use serde::de::IntoDeserializer;
use serde::Deserialize;
use std::time::Duration;

pub mod config;
pub mod control;
pub mod csv;
pub mod fallback;
pub mod wordpress;

pub fn cache_ttl_from_env(key: &str, default_secs: u64) -> Duration {
    let secs: Result<u64, _> = envmnt::get_parse(key);
    secs.ok()
        .filter(|v| *v > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}

/// Treats empty strings, `all` and `any` as absent query values.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    let opt = opt.as_deref().map(str::trim);
    match opt {
        None | Some("") | Some("all") | Some("any") => Ok(None),
        Some(s) => T::deserialize(s.into_deserializer()).map(Some),
    }
}

pub fn empty_string_as_none_parse<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    let opt = Option::<String>::deserialize(de)?;
    let opt = opt.as_deref().map(str::trim);
    match opt {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map_err(|err| serde::de::Error::custom(format!("{err:?}")))
            .map(Some),
    }
}
