//! Serde adapter for the metric `window` field, which the API encodes as a
//! Go duration string (`"30s"`, `"1m30s"`).

use std::time::Duration;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::Deserialize as _;

pub(crate) fn serialize<S>(window: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}s", window.as_secs_f64()))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let nanos = go_parse_duration::parse_duration(&text)
        .map_err(|_| D::Error::custom(format!("invalid duration {text:?}")))?;
    Ok(Duration::from_nanos(nanos.max(0) as u64))
}
