//! `HH:MM` wall-clock (de)serialization for [`NaiveTime`] fields.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%H:%M";

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
}
