//! Serde adapter for `YYYY-MM-DD HH:MM:SS` wall-clock timestamps.
//!
//! Use with `#[serde(with = "traffic_flow_forecast_models::timestamp")]`.

use chrono::NaiveDateTime;
use serde::{Deserialize as _, Deserializer, Serializer};

/// The wire format of dashboard timestamps.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `time` with [`FORMAT`].
#[must_use]
pub fn format(time: &NaiveDateTime) -> String {
    time.format(FORMAT).to_string()
}

/// Serializes `time` as a [`FORMAT`] string.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(time))
}

/// Parses a [`FORMAT`] string.
///
/// # Errors
///
/// Returns an error if the input is not a string in [`FORMAT`].
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
}
