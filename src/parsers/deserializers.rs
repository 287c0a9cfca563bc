use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse an RFC3339 timestamp into milliseconds since the Unix epoch
pub fn parse_rfc3339_millis(s: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.timestamp_millis())
}

/// Integer milliseconds, if they name an instant chrono can represent
fn checked_millis(millis: i64) -> Option<i64> {
    DateTime::from_timestamp_millis(millis).map(|_| millis)
}

/// Lenient timestamp deserializer returning milliseconds since the Unix epoch
///
/// Accepts RFC3339 strings and integer milliseconds within chrono's range. Anything else
/// (a malformed string, an out-of-range number, `null`, a float, an object) falls back
/// to the current time instead of failing, so a bad timestamp never costs the user a
/// prompt.
pub fn deserialize_lenient_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let millis = match value {
        Value::String(s) => parse_rfc3339_millis(&s),
        Value::Number(n) => n.as_i64().and_then(checked_millis),
        _ => None,
    };
    Ok(millis.unwrap_or_else(now_millis))
}
