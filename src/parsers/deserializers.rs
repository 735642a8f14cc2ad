use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts either a plain `YYYY-MM-DD` date or an RFC3339 timestamp (date part is kept)
pub fn deserialize_archive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => {
            if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                return Ok(date);
            }
            s.parse::<DateTime<Utc>>()
                .map(|ts| ts.date_naive())
                .map_err(|e| Error::custom(format!("invalid archive date '{}': {}", s, e)))
        }
        _ => Err(Error::custom("archive date must be a string")),
    }
}

/// Timeline times are wall-clock `HH:MM`; reject anything else early
pub fn deserialize_clock_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if NaiveTime::parse_from_str(&s, "%H:%M").is_err() {
        return Err(Error::custom(format!("invalid timeline time '{}', expected HH:MM", s)));
    }

    Ok(s)
}
