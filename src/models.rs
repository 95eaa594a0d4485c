//! Frontend Models
//!
//! Data structures matching the remote record endpoint.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Record returned by the endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Record {
    /// Photo reference, treating an empty string as no photo
    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.is_empty())
    }
}

/// What the page shows for the current identifier
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No identifier in the URL; nothing is fetched
    NoIdentifier,
    Loading,
    Error(String),
    Loaded(Record),
}

/// Accepts epoch milliseconds (number or numeric string) and ISO-8601 text.
/// Anything unreadable becomes `None` rather than failing the whole record.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|ms| ms as i64))
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Some(Value::String(text)) => parse_timestamp_text(&text),
        _ => None,
    })
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ms) = text.parse::<i64>() {
        return Utc.timestamp_millis_opt(ms).single();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}
