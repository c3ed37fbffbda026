use serde::{Deserialize, Deserializer, Serialize};

use crate::format::format_streak;

/// Sentinel for a numeric or time field the backend could not compute.
pub const NULL_SENTINEL: &str = "NULL";
/// Sentinel for a value that is not available at all.
pub const NOT_AVAILABLE: &str = "N/A";

const DATA_SEPARATOR: &str = " - ";
const ONLINE_MARKER: &str = "Online";

/// Strings the backend has used over time to say "no streak data".
const UNAVAILABLE_STREAKS: [&str; 4] = [
    NOT_AVAILABLE,
    "N/A - N/A",
    "CSV data is not available.",
    "Streak data is not available.",
];

/// Status payload exactly as the endpoint sends it. Every key is optional and
/// numeric values are accepted in place of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    #[serde(default, deserialize_with = "lenient_text")]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sysstatus: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub streak: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub occupied_percentage: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unoccupied_percentage: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub optimal_time: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SystemStatus {
    Online,
    Offline,
}

impl SystemStatus {
    /// Anything mentioning `Online` counts as online, including decorated
    /// values such as `OnlineButDegraded`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains(ONLINE_MARKER) {
            SystemStatus::Online
        } else {
            SystemStatus::Offline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Online => "Online",
            SystemStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "kind", content = "raw")]
pub enum Streak {
    /// One of the "no data" sentinels.
    Unavailable(String),
    /// An event string or the no-streak literal.
    Recorded(String),
}

impl Streak {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || UNAVAILABLE_STREAKS.contains(&trimmed) {
            Streak::Unavailable(raw.to_string())
        } else {
            Streak::Recorded(raw.to_string())
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Streak::Unavailable(raw) | Streak::Recorded(raw) => raw,
        }
    }

    /// Human-readable streak: `N/A` for every unavailable sentinel, the
    /// formatted event otherwise.
    pub fn describe(&self) -> String {
        match self {
            Streak::Unavailable(_) => NOT_AVAILABLE.to_string(),
            Streak::Recorded(event) => format_streak(event),
        }
    }
}

/// One poll cycle's status, with defaults filled in for absent keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub data: String,
    pub occupied_status: String,
    pub space_status: String,
    pub streak: Streak,
    pub system_status: SystemStatus,
    pub occupied_percentage: String,
    pub unoccupied_percentage: String,
    pub optimal_time: String,
}

impl From<RawStatus> for StatusSnapshot {
    fn from(raw: RawStatus) -> Self {
        let data = raw.data.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let (occupied_status, space_status) = split_data(&data);
        let system_status = raw
            .sysstatus
            .as_deref()
            .map(SystemStatus::from_raw)
            .unwrap_or(SystemStatus::Offline);

        Self {
            occupied_status,
            space_status,
            streak: Streak::from_raw(raw.streak.as_deref().unwrap_or(NOT_AVAILABLE)),
            system_status,
            occupied_percentage: raw
                .occupied_percentage
                .unwrap_or_else(|| NULL_SENTINEL.to_string()),
            unoccupied_percentage: raw
                .unoccupied_percentage
                .unwrap_or_else(|| NULL_SENTINEL.to_string()),
            optimal_time: raw.optimal_time.unwrap_or_else(|| NULL_SENTINEL.to_string()),
            data,
        }
    }
}

/// `"{occupied} - {space}"` into its two halves. Without the separator the
/// whole text stays in the first half and the second becomes `N/A`.
fn split_data(data: &str) -> (String, String) {
    let mut halves = data.split(DATA_SEPARATOR);
    let occupied = halves.next().unwrap_or_default().to_string();
    let space = halves
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    (occupied, space)
}

pub fn is_sentinel(value: &str) -> bool {
    matches!(value.trim(), NULL_SENTINEL | NOT_AVAILABLE)
}
