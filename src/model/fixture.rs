use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;
use tracing::warn;

use super::EntityId;

/// A single fixture as returned by `GET /matches/get-matches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: EntityId,
    #[serde(deserialize_with = "team_name")]
    pub home: String,
    #[serde(deserialize_with = "team_name")]
    pub away: String,
    #[serde(default)]
    pub score_team_one: Option<u32>,
    #[serde(default)]
    pub score_team_two: Option<u32>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(deserialize_with = "kickoff")]
    pub date_time: DateTime<Utc>,
}

/// Lifecycle state of a fixture.
///
/// Codes the client does not know about, as well as a null or absent status,
/// deserialize to [`MatchStatus::Unknown`] instead of failing the whole payload.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Completed,
    Live,
    Pause,
    Postponed,
    Scheduled,
    #[default]
    #[strum(disabled)]
    Unknown,
}

impl MatchStatus {
    /// Parse a raw status code, falling back to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            warn!(status = code, "unrecognized match status");
            Self::Unknown
        })
    }
}

impl<'de> Deserialize<'de> for MatchStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(code)) => Self::from_code(&code),
            Some(serde_json::Value::Null) | None => {
                warn!("match without status");
                Self::Unknown
            }
            Some(other) => {
                warn!(status = %other, "unrecognized match status");
                Self::Unknown
            }
        })
    }
}

const LOCAL_KICKOFF_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// RFC 3339 timestamps, or offset-less ones read as local time.
fn kickoff<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = raw.parse::<DateTime<Utc>>() {
        return Ok(ts);
    }
    NaiveDateTime::parse_from_str(&raw, LOCAL_KICKOFF_FORMAT)
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|ts| ts.with_timezone(&Utc))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid kickoff time {raw:?}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TeamName {
    Plain(String),
    Named { name: String },
}

fn team_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TeamName::deserialize(deserializer)? {
        TeamName::Plain(name) | TeamName::Named { name } => name,
    })
}
