use serde::{Deserialize, Serialize};

use super::common::text_or_number;
use super::EntityId;

/// Body of `GET /leagues/get-leagues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Vec<League>,
}

/// A league season with its participating teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    pub teams: Vec<Team>,
}

/// A team row in the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    pub points: u32,
}
