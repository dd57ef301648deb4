//! `leagues-classic/{id}/standings/`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Extra, LeagueType};
use crate::types::{LeagueId, ManagerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicLeagueStandings {
    pub new_entries: Page<Value>,
    pub last_updated_data: Option<String>,
    pub league: ClassicLeague,
    pub standings: Page<StandingEntry>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One page of a paginated list, as returned in a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub has_next: bool,
    pub page: u32,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicLeague {
    pub id: LeagueId,
    pub name: String,
    pub created: String,
    pub closed: bool,
    pub max_entries: Option<u32>,
    pub league_type: LeagueType,
    pub scoring: String,
    pub admin_entry: Option<u64>,
    pub start_event: u32,
    pub code_privacy: String,
    pub has_cup: bool,
    pub cup_league: Option<u64>,
    pub rank: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A manager's line in the league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: u64,
    pub event_total: i32,
    pub player_name: String,
    pub rank: u64,
    pub last_rank: u64,
    pub rank_sort: u64,
    pub total: i32,
    pub entry: ManagerId,
    pub entry_name: String,
    #[serde(flatten)]
    pub extra: Extra,
}
