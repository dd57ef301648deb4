//! `entry/{id}/`, `entry/{id}/history/` and the private `my-team/{id}/`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ChipName, Extra, LeagueType};
use crate::types::{LeagueId, ManagerId, PlayerId, TeamId};

/// A manager's entry (their fantasy team) and the leagues it plays in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub id: ManagerId,
    pub joined_time: String,
    pub started_event: u32,
    pub favourite_team: Option<TeamId>,
    pub player_first_name: String,
    pub player_last_name: String,
    pub player_region_id: u32,
    pub player_region_name: String,
    pub player_region_iso_code_short: String,
    pub player_region_iso_code_long: String,
    pub summary_overall_points: Option<i32>,
    pub summary_overall_rank: Option<u64>,
    pub summary_event_points: Option<i32>,
    pub summary_event_rank: Option<u64>,
    pub current_event: Option<u32>,
    pub leagues: ManagerLeagues,
    pub name: String,
    pub name_change_blocked: bool,
    pub kit: Option<String>,
    pub last_deadline_bank: Option<i32>,
    pub last_deadline_value: Option<i32>,
    pub last_deadline_total_transfers: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerLeagues {
    pub classic: Vec<ManagerLeague>,
    pub h2h: Vec<ManagerLeague>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A league as seen from one member's entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerLeague {
    pub id: LeagueId,
    pub name: String,
    pub created: String,
    pub closed: bool,
    pub league_type: LeagueType,
    pub scoring: String,
    pub admin_entry: Option<u64>,
    pub start_event: u32,
    pub entry_can_leave: bool,
    pub entry_can_admin: bool,
    pub entry_can_invite: bool,
    pub entry_rank: Option<u64>,
    pub entry_last_rank: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Season-to-date and past-season history of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerHistory {
    pub current: Vec<ManagerEventHistory>,
    pub past: Vec<ManagerSeasonHistory>,
    pub chips: Vec<ManagerChip>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerEventHistory {
    pub event: u32,
    pub points: i32,
    pub total_points: i32,
    pub rank: Option<u64>,
    pub rank_sort: Option<u64>,
    pub overall_rank: Option<u64>,
    pub bank: i32,
    pub value: i32,
    pub event_transfers: u32,
    pub event_transfers_cost: i32,
    pub points_on_bench: i32,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSeasonHistory {
    pub season_name: String,
    pub total_points: i32,
    pub rank: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerChip {
    pub name: ChipName,
    pub time: String,
    pub event: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The authenticated manager's current squad. Requires a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerTeam {
    pub picks: Vec<Pick>,
    pub chips: Vec<Value>,
    pub transfers: Value,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub element: PlayerId,
    pub position: u32,
    pub multiplier: u32,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub selling_price: i32,
    pub purchase_price: i32,
    #[serde(flatten)]
    pub extra: Extra,
}
