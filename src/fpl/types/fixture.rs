//! `fixtures/`: season fixtures, optionally filtered by gameweek or `future`.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::types::{PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub code: u32,
    /// Gameweek; `null` while the fixture is unscheduled.
    pub event: Option<u32>,
    pub finished: bool,
    pub finished_provisional: bool,
    pub id: u32,
    pub kickoff_time: Option<String>,
    pub minutes: u32,
    pub provisional_start_time: bool,
    pub started: Option<bool>,
    pub team_a: TeamId,
    pub team_a_score: Option<u32>,
    pub team_h: TeamId,
    pub team_h_score: Option<u32>,
    pub stats: Vec<FixtureStat>,
    pub team_h_difficulty: u32,
    pub team_a_difficulty: u32,
    pub pulse_id: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One stat line of a fixture (goals, assists, bonus...) split by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureStat {
    pub identifier: String,
    pub a: Vec<FixtureStatValue>,
    pub h: Vec<FixtureStatValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureStatValue {
    pub value: i32,
    pub element: PlayerId,
}
