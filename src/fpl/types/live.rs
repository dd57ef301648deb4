//! `event/{gw}/live/`: points and their explanation for every player in a
//! gameweek.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::types::PlayerId;

/// Score index of one gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameweekScores {
    pub elements: Vec<PlayerScore>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl GameweekScores {
    /// First entry whose id matches. The list is small and fetched fresh, so
    /// no index is kept.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerScore> {
        self.elements.iter().find(|score| score.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub id: PlayerId,
    pub stats: LiveStats,
    pub explain: Vec<ExplainFixture>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStats {
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub penalties_missed: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: u32,
    pub bps: i32,
    pub influence: String,
    pub creativity: String,
    pub threat: String,
    pub ict_index: String,
    pub total_points: i32,
    pub in_dreamteam: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

/// How the points of one fixture were earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainFixture {
    pub fixture: u32,
    pub stats: Vec<ExplainStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainStat {
    pub identifier: String,
    pub points: i32,
    pub value: i32,
    #[serde(flatten)]
    pub extra: Extra,
}
