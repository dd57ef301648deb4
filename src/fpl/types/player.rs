//! `element-summary/{id}/`: a player's history and remaining fixtures, and the
//! profile view that joins it with the snapshot.

use serde::{Deserialize, Serialize};

use super::{Element, Extra};
use crate::types::{PlayerId, TeamId};

/// A player's detailed information, divided into three sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub fixtures: Vec<ElementSummaryUpcomingFixture>,
    pub history: Vec<ElementSummaryFixture>,
    pub history_past: Vec<ElementSummarySeason>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One of the player's remaining fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSummaryUpcomingFixture {
    pub id: u32,
    pub code: u32,
    pub team_h: TeamId,
    pub team_h_score: Option<u32>,
    pub team_a: TeamId,
    pub team_a_score: Option<u32>,
    pub event: Option<u32>,
    pub finished: bool,
    pub minutes: u32,
    pub provisional_start_time: bool,
    pub kickoff_time: Option<String>,
    pub event_name: Option<String>,
    pub is_home: bool,
    pub difficulty: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Match stats of a fixture the player has already played in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSummaryFixture {
    pub element: PlayerId,
    pub fixture: u32,
    pub opponent_team: TeamId,
    pub total_points: i32,
    pub was_home: bool,
    pub kickoff_time: String,
    pub team_h_score: Option<u32>,
    pub team_a_score: Option<u32>,
    pub round: u32,
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
    pub value: u32,
    pub transfers_balance: i64,
    pub selected: u64,
    pub transfers_in: u64,
    pub transfers_out: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Totals for one of the player's previous seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSummarySeason {
    pub season_name: String,
    pub element_code: u32,
    pub start_cost: u32,
    pub end_cost: u32,
    pub total_points: i32,
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
    #[serde(flatten)]
    pub extra: Extra,
}

/// Static attributes joined with the player's summary.
///
/// Only constructed through [`PlayerProfile::join`], which refuses to pair
/// halves that belong to different players. Serializes as one flat object,
/// so `total_points` (from the snapshot) and `history` (from the summary)
/// sit side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    #[serde(flatten)]
    element: Element,
    #[serde(flatten)]
    summary: PlayerSummary,
}

impl PlayerProfile {
    /// Pair the two halves if they describe `id`.
    ///
    /// The snapshot half must carry `id`, and every history row of the
    /// summary must reference it too (the summary has no top-level id).
    pub fn join(id: PlayerId, element: Element, summary: PlayerSummary) -> Option<Self> {
        if element.id != id {
            return None;
        }
        if summary.history.iter().any(|row| row.element != id) {
            return None;
        }
        Some(Self { element, summary })
    }

    pub fn id(&self) -> PlayerId {
        self.element.id
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn summary(&self) -> &PlayerSummary {
        &self.summary
    }

    pub fn into_parts(self) -> (Element, PlayerSummary) {
        (self.element, self.summary)
    }
}
