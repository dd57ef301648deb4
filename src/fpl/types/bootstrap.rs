//! `bootstrap-static/`: the global season snapshot.

use serde::{Deserialize, Serialize};

use super::{ChipName, ElementStatus, Extra};
use crate::types::{PlayerId, TeamId};

/// Root of the snapshot: every player, team and gameweek of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap {
    pub events: Vec<Event>,
    pub game_settings: GameSettings,
    pub phases: Vec<Phase>,
    pub teams: Vec<Team>,
    pub total_players: u64,
    pub elements: Vec<Element>,
    pub element_stats: Vec<ElementStat>,
    pub element_types: Vec<ElementType>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Bootstrap {
    /// Linear scan of the player collection.
    pub fn element(&self, id: PlayerId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// The gameweek flagged `is_next` by the API, if any.
    pub fn next_event(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.is_next)
    }

    pub fn current_event(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.is_current)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventChipPlay {
    pub chip_name: ChipName,
    pub num_played: u64,
}

/// Highest scoring player of a gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopElementInfo {
    pub id: PlayerId,
    pub points: i32,
}

/// Summary of one gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub deadline_time: String,
    pub average_entry_score: i32,
    pub finished: bool,
    pub data_checked: bool,
    pub highest_scoring_entry: Option<u64>,
    pub deadline_time_epoch: i64,
    pub deadline_time_game_offset: i64,
    pub highest_score: Option<i32>,
    pub is_previous: bool,
    pub is_current: bool,
    pub is_next: bool,
    pub cup_leagues_created: bool,
    pub h2h_ko_matches_created: bool,
    pub chip_plays: Vec<EventChipPlay>,
    pub most_selected: Option<PlayerId>,
    pub most_transferred_in: Option<PlayerId>,
    pub top_element: Option<PlayerId>,
    pub top_element_info: Option<TopElementInfo>,
    pub transfers_made: u64,
    pub most_captained: Option<PlayerId>,
    pub most_vice_captained: Option<PlayerId>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Game rules. Only the commonly used knobs are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub league_join_private_max: u32,
    pub league_join_public_max: u32,
    pub league_max_size_public_classic: u32,
    pub league_max_size_public_h2h: u32,
    pub league_max_size_private_h2h: u32,
    pub squad_squadplay: u32,
    pub squad_squadsize: u32,
    pub squad_team_limit: u32,
    pub squad_total_spend: u32,
    pub transfers_cap: u32,
    pub transfers_sell_on_fee: f64,
    pub timezone: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: u32,
    pub name: String,
    pub start_event: u32,
    pub stop_event: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A Premier League club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub code: u32,
    pub draw: u32,
    pub form: Option<String>,
    pub id: TeamId,
    pub loss: u32,
    pub name: String,
    pub played: u32,
    pub points: i32,
    pub position: u32,
    pub short_name: String,
    pub strength: u32,
    pub team_division: Option<u32>,
    pub unavailable: bool,
    pub win: u32,
    pub strength_overall_home: u32,
    pub strength_overall_away: u32,
    pub strength_attack_home: u32,
    pub strength_attack_away: u32,
    pub strength_defence_home: u32,
    pub strength_defence_away: u32,
    pub pulse_id: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Static season attributes of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub chance_of_playing_next_round: Option<u32>,
    pub chance_of_playing_this_round: Option<u32>,
    pub code: u32,
    pub cost_change_event: i32,
    pub cost_change_event_fall: i32,
    pub cost_change_start: i32,
    pub cost_change_start_fall: i32,
    pub dreamteam_count: u32,
    pub element_type: u32,
    pub ep_next: Option<String>,
    pub ep_this: Option<String>,
    pub event_points: i32,
    pub first_name: String,
    pub form: String,
    pub id: PlayerId,
    pub in_dreamteam: bool,
    pub news: String,
    pub news_added: Option<String>,
    pub now_cost: u32,
    pub photo: String,
    pub points_per_game: String,
    pub second_name: String,
    pub selected_by_percent: String,
    pub special: bool,
    pub squad_number: Option<u32>,
    pub status: ElementStatus,
    pub team: TeamId,
    pub team_code: u32,
    pub total_points: i32,
    pub transfers_in: u64,
    pub transfers_in_event: u64,
    pub transfers_out: u64,
    pub transfers_out_event: u64,
    pub value_form: String,
    pub value_season: String,
    pub web_name: String,
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
    pub influence_rank: Option<u32>,
    pub influence_rank_type: Option<u32>,
    pub creativity_rank: Option<u32>,
    pub creativity_rank_type: Option<u32>,
    pub threat_rank: Option<u32>,
    pub threat_rank_type: Option<u32>,
    pub ict_index_rank: Option<u32>,
    pub ict_index_rank_type: Option<u32>,
    pub corners_and_indirect_freekicks_order: Option<u32>,
    pub corners_and_indirect_freekicks_text: String,
    pub direct_freekicks_order: Option<u32>,
    pub direct_freekicks_text: String,
    pub penalties_order: Option<u32>,
    pub penalties_text: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Element {
    /// Price in millions, e.g. `now_cost == 145` is 14.5.
    pub fn price(&self) -> f64 {
        f64::from(self.now_cost) / 10.0
    }
}

/// Player position (goalkeeper, defender, midfielder, forward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementType {
    pub id: u32,
    pub plural_name: String,
    pub plural_name_short: String,
    pub singular_name: String,
    pub singular_name_short: String,
    pub squad_select: u32,
    pub squad_min_play: u32,
    pub squad_max_play: u32,
    pub ui_shirt_specific: bool,
    pub sub_positions_locked: Vec<u32>,
    pub element_count: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStat {
    pub label: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}
