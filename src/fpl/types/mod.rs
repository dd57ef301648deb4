//! Shape contracts for every payload the FPL API returns.
//!
//! The upstream API is the source of truth: every struct keeps the fields it
//! does not model in a flattened `extra` map, so decoding a payload and
//! encoding it again reproduces the original document field-for-field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod bootstrap;
pub mod fixture;
pub mod league;
pub mod live;
pub mod manager;
pub mod player;

#[cfg(test)]
mod tests;

pub use bootstrap::{
    Bootstrap, Element, ElementStat, ElementType, Event, EventChipPlay, GameSettings, Phase, Team,
    TopElementInfo,
};
pub use fixture::{Fixture, FixtureStat, FixtureStatValue};
pub use league::{ClassicLeague, ClassicLeagueStandings, Page, StandingEntry};
pub use live::{ExplainFixture, ExplainStat, GameweekScores, LiveStats, PlayerScore};
pub use manager::{
    Manager, ManagerChip, ManagerEventHistory, ManagerHistory, ManagerLeague, ManagerLeagues,
    ManagerSeasonHistory, ManagerTeam, Pick,
};
pub use player::{
    ElementSummaryFixture, ElementSummarySeason, ElementSummaryUpcomingFixture, PlayerProfile,
    PlayerSummary,
};

/// Fields the catalog does not model explicitly.
pub type Extra = Map<String, Value>;

/// Chips a manager can play in a gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChipName {
    #[serde(rename = "bboost")]
    BenchBoost,
    #[serde(rename = "3xc")]
    TripleCaptain,
    #[serde(rename = "freehit")]
    FreeHit,
    #[serde(rename = "wildcard")]
    Wildcard,
    #[serde(untagged)]
    Other(String),
}

/// Availability flag on a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementStatus {
    #[serde(rename = "a")]
    Available,
    #[serde(rename = "u")]
    Unavailable,
    #[serde(rename = "i")]
    Injured,
    #[serde(rename = "s")]
    Suspended,
    #[serde(rename = "n")]
    NotInSquad,
    #[serde(rename = "d")]
    Doubtful,
    #[serde(untagged)]
    Other(String),
}

/// `x` for leagues created by managers, `s` for system leagues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueType {
    #[serde(rename = "x")]
    Private,
    #[serde(rename = "s")]
    System,
    #[serde(untagged)]
    Other(String),
}
