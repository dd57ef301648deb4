//! Strongly typed identifiers shared by the fetcher and the aggregates.

pub mod ids;

pub use ids::{Gameweek, LeagueId, ManagerId, PlayerId, TeamId, FIRST_GAMEWEEK, LAST_GAMEWEEK};
