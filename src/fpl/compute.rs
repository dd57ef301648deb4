//! Pure joins over already-fetched payloads.
//!
//! Given the same upstream responses these always produce the same result;
//! all I/O lives in [`crate::fpl::aggregate`].

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    fpl::types::{Bootstrap, Element, Fixture, GameweekScores, PlayerProfile, PlayerScore, PlayerSummary},
    types::{Gameweek, PlayerId},
};

#[cfg(test)]
mod tests;

/// Take a player's static attributes out of the snapshot.
pub fn find_element(bootstrap: Bootstrap, id: PlayerId) -> Option<Element> {
    bootstrap.elements.into_iter().find(|e| e.id == id)
}

/// Join both halves of a profile, or nothing. Never a half-filled profile.
pub fn combine_profile(
    id: PlayerId,
    element: Option<Element>,
    summary: PlayerSummary,
) -> Option<PlayerProfile> {
    let Some(element) = element else {
        warn!(player = %id, "player not present in snapshot");
        return None;
    };
    let profile = PlayerProfile::join(id, element, summary);
    if profile.is_none() {
        warn!(player = %id, "snapshot and summary disagree on player id");
    }
    profile
}

/// Linear scan of the score index for `id`.
pub fn find_player_score(scores: GameweekScores, id: PlayerId) -> Option<PlayerScore> {
    scores.elements.into_iter().find(|score| score.id == id)
}

fn kickoff(fixture: &Fixture) -> Option<DateTime<Utc>> {
    let raw = fixture.kickoff_time.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Gameweek of the chronologically-first scheduled fixture.
///
/// The API is expected to return future fixtures sorted by kickoff. That is
/// checked rather than trusted: the earliest parsable kickoff wins, and
/// upstream order is only the fallback when no kickoff time parses.
/// Fixtures without a gameweek (postponed, unscheduled) are skipped.
pub fn upcoming_gameweek(fixtures: &[Fixture]) -> Option<Gameweek> {
    let scheduled = || fixtures.iter().filter(|f| f.event.is_some());

    let earliest = scheduled()
        .filter_map(|f| kickoff(f).map(|t| (t, f)))
        .min_by_key(|(t, _)| *t)
        .map(|(_, f)| f);
    let first = scheduled().next();

    if let (Some(earliest), Some(first)) = (earliest, first) {
        if earliest.id != first.id {
            warn!(
                first = first.id,
                earliest = earliest.id,
                "future fixtures were not in kickoff order"
            );
        }
    }

    let event = earliest.or(first)?.event?;
    match Gameweek::new(event) {
        Ok(gameweek) => Some(gameweek),
        Err(e) => {
            warn!(error = %e, "upstream fixture carries an invalid gameweek");
            None
        }
    }
}
