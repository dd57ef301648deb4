//! Composite views built from more than one fetch.
//!
//! Sub-fetch failures come back as errors (already logged by the fetcher);
//! `Ok(None)` means every fetch succeeded but the requested thing is not in
//! the data.

use crate::{
    error::Result,
    fpl::{
        compute::{combine_profile, find_element, find_player_score, upcoming_gameweek},
        http::FplClient,
        types::{Element, ElementSummaryUpcomingFixture, PlayerProfile, PlayerScore},
    },
    types::{Gameweek, PlayerId},
};


impl FplClient {
    /// A player's static attributes, scanned out of the snapshot.
    pub async fn player_bootstrap_data(&self, player_id: PlayerId) -> Result<Option<Element>> {
        let bootstrap = self.bootstrap_static().await?;
        Ok(find_element(bootstrap, player_id))
    }

    /// Static attributes joined with the player's history.
    ///
    /// Both fetches run concurrently and each runs to completion. If either
    /// fails the whole call fails (the snapshot's error wins when both do),
    /// and if the halves disagree on the player id the result is `None`.
    pub async fn combined_player_profile(
        &self,
        player_id: PlayerId,
    ) -> Result<Option<PlayerProfile>> {
        let (bootstrap, summary) =
            tokio::join!(self.bootstrap_static(), self.player_summary(player_id));
        let bootstrap = bootstrap?;
        let summary = summary?;
        Ok(combine_profile(
            player_id,
            find_element(bootstrap, player_id),
            summary,
        ))
    }

    /// The `fixtures` section of the player's summary.
    pub async fn player_upcoming_fixtures(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<ElementSummaryUpcomingFixture>> {
        Ok(self.player_summary(player_id).await?.fixtures)
    }

    /// One player's points and explanation for a gameweek.
    pub async fn gameweek_player_score(
        &self,
        gameweek: u32,
        player_id: PlayerId,
    ) -> Result<Option<PlayerScore>> {
        let scores = self.gameweek_scores(gameweek).await?;
        Ok(find_player_score(scores, player_id))
    }

    /// Gameweek of the next fixture to be played; `None` once the season is over.
    pub async fn upcoming_gameweek_number(&self) -> Result<Option<Gameweek>> {
        let fixtures = self.upcoming_fixtures().await?;
        Ok(upcoming_gameweek(&fixtures))
    }
}
