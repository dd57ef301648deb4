//! Resource fetcher: one HTTP round-trip per call, decoded into the catalog.
//!
//! Every failure is logged here, at the boundary where it happens, and then
//! returned as a tagged [`FplError`]. Nothing is retried and no timeout is
//! set beyond the transport's own defaults.

use reqwest::{header::COOKIE, Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    auth::Session,
    config::{FplConfig, FPL_BASE_URL},
    error::{FplError, Result},
    fpl::types::{
        Bootstrap, ClassicLeagueStandings, Fixture, GameweekScores, Manager, ManagerHistory,
        ManagerTeam, PlayerSummary,
    },
    types::{Gameweek, LeagueId, ManagerId, PlayerId},
};


/// Query parameters of one request.
pub type Query<'a> = &'a [(&'a str, String)];

/// Typed client for the public FPL REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: Url,
}

impl FplClient {
    /// Client for the production API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FPL_BASE_URL)
    }

    pub fn from_config(config: &FplConfig) -> Result<Self> {
        Self::with_base_url(&config.base_url)
    }

    /// Client against any base URL (e.g. a mock server). A missing trailing
    /// slash is added so relative paths join under it.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| FplError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = Client::builder()
            .user_agent(concat!("fpl-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FplError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Raw JSON of `path` under the base URL.
    pub async fn fetch(&self, path: &str, query: Query<'_>) -> Result<Value> {
        self.get_json(path, query, None).await
    }

    /// GET `path`, decode the body as `T`, log any failure.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
        session: Option<&Session>,
    ) -> Result<T> {
        self.try_get_json(path, query, session)
            .await
            .inspect(|_| debug!(path, "fetched"))
            .inspect_err(|e| warn!(path, kind = ?e.kind(), error = %e, "request failed"))
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
        session: Option<&Session>,
    ) -> Result<T> {
        let mut request = self.http.get(self.url(path)?).query(query);
        if let Some(session) = session {
            request = request.header(COOKIE, session.cookie_header()?);
        }

        let body = request.send().await?.error_for_status()?.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FplError::decode(path, e))
    }

    /// Global season snapshot: players, teams, gameweeks and game settings.
    pub async fn bootstrap_static(&self) -> Result<Bootstrap> {
        self.get_json("bootstrap-static/", &[], None).await
    }

    /// A player's history, past seasons and remaining fixtures.
    pub async fn player_summary(&self, player_id: PlayerId) -> Result<PlayerSummary> {
        self.get_json(&format!("element-summary/{player_id}/"), &[], None)
            .await
    }

    pub async fn all_fixtures(&self) -> Result<Vec<Fixture>> {
        self.get_json("fixtures/", &[], None).await
    }

    /// Fixtures of one gameweek. The number is validated before any request.
    pub async fn gameweek_fixtures(&self, gameweek: u32) -> Result<Vec<Fixture>> {
        let gameweek = Gameweek::new(gameweek)?;
        self.get_json("fixtures/", &[("event", gameweek.to_string())], None)
            .await
    }

    /// Fixtures that have not been played yet, in the order the API returns them.
    pub async fn upcoming_fixtures(&self) -> Result<Vec<Fixture>> {
        self.get_json("fixtures/", &[("future", "1".to_string())], None)
            .await
    }

    /// Live points of every player in a gameweek. Validated before any request.
    pub async fn gameweek_scores(&self, gameweek: u32) -> Result<GameweekScores> {
        let gameweek = Gameweek::new(gameweek)?;
        self.get_json(&format!("event/{gameweek}/live/"), &[], None)
            .await
    }

    pub async fn manager(&self, manager_id: ManagerId) -> Result<Manager> {
        self.get_json(&format!("entry/{manager_id}/"), &[], None)
            .await
    }

    pub async fn manager_history(&self, manager_id: ManagerId) -> Result<ManagerHistory> {
        self.get_json(&format!("entry/{manager_id}/history/"), &[], None)
            .await
    }

    /// One page of a classic league table; `None` asks for the first page.
    pub async fn classic_league_standings(
        &self,
        league_id: LeagueId,
        page: Option<u32>,
    ) -> Result<ClassicLeagueStandings> {
        let query: Vec<(&str, String)> = page
            .map(|p| vec![("page_standings", p.to_string())])
            .unwrap_or_default();
        self.get_json(&format!("leagues-classic/{league_id}/standings/"), &query, None)
            .await
    }

    /// The authenticated manager's squad. Needs the session of that manager;
    /// an expired session comes back as a transport error (403).
    pub async fn manager_team(&self, session: &Session, manager_id: ManagerId) -> Result<ManagerTeam> {
        self.get_json(&format!("my-team/{manager_id}/"), &[], Some(session))
            .await
    }
}
