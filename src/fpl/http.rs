//! HTTP client for the public Fantasy Premier League API

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{Gameweek, LeagueId, ManagerId, PlayerId},
    fpl::{
        source::DataSource,
        types::{
            Bootstrap, ElementSummary, FixtureRecord, GameweekPicks, LeagueStandings,
            ManagerHistory, ManagerHistoryEntry, PlayerElement, StandingEntry,
        },
    },
    Result,
};


/// Base path for the FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Overrides `FPL_BASE_URL` when set.
pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed `DataSource`. Every read is a single GET bounded by the
/// client timeout; nothing is retried.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("fpl-stats/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for `FPL_BASE_URL` from the environment, or the public API.
    pub fn from_env(timeout: Duration) -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| FPL_BASE_URL.to_string());
        Self::new(base_url, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let body = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DataSource for FplClient {
    async fn get_bootstrap(&self) -> Result<Vec<PlayerElement>> {
        let res: Bootstrap = self.get_json("bootstrap-static/").await?;
        Ok(res.elements)
    }

    async fn get_league_standings(&self, league_id: LeagueId) -> Result<Vec<StandingEntry>> {
        let endpoint = format!("leagues-classic/{}/standings/", league_id);
        let res: LeagueStandings = self.get_json(&endpoint).await?;
        Ok(res.standings.results)
    }

    async fn get_manager_history(&self, manager: ManagerId) -> Result<Vec<ManagerHistoryEntry>> {
        let endpoint = format!("entry/{}/history/", manager);
        let res: ManagerHistory = self.get_json(&endpoint).await?;
        Ok(res.current)
    }

    async fn get_manager_picks(&self, manager: ManagerId, gw: Gameweek) -> Result<GameweekPicks> {
        let endpoint = format!("entry/{}/event/{}/picks/", manager, gw);
        self.get_json(&endpoint).await
    }

    async fn get_player_history(&self, player: PlayerId) -> Result<Vec<FixtureRecord>> {
        let endpoint = format!("element-summary/{}/", player);
        let res: ElementSummary = self.get_json(&endpoint).await?;
        Ok(res.history)
    }
}
