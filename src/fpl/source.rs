//! Read-only view of the upstream API used by the league builders and reports.

use async_trait::async_trait;

use crate::{
    cli::types::{Gameweek, LeagueId, ManagerId, PlayerId},
    fpl::types::{FixtureRecord, GameweekPicks, ManagerHistoryEntry, PlayerElement, StandingEntry},
    Result,
};

/// Every read the reports need, keyed by numeric identifiers.
///
/// Implementations are treated as pure reads: asking twice for the same key
/// within a run must give the same answer.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All player elements from `bootstrap-static/`.
    async fn get_bootstrap(&self) -> Result<Vec<PlayerElement>>;

    /// Standings rows of a classic league.
    async fn get_league_standings(&self, league_id: LeagueId) -> Result<Vec<StandingEntry>>;

    /// Per-gameweek season history of one manager.
    async fn get_manager_history(&self, manager: ManagerId) -> Result<Vec<ManagerHistoryEntry>>;

    /// Squad picks of one manager for one gameweek.
    async fn get_manager_picks(&self, manager: ManagerId, gw: Gameweek) -> Result<GameweekPicks>;

    /// Per-fixture season history of one player, ordered by round.
    async fn get_player_history(&self, player: PlayerId) -> Result<Vec<FixtureRecord>>;
}
