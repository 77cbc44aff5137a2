//! In-memory `DataSource` for unit tests.

use async_trait::async_trait;
use std::{collections::HashMap, io, sync::Mutex};

use crate::{
    cli::types::{Gameweek, LeagueId, ManagerId, PlayerId},
    fpl::{
        source::DataSource,
        types::{
            FixtureRecord, GameweekPicks, ManagerHistoryEntry, Pick, PicksEntryHistory,
            PlayerElement, StandingEntry,
        },
    },
    FplError, Result,
};

/// Canned upstream answers; any key that was not seeded is a read failure.
#[derive(Default)]
pub struct FakeSource {
    elements: Option<Vec<PlayerElement>>,
    standings: HashMap<LeagueId, Vec<StandingEntry>>,
    manager_history: HashMap<ManagerId, Vec<ManagerHistoryEntry>>,
    picks: HashMap<(ManagerId, Gameweek), GameweekPicks>,
    player_history: HashMap<PlayerId, Vec<FixtureRecord>>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

fn not_seeded(what: String) -> FplError {
    FplError::Io(io::Error::new(io::ErrorKind::NotFound, what))
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(mut self, elements: Vec<PlayerElement>) -> Self {
        self.elements = Some(elements);
        self
    }

    pub fn with_standings(mut self, league_id: LeagueId, rows: Vec<StandingEntry>) -> Self {
        self.standings.insert(league_id, rows);
        self
    }

    pub fn with_manager_history(
        mut self,
        manager: ManagerId,
        history: Vec<ManagerHistoryEntry>,
    ) -> Self {
        self.manager_history.insert(manager, history);
        self
    }

    /// `entry` is `(points_on_bench, event_transfers)` for the gameweek.
    pub fn with_picks(
        mut self,
        manager: ManagerId,
        gw: Gameweek,
        picks: Vec<Pick>,
        entry: (i32, i32),
    ) -> Self {
        self.picks.insert(
            (manager, gw),
            GameweekPicks {
                picks,
                entry_history: PicksEntryHistory {
                    points_on_bench: entry.0,
                    event_transfers: entry.1,
                },
            },
        );
        self
    }

    pub fn with_player_history(mut self, player: PlayerId, history: Vec<FixtureRecord>) -> Self {
        self.player_history.insert(player, history);
        self
    }

    /// Number of reads made against one endpoint.
    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, endpoint: &'static str) {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;
    }

    pub fn element(id: u64, first: &str, second: &str, element_type: u8) -> PlayerElement {
        PlayerElement {
            id: PlayerId::new(id),
            first_name: first.to_string(),
            second_name: second.to_string(),
            element_type,
        }
    }

    pub fn standing(entry: u64, player_name: &str, entry_name: &str) -> StandingEntry {
        StandingEntry {
            entry: ManagerId::new(entry),
            player_name: player_name.to_string(),
            entry_name: entry_name.to_string(),
        }
    }

    pub fn history(event: u16, points: i32, total_points: i32, value: i32) -> ManagerHistoryEntry {
        ManagerHistoryEntry {
            event: Gameweek::new(event),
            points,
            total_points,
            value,
            points_on_bench: 0,
            event_transfers: 0,
        }
    }

    pub fn pick(element: u64, multiplier: u8, is_captain: bool) -> Pick {
        Pick {
            element: PlayerId::new(element),
            multiplier,
            is_captain,
        }
    }

    pub fn fixture(round: u16, total_points: i32) -> FixtureRecord {
        Self::fixture_with_stats(round, total_points, 0, 0, 0.0, 0.0)
    }

    pub fn fixture_with_stats(
        round: u16,
        total_points: i32,
        goals_scored: i32,
        assists: i32,
        expected_goals: f64,
        expected_assists: f64,
    ) -> FixtureRecord {
        FixtureRecord {
            round: Gameweek::new(round),
            total_points,
            goals_scored,
            assists,
            expected_goals,
            expected_assists,
        }
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn get_bootstrap(&self) -> Result<Vec<PlayerElement>> {
        self.record("bootstrap");
        self.elements
            .clone()
            .ok_or_else(|| not_seeded("bootstrap".to_string()))
    }

    async fn get_league_standings(&self, league_id: LeagueId) -> Result<Vec<StandingEntry>> {
        self.record("standings");
        self.standings
            .get(&league_id)
            .cloned()
            .ok_or_else(|| not_seeded(format!("standings for league {}", league_id)))
    }

    async fn get_manager_history(&self, manager: ManagerId) -> Result<Vec<ManagerHistoryEntry>> {
        self.record("manager_history");
        self.manager_history
            .get(&manager)
            .cloned()
            .ok_or_else(|| not_seeded(format!("history for manager {}", manager)))
    }

    async fn get_manager_picks(&self, manager: ManagerId, gw: Gameweek) -> Result<GameweekPicks> {
        self.record("picks");
        self.picks
            .get(&(manager, gw))
            .cloned()
            .ok_or_else(|| not_seeded(format!("picks for manager {} gameweek {}", manager, gw)))
    }

    async fn get_player_history(&self, player: PlayerId) -> Result<Vec<FixtureRecord>> {
        self.record("player_history");
        self.player_history
            .get(&player)
            .cloned()
            .ok_or_else(|| not_seeded(format!("history for player {}", player)))
    }
}
