//! Wire types for the Fantasy Premier League API responses.
//!
//! Only the fields the reports read are modelled; everything else in the
//! upstream payloads is ignored by serde.

use crate::cli::types::{Gameweek, ManagerId, PlayerId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// Upstream sends `expected_goals`/`expected_assists` as decimal strings
/// (`"0.32"`); accept either a string or a plain number.
fn de_decimal_str_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// `bootstrap-static/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bootstrap {
    pub elements: Vec<PlayerElement>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerElement {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    pub element_type: u8,
}

/// `leagues-classic/{id}/standings/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueStandings {
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsPage {
    pub results: Vec<StandingEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingEntry {
    /// Manager id
    pub entry: ManagerId,
    pub player_name: String,
    /// Team name
    pub entry_name: String,
}

/// `entry/{id}/history/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManagerHistory {
    pub current: Vec<ManagerHistoryEntry>,
}

/// One gameweek of a manager's season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManagerHistoryEntry {
    pub event: Gameweek,
    pub points: i32,
    /// Cumulative season points after this gameweek.
    pub total_points: i32,
    /// Squad value in tenths.
    pub value: i32,
    pub points_on_bench: i32,
    pub event_transfers: i32,
}

impl ManagerHistoryEntry {
    /// Squad value in currency units.
    pub fn team_value(&self) -> f64 {
        f64::from(self.value) / 10.0
    }
}

/// `entry/{id}/event/{gw}/picks/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameweekPicks {
    pub picks: Vec<Pick>,
    pub entry_history: PicksEntryHistory,
}

impl GameweekPicks {
    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_captain)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    /// 0 = benched, 1 = normal, 2 = captain, 3 = triple captain.
    pub multiplier: u8,
    pub is_captain: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PicksEntryHistory {
    pub points_on_bench: i32,
    pub event_transfers: i32,
}

/// `element-summary/{id}/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementSummary {
    pub history: Vec<FixtureRecord>,
}

/// One fixture of a player's season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureRecord {
    pub round: Gameweek,
    pub total_points: i32,
    pub goals_scored: i32,
    pub assists: i32,
    #[serde(deserialize_with = "de_decimal_str_or_f64")]
    pub expected_goals: f64,
    #[serde(deserialize_with = "de_decimal_str_or_f64")]
    pub expected_assists: f64,
}
