//! Manager roster: manager id → manager and team display names.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, ManagerId},
    fpl::{source::DataSource, types::StandingEntry},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerInfo {
    pub name: String,
    pub team: String,
}

/// Managers of one classic league, from its standings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ManagerRoster {
    managers: BTreeMap<ManagerId, ManagerInfo>,
}

impl ManagerRoster {
    pub async fn build(source: &dyn DataSource, league_id: LeagueId) -> Result<Self> {
        let rows = source.get_league_standings(league_id).await?;
        debug!(%league_id, managers = rows.len(), "league standings loaded");
        Ok(Self::from_standings(&rows))
    }

    /// Standings are assumed to list each manager once; a repeated entry id
    /// keeps the last row.
    pub fn from_standings(rows: &[StandingEntry]) -> Self {
        let managers = rows
            .iter()
            .map(|row| {
                (
                    row.entry,
                    ManagerInfo {
                        name: row.player_name.clone(),
                        team: row.entry_name.clone(),
                    },
                )
            })
            .collect();
        Self { managers }
    }

    pub fn get(&self, manager: ManagerId) -> Option<&ManagerInfo> {
        self.managers.get(&manager)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManagerId, &ManagerInfo)> {
        self.managers.iter().map(|(id, info)| (*id, info))
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}
