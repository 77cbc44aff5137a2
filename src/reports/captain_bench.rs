//! Captain points, points left on the bench and transfers made.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::types::{Gameweek, GameweekWindow},
    fpl::{
        source::DataSource,
        types::{FixtureRecord, PicksEntryHistory},
    },
    league::ManagerRoster,
    FplError, Result,
};

use super::Report;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaptainBenchSummary {
    pub points_on_bench_month: i32,
    pub points_on_bench_total: i32,
    pub number_of_transfers_month: i32,
    pub number_of_transfers_total: i32,
    pub captain_points_month: i32,
    pub captain_points_total: i32,
}

impl CaptainBenchSummary {
    /// Fold one gameweek into the running totals.
    ///
    /// The captain figures sum the captain's whole fixture history on every
    /// gameweek folded (month figures restricted to fixtures whose round is in
    /// `month`), so a captain kept for two gameweeks is counted twice. Bench
    /// points and transfers come from the gameweek's own entry history.
    pub fn add_gameweek(
        &mut self,
        gw: Gameweek,
        entry: &PicksEntryHistory,
        captain_history: &[FixtureRecord],
        month: GameweekWindow,
    ) {
        for fixture in captain_history {
            self.captain_points_total += fixture.total_points;
            if month.contains(fixture.round) {
                self.captain_points_month += fixture.total_points;
            }
        }

        self.points_on_bench_total += entry.points_on_bench;
        self.number_of_transfers_total += entry.event_transfers;

        if month.contains(gw) {
            self.points_on_bench_month += entry.points_on_bench;
            self.number_of_transfers_month += entry.event_transfers;
        }
    }
}

/// Keyed by team name. Walks gameweeks `1..=through` for every manager.
pub async fn compute(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    month: GameweekWindow,
    through: Gameweek,
) -> Result<Report<CaptainBenchSummary>> {
    let mut report = Report::new();

    for (manager_id, manager) in roster.iter() {
        let mut summary = CaptainBenchSummary::default();

        for gw in through.season_to_date() {
            let picks = source.get_manager_picks(manager_id, gw).await?;
            let captain = picks
                .captain()
                .ok_or_else(|| FplError::MissingRequiredSample {
                    manager: manager_id,
                    what: format!("captain pick in gameweek {}", gw),
                })?;
            debug!(manager = %manager_id, %gw, captain = %captain.element, "captain resolved");

            let captain_history = source.get_player_history(captain.element).await?;
            summary.add_gameweek(gw, &picks.entry_history, &captain_history, month);
        }

        report.insert(manager.team.clone(), summary);
    }

    info!(%month, %through, managers = report.len(), "captain and bench report computed");
    Ok(report)
}
