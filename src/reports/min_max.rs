//! Lowest and highest cumulative season totals, overall and in a month.

use serde::Serialize;
use tracing::info;

use crate::{
    cli::types::{Gameweek, GameweekWindow, ManagerId},
    fpl::{source::DataSource, types::ManagerHistoryEntry},
    league::ManagerRoster,
    Result,
};

use super::{missing_history_entry, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinMaxSummary {
    pub min_points_total: i32,
    pub max_points_total: i32,
    pub min_points_month: i32,
    pub max_points_month: i32,
}

/// Bounds over the `total_points` field (the cumulative season total as
/// reported upstream, not the gameweek score).
///
/// Total bounds start at gameweek 1 and month bounds at `month.start()`;
/// both entries are required.
pub fn summarize(
    manager: ManagerId,
    history: &[ManagerHistoryEntry],
    month: GameweekWindow,
) -> Result<MinMaxSummary> {
    let first_gw = Gameweek::new(1);
    let find = |gw: Gameweek| {
        history
            .iter()
            .find(|e| e.event == gw)
            .ok_or_else(|| missing_history_entry(manager, gw))
    };

    let first = find(first_gw)?;
    let month_start = find(month.start())?;

    let mut summary = MinMaxSummary {
        min_points_total: first.total_points,
        max_points_total: first.total_points,
        min_points_month: month_start.total_points,
        max_points_month: month_start.total_points,
    };

    for entry in history.iter().filter(|e| e.event > first_gw) {
        summary.min_points_total = summary.min_points_total.min(entry.total_points);
        summary.max_points_total = summary.max_points_total.max(entry.total_points);

        if month.contains(entry.event) {
            summary.min_points_month = summary.min_points_month.min(entry.total_points);
            summary.max_points_month = summary.max_points_month.max(entry.total_points);
        }
    }

    Ok(summary)
}

/// Keyed by team name.
pub async fn compute(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    month: GameweekWindow,
) -> Result<Report<MinMaxSummary>> {
    let mut report = Report::new();

    for (manager_id, manager) in roster.iter() {
        let history = source.get_manager_history(manager_id).await?;
        report.insert(manager.team.clone(), summarize(manager_id, &history, month)?);
    }

    info!(%month, managers = report.len(), "min/max report computed");
    Ok(report)
}
