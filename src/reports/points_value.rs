//! Points scored and squad value over a gameweek window.

use serde::Serialize;
use tracing::info;

use crate::{
    cli::types::{GameweekWindow, ManagerId},
    fpl::{source::DataSource, types::ManagerHistoryEntry},
    league::ManagerRoster,
    Result,
};

use super::{missing_history_entry, Report};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointsValueSummary {
    pub points: i32,
    pub end_team_value: f64,
    pub team_value_delta: f64,
}

/// Sum `points` over the window and read squad value at both window edges.
///
/// A manager without a history entry at exactly `window.start()` or
/// `window.end()` is an error, not a zero.
pub fn summarize(
    manager: ManagerId,
    history: &[ManagerHistoryEntry],
    window: GameweekWindow,
) -> Result<PointsValueSummary> {
    let mut points = 0;
    let mut start_value = None;
    let mut end_value = None;

    for entry in history.iter().filter(|e| window.contains(e.event)) {
        points += entry.points;

        if entry.event == window.start() {
            start_value = Some(entry.team_value());
        }
        if entry.event == window.end() {
            end_value = Some(entry.team_value());
        }
    }

    let start_value = start_value.ok_or_else(|| missing_history_entry(manager, window.start()))?;
    let end_value = end_value.ok_or_else(|| missing_history_entry(manager, window.end()))?;

    Ok(PointsValueSummary {
        points,
        end_team_value: end_value,
        team_value_delta: end_value - start_value,
    })
}

/// Keyed by manager name.
pub async fn compute(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    window: GameweekWindow,
) -> Result<Report<PointsValueSummary>> {
    let mut report = Report::new();

    for (manager_id, manager) in roster.iter() {
        let history = source.get_manager_history(manager_id).await?;
        report.insert(manager.name.clone(), summarize(manager_id, &history, window)?);
    }

    info!(%window, managers = report.len(), "points and value report computed");
    Ok(report)
}
