//! Runs a selection of reports against one source, isolating failures.

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{
    cli::types::{Gameweek, GameweekWindow},
    core::output::ReportSink,
    fpl::source::DataSource,
    league::{ManagerRoster, PlayerDirectory},
    FplError, Result,
};

use super::{captain_bench, min_max, points_value, positions, PositionalOptions, ReportKind};

/// Gameweek window parameters shared by the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParams {
    /// Month window; also the window of the points/value report.
    pub month: GameweekWindow,
    /// Last gameweek of the season-to-date loops.
    pub through: Gameweek,
    pub positional: PositionalOptions,
}

/// Outcome of a multi-report run.
#[derive(Debug, Default)]
pub struct ReportRun {
    pub completed: Vec<ReportKind>,
    pub failed: Vec<(ReportKind, FplError)>,
}

impl ReportRun {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// `Err(ReportsFailed)` naming every failed report, if any failed.
    pub fn into_result(self) -> Result<Vec<ReportKind>> {
        if self.failed.is_empty() {
            Ok(self.completed)
        } else {
            Err(FplError::ReportsFailed {
                failed: self
                    .failed
                    .iter()
                    .map(|(kind, _)| kind.document_name().to_string())
                    .collect(),
            })
        }
    }
}

fn to_document<T: Serialize>(report: T) -> Result<Value> {
    Ok(serde_json::to_value(report)?)
}

async fn compute_document(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    kind: ReportKind,
    params: &ReportParams,
) -> Result<Value> {
    match kind {
        ReportKind::PointsValue => {
            to_document(points_value::compute(source, roster, params.month).await?)
        }
        ReportKind::CaptainBench => to_document(
            captain_bench::compute(source, roster, params.month, params.through).await?,
        ),
        ReportKind::Positions => {
            let directory = PlayerDirectory::build(source).await?;
            to_document(
                positions::compute(
                    source,
                    roster,
                    &directory,
                    params.month,
                    params.through,
                    params.positional,
                )
                .await?,
            )
        }
        ReportKind::MinMax => to_document(min_max::compute(source, roster, params.month).await?),
    }
}

/// Compute each report in `kinds` in order and hand it to `sink`.
///
/// A failing report is logged and recorded; the remaining reports still run.
pub async fn run_reports(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    kinds: &[ReportKind],
    params: &ReportParams,
    sink: &mut dyn ReportSink,
) -> ReportRun {
    let mut run = ReportRun::default();

    for &kind in kinds {
        let outcome = match compute_document(source, roster, kind, params).await {
            Ok(document) => sink.write(kind.document_name(), &document),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                info!(report = %kind, "report written");
                run.completed.push(kind);
            }
            Err(e) => {
                error!(report = %kind, error = %e, "report failed");
                run.failed.push((kind, e));
            }
        }
    }

    run
}
