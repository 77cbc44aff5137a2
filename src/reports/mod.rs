//! Aggregation of per-gameweek upstream data into league reports.
//!
//! Each report folds a manager's gameweeks into a fresh accumulator and keys
//! the result by manager or team display name:
//! - `points_value`: points and squad value over a gameweek window (by manager name)
//! - `captain_bench`: captain, bench and transfer totals (by team name)
//! - `positions`: points per position plus goals, assists, xG and xA (by team name)
//! - `min_max`: lowest and highest cumulative totals (by team name)
//!
//! `run` drives any selection of them against one `DataSource` and hands each
//! finished report to a `ReportSink`.

pub mod captain_bench;
pub mod min_max;
pub mod points_value;
pub mod positions;
pub mod run;

use std::collections::BTreeMap;
use std::fmt;

use crate::{
    cli::types::{Gameweek, ManagerId},
    FplError,
};

pub use captain_bench::CaptainBenchSummary;
pub use min_max::MinMaxSummary;
pub use points_value::PointsValueSummary;
pub use positions::{PositionalOptions, PositionalSummary, Split};
pub use run::{run_reports, ReportParams, ReportRun};

/// One finished report: display name → summary record.
pub type Report<T> = BTreeMap<String, T>;

/// The four reports, named by the document each one is persisted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    PointsValue,
    CaptainBench,
    Positions,
    MinMax,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::PointsValue,
        ReportKind::CaptainBench,
        ReportKind::Positions,
        ReportKind::MinMax,
    ];

    pub fn document_name(&self) -> &'static str {
        match self {
            ReportKind::PointsValue => "coach_of_the_month_and_team_value",
            ReportKind::CaptainBench => "captain_points_bench_points_num_of_transfers",
            ReportKind::Positions => "position_points_bench_points_goals_assists_xg_xa",
            ReportKind::MinMax => "least_and_most_points",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document_name())
    }
}

fn missing_history_entry(manager: ManagerId, gw: Gameweek) -> FplError {
    FplError::MissingRequiredSample {
        manager,
        what: format!("history entry for gameweek {}", gw),
    }
}
