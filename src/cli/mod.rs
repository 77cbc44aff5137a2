//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, time::Duration};

use crate::{
    commands::common::RunOptions,
    reports::{PositionalOptions, ReportParams},
    Result,
};
use types::{Gameweek, GameweekWindow, LeagueId};

/// Arguments every command takes.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League ID (or set `FPL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Directory the JSON documents are written to.
    #[clap(long, short, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Re-fetch repeated reads instead of memoizing them for the run.
    #[clap(long)]
    pub no_memo: bool,

    /// Print progress and written paths.
    #[clap(long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            league_id: self.league_id,
            output_dir: self.output_dir,
            timeout: Duration::from_secs(self.timeout_secs),
            memoize: !self.no_memo,
            verbose: self.verbose,
        }
    }
}

/// Gameweek windows for the reports.
#[derive(Debug, Args)]
pub struct WindowArgs {
    /// First gameweek of the month window (inclusive).
    #[clap(long, default_value_t = Gameweek::default())]
    pub month_start: Gameweek,

    /// Last gameweek of the month window (inclusive).
    #[clap(long, default_value_t = Gameweek::default())]
    pub month_end: Gameweek,

    /// Season totals run from gameweek 1 through this gameweek (inclusive).
    #[clap(long, default_value_t = Gameweek::default())]
    pub through: Gameweek,
}

/// Options for the positional report.
#[derive(Debug, Args)]
pub struct PositionalArgs {
    /// Count a captain's points once instead of doubled.
    #[clap(long)]
    pub exclude_captain_bonus: bool,

    /// Count benched players as if they played.
    #[clap(long)]
    pub include_bench: bool,
}

impl WindowArgs {
    pub fn into_params(self, positional: Option<PositionalArgs>) -> Result<ReportParams> {
        let positional = positional
            .map(|p| PositionalOptions {
                captain_points_included: !p.exclude_captain_bonus,
                bench_included: p.include_bench,
            })
            .unwrap_or_default();

        Ok(ReportParams {
            month: GameweekWindow::new(self.month_start, self.month_end)?,
            through: self.through,
            positional,
        })
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-stats",
    about = "Fantasy Premier League mini-league statistics"
)]
pub struct FplStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute all four reports; a failing report does not stop the others.
    All {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        window: WindowArgs,

        #[clap(flatten)]
        positional: PositionalArgs,
    },

    /// Points and squad value over the month window, per manager.
    PointsValue {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        window: WindowArgs,
    },

    /// Captain points, bench points and transfers, per team.
    CaptainBench {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        window: WindowArgs,
    },

    /// Points per position plus goals, assists, xG and xA, per team.
    Positions {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        window: WindowArgs,

        #[clap(flatten)]
        positional: PositionalArgs,
    },

    /// Lowest and highest cumulative totals, per team.
    MinMax {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        window: WindowArgs,
    },

    /// Write the player directory (id → name and position).
    Players {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Write the league's managers (id → manager and team name).
    Managers {
        #[clap(flatten)]
        common: CommonArgs,
    },
}
