//! Fantasy Premier League mini-league statistics
//!
//! Fetches a classic league's managers, their picks and history, and the
//! fixture history of every picked player from the public FPL API, then folds
//! them into four per-manager reports:
//!
//! - **Points & value**: points over a gameweek window and squad value change
//! - **Captain & bench**: captain points, bench points and transfers
//! - **Positions**: points per position, bench points, goals, assists, xG, xA
//! - **Min/max**: lowest and highest cumulative season totals
//!
//! Every report has a season-to-date figure and a "month" figure restricted to
//! an inclusive gameweek window. Reports are written as named JSON documents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_stats::{
//!     core::JsonDirSink,
//!     fpl::FplClient,
//!     league::ManagerRoster,
//!     reports::{run_reports, PositionalOptions, ReportKind, ReportParams},
//!     Gameweek, GameweekWindow, LeagueId,
//! };
//!
//! # async fn example() -> fpl_stats::Result<()> {
//! let source = FplClient::from_env(std::time::Duration::from_secs(30))?;
//! let roster = ManagerRoster::build(&source, LeagueId::new(5303)).await?;
//!
//! let params = ReportParams {
//!     month: GameweekWindow::new(Gameweek::new(5), Gameweek::new(8))?,
//!     through: Gameweek::new(8),
//!     positional: PositionalOptions::default(),
//! };
//! let mut sink = JsonDirSink::new("out");
//! run_reports(&source, &roster, &ReportKind::ALL, &params, &mut sink)
//!     .await
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=5303
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod league;
pub mod reports;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cli::types::{Gameweek, GameweekWindow, LeagueId, ManagerId, PlayerId, Position};
pub use error::{FplError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
