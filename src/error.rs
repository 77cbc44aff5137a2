//! Error types for the FPL league statistics tool

use crate::cli::types::{Gameweek, ManagerId, PlayerId};
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("Upstream request failed: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric identifier: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Manager {manager} is missing a required sample: {what}")]
    MissingRequiredSample { manager: ManagerId, what: String },

    #[error("Player {player} is not in the player directory")]
    UnknownPlayer { player: PlayerId },

    #[error("Unknown position code: {code}")]
    UnknownPositionCode { code: u8 },

    #[error(
        "Fixture history for player {player} has no record for gameweek {gameweek} ({len} records)"
    )]
    MisalignedHistory {
        player: PlayerId,
        gameweek: Gameweek,
        len: usize,
    },

    #[error("Invalid gameweek window: {start}..={end}")]
    InvalidWindow { start: u16, end: u16 },

    #[error("Reports failed: {}", failed.join(", "))]
    ReportsFailed { failed: Vec<String> },
}
