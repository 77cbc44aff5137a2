//! Command implementations for the FPL league statistics CLI

pub mod common;
pub mod league_data;
pub mod reports;

use crate::{cli::types::LeagueId, FplError, Result, LEAGUE_ID_ENV_VAR};


/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(s) if !s.trim().is_empty() => s.trim().parse::<LeagueId>(),
        _ => Err(FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
