//! Shared setup for command handlers: options, data source, roster.

use std::{num::NonZeroUsize, path::PathBuf, time::Duration};

use crate::{
    fpl::{memo::DEFAULT_MEMO_CAPACITY, DataSource, FplClient, MemoSource},
    league::ManagerRoster,
    LeagueId, Result,
};

use super::resolve_league_id;

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub league_id: Option<LeagueId>,
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub memoize: bool,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            league_id: None,
            output_dir: PathBuf::from("."),
            timeout: crate::fpl::http::DEFAULT_TIMEOUT,
            memoize: true,
            verbose: false,
        }
    }
}

/// HTTP source for the configured base URL, memoized unless disabled.
pub fn build_source(options: &RunOptions) -> Result<Box<dyn DataSource>> {
    let client = FplClient::from_env(options.timeout)?;
    tracing::debug!(base_url = client.base_url(), memoize = options.memoize, "data source ready");

    match NonZeroUsize::new(DEFAULT_MEMO_CAPACITY) {
        Some(capacity) if options.memoize => Ok(Box::new(MemoSource::new(client, capacity))),
        _ => Ok(Box::new(client)),
    }
}

/// League id resolution plus roster fetch, with progress output.
pub async fn load_roster(
    source: &dyn DataSource,
    options: &RunOptions,
) -> Result<(LeagueId, ManagerRoster)> {
    let league_id = resolve_league_id(options.league_id)?;

    if options.verbose {
        println!("Loading standings for league {}...", league_id);
    }
    let roster = ManagerRoster::build(source, league_id).await?;
    if options.verbose {
        println!("✓ {} managers loaded", roster.len());
    }

    Ok((league_id, roster))
}
