//! League lookup commands: player directory and manager roster dumps.

use crate::{
    core::output::{JsonDirSink, ReportSink},
    league::PlayerDirectory,
    Result,
};

use super::common::{build_source, load_roster, RunOptions};

pub const PLAYERS_DOCUMENT: &str = "player_collection";
pub const MANAGERS_DOCUMENT: &str = "league_managers";

/// Write the player directory as `player_collection.json`.
pub async fn handle_players(options: RunOptions) -> Result<()> {
    let source = build_source(&options)?;
    let directory = PlayerDirectory::build(source.as_ref()).await?;

    let mut sink = JsonDirSink::new(&options.output_dir);
    sink.write(PLAYERS_DOCUMENT, &serde_json::to_value(&directory)?)?;

    if options.verbose {
        println!(
            "✓ {} players written to {}",
            directory.len(),
            sink.path_for(PLAYERS_DOCUMENT).display()
        ); // tarpaulin::skip
    }
    Ok(())
}

/// Write the league's managers as `league_managers.json`.
pub async fn handle_managers(options: RunOptions) -> Result<()> {
    let source = build_source(&options)?;
    let (_, roster) = load_roster(source.as_ref(), &options).await?;

    let mut sink = JsonDirSink::new(&options.output_dir);
    sink.write(MANAGERS_DOCUMENT, &serde_json::to_value(&roster)?)?;

    if options.verbose {
        println!(
            "✓ {} managers written to {}",
            roster.len(),
            sink.path_for(MANAGERS_DOCUMENT).display()
        ); // tarpaulin::skip
    }
    Ok(())
}
