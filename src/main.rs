//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_stats::{
    cli::{Commands, FplStats},
    commands::{
        league_data::{handle_managers, handle_players},
        reports::handle_reports,
    },
    reports::ReportKind,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = FplStats::parse();

    match app.command {
        Commands::All {
            common,
            window,
            positional,
        } => {
            let params = window.into_params(Some(positional))?;
            handle_reports(&ReportKind::ALL, params, common.into_options()).await?
        }

        Commands::PointsValue { common, window } => {
            let params = window.into_params(None)?;
            handle_reports(&[ReportKind::PointsValue], params, common.into_options()).await?
        }

        Commands::CaptainBench { common, window } => {
            let params = window.into_params(None)?;
            handle_reports(&[ReportKind::CaptainBench], params, common.into_options()).await?
        }

        Commands::Positions {
            common,
            window,
            positional,
        } => {
            let params = window.into_params(Some(positional))?;
            handle_reports(&[ReportKind::Positions], params, common.into_options()).await?
        }

        Commands::MinMax { common, window } => {
            let params = window.into_params(None)?;
            handle_reports(&[ReportKind::MinMax], params, common.into_options()).await?
        }

        Commands::Players { common } => handle_players(common.into_options()).await?,

        Commands::Managers { common } => handle_managers(common.into_options()).await?,
    }

    Ok(())
}

/// Log to stderr so stdout stays free for progress lines.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fpl_stats=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
