//! Report commands: one report or all four.

use tracing::info;

use crate::{
    core::output::JsonDirSink,
    reports::{run_reports, ReportKind, ReportParams},
    Result,
};

use super::common::{build_source, load_roster, RunOptions};

/// Compute the selected reports and write each one to the output directory.
///
/// Every report that succeeds is written even when others fail; the command
/// then fails with the list of failed report names.
pub async fn handle_reports(
    kinds: &[ReportKind],
    params: ReportParams,
    options: RunOptions,
) -> Result<()> {
    let source = build_source(&options)?;
    let (league_id, roster) = load_roster(source.as_ref(), &options).await?;

    info!(
        %league_id,
        month = %params.month,
        through = %params.through,
        reports = kinds.len(),
        "running reports"
    );

    let mut sink = JsonDirSink::new(&options.output_dir);
    let run = run_reports(source.as_ref(), &roster, kinds, &params, &mut sink).await;

    if options.verbose {
        for path in sink.written() {
            println!("✓ Wrote {}", path.display()); // tarpaulin::skip
        }
        for (kind, e) in &run.failed {
            println!("✗ {} failed: {}", kind, e); // tarpaulin::skip
        }
    }

    run.into_result().map(|_| ())
}
