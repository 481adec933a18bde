//! One reconciliation run: build the client, reconcile, print the report

use std::io::Write;

use groupsync_directory::{GraphDirectory, ReconciliationResult, Reconciler, ReportPrinter};
use tracing::info;

use crate::config::RunSettings;
use crate::error::CliResult;

/// Execute a run and write the report to `out`
pub async fn execute<W: Write>(
    settings: RunSettings,
    out: &mut W,
) -> CliResult<ReconciliationResult> {
    info!(
        group = %settings.group,
        emails = settings.emails.len(),
        base_url = %settings.directory.base_url(),
        "Starting group reconciliation"
    );

    let directory = GraphDirectory::new(settings.directory)?;
    let reconciler = Reconciler::new(directory);

    let result = reconciler
        .reconcile(settings.emails.as_slice(), &settings.group)
        .await;

    ReportPrinter::new(settings.report_format).print(&result, out)?;
    out.flush()?;

    info!(
        already_member = result.already_member.len(),
        added = result.added.len(),
        "Reconciliation finished"
    );

    Ok(result)
}
