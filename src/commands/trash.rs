//! Bulk trash.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filedrop_browser::{BulkReport, ItemOutcome};
use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_core::types::{DirectoryListing, SelectedItem};

use crate::output::{self, OutputFormat};

/// Arguments for `trash`
#[derive(Debug, Args)]
pub struct TrashArgs {
    /// Names of the items to trash
    #[arg(required = true)]
    pub names: Vec<String>,
    /// Drive directory holding the items
    #[arg(short, long = "in", default_value = "/")]
    pub dir: String,
}

/// Per-item result row
#[derive(Debug, Serialize, Tabled)]
pub struct OutcomeRow {
    /// Item name
    pub name: String,
    /// What happened
    pub result: String,
}

/// Execute `trash`
pub async fn execute(
    args: &TrashArgs,
    config: &DriveConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = super::open_session(config).await?;
    session.open(Some(args.dir.as_str()), Default::default()).await?;

    let listing = session.navigator.listing().await;
    let selection = select_by_name(&listing, &args.names);
    let report = session.bulk.move_to_trash(&selection).await;

    print_report(&report, "trashed", format);
    Ok(())
}

/// Selection identities for names in a listing.
///
/// Names missing from the listing keep an empty cid so that they are
/// reported as not found.
pub fn select_by_name(listing: &DirectoryListing, names: &[String]) -> Vec<SelectedItem> {
    names
        .iter()
        .map(|name| {
            listing
                .items
                .iter()
                .find(|item| &item.name == name)
                .map(|item| item.identity())
                .unwrap_or_else(|| SelectedItem::new("", name.as_str()))
        })
        .collect()
}

/// Print the outcomes of a bulk operation
pub fn print_report(report: &BulkReport, done: &str, format: OutputFormat) {
    let rows: Vec<OutcomeRow> = report
        .outcomes
        .iter()
        .map(|outcome| OutcomeRow {
            name: outcome.item().name.clone(),
            result: match outcome {
                ItemOutcome::Succeeded { kind, .. } => format!("{} {done}", kind.noun()),
                ItemOutcome::Failed { error, .. } => format!("failed: {}", error.message),
                ItemOutcome::NotFound { .. } => "not found".to_string(),
            },
        })
        .collect();
    output::print_list(&rows, format);

    if format == OutputFormat::Table {
        if report.all_succeeded() {
            output::print_success(&format!("{} items {done}", report.succeeded()));
        } else {
            output::print_warning(&format!(
                "{} succeeded, {} failed, {} not found",
                report.succeeded(),
                report.failed(),
                report.not_found()
            ));
        }
    }
}
