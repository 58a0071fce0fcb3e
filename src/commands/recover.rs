//! Trash recovery.

use clap::Args;

use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_core::types::{BucketContext, VirtualPath};

use super::trash::{print_report, select_by_name};
use crate::output::OutputFormat;

/// Arguments for `recover`
#[derive(Debug, Args)]
pub struct RecoverArgs {
    /// Names of the trashed items
    #[arg(required = true)]
    pub names: Vec<String>,
    /// Trash directory holding the items
    #[arg(long = "from", default_value = "/")]
    pub from: String,
    /// Drive directory to restore into
    #[arg(short, long, default_value = "/")]
    pub to: String,
}

/// Execute `recover`
pub async fn execute(
    args: &RecoverArgs,
    config: &DriveConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = super::open_session(config).await?;
    session
        .open(Some(args.from.as_str()), BucketContext::trash())
        .await?;

    let listing = session.navigator.listing().await;
    let selection = select_by_name(&listing, &args.names);
    let report = session
        .bulk
        .recover(&selection, &VirtualPath::directory(args.to.as_str()))
        .await;

    print_report(&report, "recovered", format);
    Ok(())
}
