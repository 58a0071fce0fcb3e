//! Directory listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_core::types::{BucketContext, BucketKind};

use crate::output::{self, OutputFormat};

/// Arguments for `ls`
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Drive directory
    #[arg(default_value = "/")]
    pub path: String,
    /// Namespace: csf or trash
    #[arg(short, long, default_value = "csf")]
    pub bucket: BucketKind,
}

/// Listing row
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Name
    name: String,
    /// File or folder
    kind: String,
    /// Normalized content type
    #[tabled(rename = "type")]
    content_type: String,
    /// Size
    size: String,
    /// Created at
    created_at: String,
    /// Operations offered for the item
    operations: String,
}

/// Execute `ls`
pub async fn execute(
    args: &LsArgs,
    config: &DriveConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = super::open_session(config).await?;
    session
        .open(Some(args.path.as_str()), BucketContext::of(args.bucket))
        .await?;

    let state = session.navigator.snapshot().await;
    let rows: Vec<ItemRow> = state
        .listing()
        .items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            kind: item.kind().noun().to_string(),
            content_type: item.content_type.clone(),
            size: item.size.map(output::format_bytes).unwrap_or_else(|| "-".to_string()),
            created_at: item
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            operations: session
                .policy
                .item_operations(item)
                .iter()
                .map(|op| format!("{op:?}").to_lowercase())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    if format == OutputFormat::Table {
        let trail: Vec<String> = state.crumbs().into_iter().map(|c| c.text).collect();
        println!("{} / {}", state.bucket(), trail.join(" / "));
    }
    output::print_list(&rows, format);
    Ok(())
}
