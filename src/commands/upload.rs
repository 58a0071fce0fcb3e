//! Drop ingestion followed by upload into the drive.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_core::types::VirtualPath;
use filedrop_local::LocalDropSource;

use super::ingest::NoteRow;
use crate::output::{self, OutputFormat};

/// Arguments for `upload`
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Files or directories to drop
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Drive directory to upload into
    #[arg(short, long, default_value = "/")]
    pub to: String,
}

#[derive(Debug, Serialize)]
struct UploadSummary {
    upload_id: String,
    target: String,
    files: usize,
    total_bytes: u64,
    folders_created: usize,
    rejected: Vec<NoteRow>,
    warnings: Vec<NoteRow>,
}

/// Execute `upload`
pub async fn execute(
    args: &UploadArgs,
    config: &DriveConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = super::open_session(config).await?;
    let target = VirtualPath::directory(args.to.as_str());
    session
        .open(Some(target.as_str()), Default::default())
        .await?;

    let entries = LocalDropSource::from_config(&config.ingest)
        .entries(&args.paths)
        .await?;
    let uploaded = session.ingest_and_upload(entries, &target).await?;

    let summary = UploadSummary {
        upload_id: uploaded.receipt.id.to_string(),
        target: uploaded.receipt.target.to_string(),
        files: uploaded.receipt.files,
        total_bytes: uploaded.receipt.total_bytes,
        folders_created: uploaded.receipt.folders_created,
        rejected: uploaded
            .rejected
            .iter()
            .map(|r| NoteRow {
                path: r.path.clone(),
                note: r.error.message.clone(),
            })
            .collect(),
        warnings: uploaded
            .warnings
            .iter()
            .map(|w| NoteRow {
                path: w.path.clone(),
                note: w.error.message.clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => output::print_json(&summary),
        OutputFormat::Table => {
            output::print_success(&format!(
                "Uploaded {} files ({}) into {}",
                summary.files,
                output::format_bytes(summary.total_bytes),
                summary.target
            ));
            output::print_kv("upload id", &summary.upload_id);
            output::print_kv("folders created", &summary.folders_created.to_string());
            output::print_section("Rejected", &summary.rejected, format);
            output::print_section("Unreadable", &summary.warnings, format);
            if !summary.rejected.is_empty() {
                output::print_warning("Some files were too large and were skipped");
            }
        }
    }
    Ok(())
}
