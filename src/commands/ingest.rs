//! Drop ingestion preview.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_ingest::{IngestionCollector, IngestionResult};
use filedrop_local::LocalDropSource;

use crate::output::{self, OutputFormat};

/// Arguments for `ingest`
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Files or directories to drop
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Ingested file row
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// Path relative to the drop
    pub path: String,
    /// Size
    pub size: String,
    /// Content type reported by the source
    #[tabled(rename = "type")]
    pub content_type: String,
}

/// Non-file finding row
#[derive(Debug, Serialize, Tabled)]
pub struct NoteRow {
    /// Path relative to the drop
    pub path: String,
    /// What was found
    pub note: String,
}

/// JSON shape of an ingestion
#[derive(Debug, Serialize)]
struct IngestReport<'a> {
    files: &'a [FileRow],
    empty_directories: Vec<&'a str>,
    rejected: &'a [NoteRow],
    warnings: &'a [NoteRow],
}

/// Execute `ingest`
pub async fn execute(
    args: &IngestArgs,
    config: &DriveConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let entries = LocalDropSource::from_config(&config.ingest)
        .entries(&args.paths)
        .await?;
    let result = IngestionCollector::from_config(&config.ingest)
        .collect(entries)
        .await;
    print_ingestion(&result, format);
    Ok(())
}

/// Print files, empty directories, rejections, and warnings of an ingestion
pub fn print_ingestion(result: &IngestionResult, format: OutputFormat) {
    let files: Vec<FileRow> = result
        .files
        .iter()
        .map(|f| FileRow {
            path: f.full_path(),
            size: output::format_bytes(f.size_bytes),
            content_type: f.content_type.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    let rejected: Vec<NoteRow> = result
        .rejected
        .iter()
        .map(|r| NoteRow {
            path: r.path.clone(),
            note: r.error.message.clone(),
        })
        .collect();
    let warnings: Vec<NoteRow> = result
        .warnings
        .iter()
        .map(|w| NoteRow {
            path: w.path.clone(),
            note: w.error.message.clone(),
        })
        .collect();

    match format {
        OutputFormat::Json => output::print_json(&IngestReport {
            files: &files,
            empty_directories: result.empty_directory_paths.iter().map(String::as_str).collect(),
            rejected: &rejected,
            warnings: &warnings,
        }),
        OutputFormat::Table => {
            output::print_list(&files, format);
            for dir in &result.empty_directory_paths {
                output::print_kv("empty directory", dir);
            }
            output::print_section("Rejected", &rejected, format);
            output::print_section("Unreadable", &warnings, format);
            output::print_success(&format!(
                "{} files ({}), {} empty directories",
                result.files.len(),
                output::format_bytes(result.total_bytes()),
                result.empty_directory_paths.len()
            ));
        }
    }
}
