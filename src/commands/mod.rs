//! CLI command definitions and dispatch.

pub mod ingest;
pub mod ls;
pub mod mv;
pub mod recover;
pub mod trash;
pub mod upload;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use filedrop_browser::BrowserSession;
use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;
use filedrop_core::traits::LogNotifier;
use filedrop_local::LocalDrive;

use crate::output::OutputFormat;

/// Filedrop: drop-to-upload ingestion and drive browsing
#[derive(Debug, Parser)]
#[command(name = "filedrop", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded next to the base file
    #[arg(short, long, env = "FILEDROP_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Walk local files and folders as a drop and show what would be uploaded
    Ingest(ingest::IngestArgs),
    /// Walk local files and folders as a drop and upload them into the drive
    Upload(upload::UploadArgs),
    /// List a drive directory
    Ls(ls::LsArgs),
    /// Move items of a directory into the trash
    Trash(trash::TrashArgs),
    /// Move items out of the trash
    Recover(recover::RecoverArgs),
    /// Move or rename one item
    Mv(mv::MvArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &DriveConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Ingest(args) => ingest::execute(args, config, self.format).await,
            Commands::Upload(args) => upload::execute(args, config, self.format).await,
            Commands::Ls(args) => ls::execute(args, config, self.format).await,
            Commands::Trash(args) => trash::execute(args, config, self.format).await,
            Commands::Recover(args) => recover::execute(args, config, self.format).await,
            Commands::Mv(args) => mv::execute(args, config).await,
        }
    }
}

/// Helper: open a browser session over the configured local drive
pub async fn open_session(config: &DriveConfig) -> Result<BrowserSession, AppError> {
    let drive = LocalDrive::new(&config.remote, &config.content_types).await?;
    tracing::debug!(root = %drive.root().display(), "Opened local drive");
    Ok(BrowserSession::new(
        Arc::new(drive),
        Arc::new(LogNotifier),
        config,
    ))
}
