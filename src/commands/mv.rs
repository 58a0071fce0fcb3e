//! Single-item move or rename.

use clap::Args;

use filedrop_core::config::DriveConfig;
use filedrop_core::error::AppError;

use crate::output;

/// Arguments for `mv`
#[derive(Debug, Args)]
pub struct MvArgs {
    /// Current address, e.g. `/docs/a.txt`
    pub from: String,
    /// New address, e.g. `/archive/a.txt`
    pub to: String,
}

/// Execute `mv`
pub async fn execute(args: &MvArgs, config: &DriveConfig) -> Result<(), AppError> {
    let session = super::open_session(config).await?;
    let dir = args.from.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("/");
    session.open(Some(dir), Default::default()).await?;

    let parent = |p: &str| p.rsplit_once('/').map(|(d, _)| d.to_string());
    let same_dir = parent(&args.to) == parent(&args.from);
    if same_dir {
        session.bulk.rename(&args.from, &args.to).await?;
    } else {
        session.bulk.move_path(&args.from, &args.to).await?;
    }

    output::print_success(&format!("Moved {} -> {}", args.from, args.to));
    Ok(())
}
