//! Starting uploads and refreshing once they settle.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use filedrop_core::error::AppError;
use filedrop_core::traits::{DriveClient, DroppedEntry, Notifier, Toast};
use filedrop_core::types::{FileHandle, PendingUpload, UploadId, VirtualPath};
use filedrop_core::AppResult;
use filedrop_ingest::IngestionResult;

use crate::messages::FOLDER_UPLOAD_UNSUPPORTED;
use crate::navigator::PathNavigator;

/// Summary of a settled upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub id: UploadId,
    pub target: VirtualPath,
    pub files: usize,
    pub total_bytes: u64,
    pub folders_created: usize,
    /// Whether the target was still shown and got refreshed.
    pub refreshed: bool,
}

/// Starts uploads, tracks them while in flight, and refreshes the listing
/// when the user is still on the target directory.
#[derive(Debug, Clone)]
pub struct UploadCoordinator {
    client: Arc<dyn DriveClient>,
    navigator: PathNavigator,
    notifier: Arc<dyn Notifier>,
    in_progress: Arc<RwLock<HashMap<UploadId, PendingUpload>>>,
}

impl UploadCoordinator {
    pub fn new(
        client: Arc<dyn DriveClient>,
        navigator: PathNavigator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            navigator,
            notifier,
            in_progress: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Upload a plain drop into `target`.
    ///
    /// Directories are only handled by the ingestion walk; if `raw_items`
    /// holds any directory the whole drop is refused and nothing is uploaded.
    pub async fn handle_drop(
        &self,
        files: Vec<FileHandle>,
        raw_items: &[DroppedEntry],
        target: &VirtualPath,
    ) -> AppResult<UploadReceipt> {
        if let Some(dir) = raw_items.iter().find(|item| item.is_directory()) {
            warn!(name = dir.name(), path = %target, "Folder drop refused");
            self.notifier.notify(Toast::error(FOLDER_UPLOAD_UNSUPPORTED));
            return Err(AppError::unsupported_folder_drop(FOLDER_UPLOAD_UNSUPPORTED));
        }

        self.upload(files, target).await
    }

    /// Upload files into `target`, then refresh if `target` is still shown.
    pub async fn upload(
        &self,
        files: Vec<FileHandle>,
        target: &VirtualPath,
    ) -> AppResult<UploadReceipt> {
        let pending = self.begin(target, files.clone()).await;
        let result = self.client.upload(files, target).await;
        self.settle(pending, 0, result).await
    }

    /// Upload an ingestion result into `target`.
    ///
    /// Files are grouped by their relative prefix and each group lands in
    /// `target` joined with that prefix. Every recorded empty directory is
    /// created. Failures do not stop the remaining groups; the first one is
    /// returned after the refresh.
    pub async fn upload_ingested(
        &self,
        ingestion: IngestionResult,
        target: &VirtualPath,
    ) -> AppResult<UploadReceipt> {
        let pending = self.begin(target, ingestion.files.clone()).await;
        let mut first_error = None;

        let mut created = 0;
        for dir in &ingestion.empty_directory_paths {
            let path = target.join_dir(dir);
            match self.client.create_folder(&path).await {
                Ok(()) => created += 1,
                Err(e) => {
                    error!(path = %path, error = %e, "Failed to create empty folder");
                    first_error.get_or_insert(e);
                }
            }
        }

        let mut groups: BTreeMap<String, Vec<FileHandle>> = BTreeMap::new();
        for file in ingestion.files {
            let prefix = file.relative_path.clone();
            // The prefix is folded into the group's target directory.
            groups
                .entry(prefix)
                .or_default()
                .push(file.with_relative_path(String::new()));
        }
        for (prefix, files) in groups {
            let path = target.join_dir(&prefix);
            if let Err(e) = self.client.upload(files, &path).await {
                error!(path = %path, error = %e, "Upload group failed");
                first_error.get_or_insert(e);
            }
        }

        let result = match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        };
        self.settle(pending, created, result).await
    }

    /// Uploads started and not yet settled, oldest first.
    pub async fn uploads_in_progress(&self) -> Vec<PendingUpload> {
        let mut uploads: Vec<PendingUpload> =
            self.in_progress.read().await.values().cloned().collect();
        uploads.sort_by_key(|u| u.started_at);
        uploads
    }

    async fn begin(&self, target: &VirtualPath, files: Vec<FileHandle>) -> PendingUpload {
        let pending = PendingUpload::new(target.clone(), files);
        info!(
            upload_id = %pending.id,
            path = %target,
            files = pending.files.len(),
            bytes = pending.total_bytes(),
            "Upload started"
        );
        self.in_progress
            .write()
            .await
            .insert(pending.id, pending.clone());
        pending
    }

    async fn settle(
        &self,
        pending: PendingUpload,
        folders_created: usize,
        result: AppResult<()>,
    ) -> AppResult<UploadReceipt> {
        self.in_progress.write().await.remove(&pending.id);

        match &result {
            Ok(()) => info!(upload_id = %pending.id, "Upload settled"),
            Err(e) => error!(upload_id = %pending.id, error = %e, "Upload failed"),
        }

        // Runs after settlement whatever the outcome.
        let refreshed = match self
            .navigator
            .refresh_if_same_path(pending.target_path.as_str())
            .await
        {
            Ok(refreshed) => refreshed,
            Err(e) => {
                warn!(path = %pending.target_path, error = %e, "Refresh after upload failed");
                false
            }
        };

        result.map(|()| UploadReceipt {
            id: pending.id,
            files: pending.files.len(),
            total_bytes: pending.total_bytes(),
            target: pending.target_path,
            folders_created,
            refreshed,
        })
    }
}
