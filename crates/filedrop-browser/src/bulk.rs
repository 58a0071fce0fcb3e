//! Multi-item and single-item mutations against the remote drive.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info, warn};

use filedrop_core::error::AppError;
use filedrop_core::traits::{DriveClient, MoveRequest, Notifier};
use filedrop_core::types::{
    BucketContext, DirectoryListing, ItemKind, ListedItem, SelectedItem, VirtualPath,
};
use filedrop_core::AppResult;

use crate::messages::BulkAction;
use crate::navigator::PathNavigator;

/// Settled result of one item in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// The remote call went through.
    Succeeded { item: SelectedItem, kind: ItemKind },
    /// The remote call failed or was refused locally.
    Failed {
        item: SelectedItem,
        kind: ItemKind,
        error: AppError,
    },
    /// The item was not in the listing when the batch started.
    NotFound { item: SelectedItem, error: AppError },
}

impl ItemOutcome {
    pub fn item(&self) -> &SelectedItem {
        match self {
            Self::Succeeded { item, .. }
            | Self::Failed { item, .. }
            | Self::NotFound { item, .. } => item,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Per-item results of a batch, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkReport {
    pub outcomes: Vec<ItemOutcome>,
    /// Whether the listing was refreshed afterwards.
    pub refreshed: bool,
}

impl BulkReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Failed { .. }))
            .count()
    }

    pub fn not_found(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::NotFound { .. }))
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ItemOutcome::is_success)
    }
}

/// Runs moves, trash, recovery, and renames, then refreshes the listing.
///
/// Batch items are independent: a failure never rolls back or blocks its
/// siblings, and partially applied batches stay partially applied.
#[derive(Debug, Clone)]
pub struct BulkOperationCoordinator {
    client: Arc<dyn DriveClient>,
    navigator: PathNavigator,
    notifier: Arc<dyn Notifier>,
}

impl BulkOperationCoordinator {
    pub fn new(
        client: Arc<dyn DriveClient>,
        navigator: PathNavigator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            navigator,
            notifier,
        }
    }

    /// Move the selected items of the current directory to the trash root,
    /// keeping their names.
    pub async fn move_to_trash(&self, items: &[SelectedItem]) -> BulkReport {
        self.run_batch(BulkAction::Trash, items, |origin, bucket, item| {
            Ok(MoveRequest::within(
                origin.join_file(&item.name),
                VirtualPath::root().join_file(&item.name),
            )
            .from_bucket(bucket.clone())
                .to_bucket(BucketContext::trash()))
        })
        .await
    }

    /// Move the selected items of the current directory into `new_path`.
    pub async fn move_items(&self, items: &[SelectedItem], new_path: &VirtualPath) -> BulkReport {
        self.run_batch(BulkAction::Move, items, |origin, bucket, item| {
            if item.is_folder {
                let folder = origin.join_dir(&item.name);
                if new_path.as_str().starts_with(folder.as_str()) {
                    return Err(AppError::validation(format!(
                        "Cannot move folder '{}' into itself or one of its subfolders",
                        item.name
                    )));
                }
            }
            Ok(MoveRequest::within(origin.join_file(&item.name), new_path.join_file(&item.name))
                .from_bucket(bucket.clone()))
        })
        .await
    }

    /// Move the selected trash items back into `new_path` of the default
    /// namespace.
    pub async fn recover(&self, items: &[SelectedItem], new_path: &VirtualPath) -> BulkReport {
        self.run_batch(BulkAction::Recover, items, |origin, bucket, item| {
            Ok(MoveRequest::within(origin.join_file(&item.name), new_path.join_file(&item.name))
                .from_bucket(bucket.clone())
                .to_bucket(BucketContext::csf()))
        })
        .await
    }

    /// Rename one item, then refresh the current directory.
    pub async fn rename(&self, path: &str, new_path: &str) -> AppResult<()> {
        let new_name = new_path.rsplit('/').next().unwrap_or_default();
        if new_name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        let result = self.client.rename(path, new_path).await;
        self.settle_single("rename", path, new_path, result).await
    }

    /// Move one item by address, then refresh the current directory.
    pub async fn move_path(&self, path: &str, new_path: &str) -> AppResult<()> {
        let bucket = self.navigator.bucket().await;
        let result = self
            .client
            .move_item(MoveRequest::within(path, new_path).from_bucket(bucket))
            .await;
        self.settle_single("move", path, new_path, result).await
    }

    async fn settle_single(
        &self,
        action: &str,
        path: &str,
        new_path: &str,
        result: AppResult<()>,
    ) -> AppResult<()> {
        if let Err(e) = &result {
            error!(action, path, new_path, error = %e, "Single-item operation failed");
        } else {
            info!(action, path, new_path, "Single-item operation completed");
        }

        if let Err(e) = self.navigator.refresh().await {
            warn!(error = %e, "Refresh after {action} failed");
        }

        result
    }

    async fn run_batch<F>(&self, action: BulkAction, items: &[SelectedItem], build: F) -> BulkReport
    where
        F: Fn(&VirtualPath, &BucketContext, &ListedItem) -> AppResult<MoveRequest>,
    {
        // Everything resolves against the listing as it was when the batch
        // started.
        let snapshot = self.navigator.snapshot().await;
        let origin = snapshot.current_path().clone();
        let bucket = snapshot.bucket().clone();
        let listing: &DirectoryListing = snapshot.listing();

        let mut seen = HashSet::new();
        let selection: Vec<&SelectedItem> = items.iter().filter(|i| seen.insert(*i)).collect();

        let runs = selection.into_iter().map(|selected| {
            let request = match listing.resolve(selected) {
                Some(item) => Ok((item.kind(), build(&origin, &bucket, item))),
                None => Err(AppError::not_found_in_listing(format!(
                    "No item named '{}' in {origin}",
                    selected.name
                ))),
            };
            async move {
                match request {
                    Err(error) => {
                        error!(
                            cid = %selected.cid,
                            name = %selected.name,
                            ?action,
                            "No item found in the current listing"
                        );
                        ItemOutcome::NotFound {
                            item: selected.clone(),
                            error,
                        }
                    }
                    Ok((kind, Err(e))) => ItemOutcome::Failed {
                        item: selected.clone(),
                        kind,
                        error: e,
                    },
                    Ok((kind, Ok(request))) => match self.client.move_item(request).await {
                        Ok(()) => ItemOutcome::Succeeded {
                            item: selected.clone(),
                            kind,
                        },
                        Err(e) => ItemOutcome::Failed {
                            item: selected.clone(),
                            kind,
                            error: e,
                        },
                    },
                }
            }
        });
        let outcomes = join_all(runs).await;

        let mut report = BulkReport {
            outcomes,
            refreshed: false,
        };

        if report.succeeded() > 0 {
            report.refreshed = match self.navigator.refresh_if_same_path(origin.as_str()).await {
                Ok(refreshed) => refreshed,
                Err(e) => {
                    warn!(path = %origin, error = %e, "Refresh after bulk operation failed");
                    false
                }
            };
        }

        for outcome in &report.outcomes {
            match outcome {
                ItemOutcome::Succeeded { kind, .. } => self.notifier.notify(action.success(*kind)),
                ItemOutcome::Failed { item, kind, error } => {
                    error!(name = %item.name, ?action, error = %error, "Bulk item failed");
                    self.notifier.notify(action.failure(*kind));
                }
                ItemOutcome::NotFound { .. } => {}
            }
        }

        info!(
            ?action,
            path = %origin,
            succeeded = report.succeeded(),
            failed = report.failed(),
            not_found = report.not_found(),
            "Bulk operation settled"
        );

        report
    }
}
