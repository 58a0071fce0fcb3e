//! Wiring of every browser component around one drive.

use std::sync::Arc;

use tracing::info;

use filedrop_core::config::DriveConfig;
use filedrop_core::traits::{DriveClient, DroppedEntry, Notifier};
use filedrop_core::types::{BucketContext, BucketKind, VirtualPath};
use filedrop_core::AppResult;
use filedrop_ingest::{IngestionCollector, IngestionWarning, SizeRejection};

use crate::bulk::BulkOperationCoordinator;
use crate::lister::ContentLister;
use crate::navigator::PathNavigator;
use crate::operations::OperationPolicy;
use crate::preview::DragPreviewProjector;
use crate::upload::{UploadCoordinator, UploadReceipt};

/// Outcome of a walked drop that was uploaded.
#[derive(Debug, Clone)]
pub struct DropUpload {
    pub receipt: UploadReceipt,
    /// Files left out because of their size.
    pub rejected: Vec<SizeRejection>,
    /// Entries that could not be read.
    pub warnings: Vec<IngestionWarning>,
}

/// One browser view: a navigator and the coordinators that act on it.
///
/// All components share the same navigator, so they observe and refresh
/// the same state.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    pub navigator: PathNavigator,
    pub bulk: BulkOperationCoordinator,
    pub uploads: UploadCoordinator,
    pub collector: IngestionCollector,
    pub projector: DragPreviewProjector,
    pub policy: OperationPolicy,
}

impl BrowserSession {
    pub fn new(
        client: Arc<dyn DriveClient>,
        notifier: Arc<dyn Notifier>,
        config: &DriveConfig,
    ) -> Self {
        let lister = ContentLister::from_config(client.clone(), &config.content_types);
        let navigator = PathNavigator::new(lister, BucketContext::csf());

        Self {
            bulk: BulkOperationCoordinator::new(
                client.clone(),
                navigator.clone(),
                notifier.clone(),
            ),
            uploads: UploadCoordinator::new(client, navigator.clone(), notifier),
            collector: IngestionCollector::from_config(&config.ingest),
            projector: DragPreviewProjector::default(),
            policy: OperationPolicy::default(),
            navigator,
        }
    }

    /// Initial navigation. The loading flag is shown when a path was asked
    /// for or the bucket is not the default one.
    pub async fn open(&self, path: Option<&str>, bucket: BucketContext) -> AppResult<()> {
        let show_loading = path.is_some() || bucket.kind != BucketKind::Csf;
        self.navigator
            .navigate(path.unwrap_or("/"), Some(bucket), show_loading)
            .await
    }

    /// Walk a drop and upload everything it contains into `target`.
    pub async fn ingest_and_upload(
        &self,
        items: Vec<DroppedEntry>,
        target: &VirtualPath,
    ) -> AppResult<DropUpload> {
        let mut ingestion = self.collector.collect(items).await;
        info!(
            path = %target,
            files = ingestion.files.len(),
            empty_dirs = ingestion.empty_directory_paths.len(),
            "Uploading ingested drop"
        );
        let rejected = std::mem::take(&mut ingestion.rejected);
        let warnings = std::mem::take(&mut ingestion.warnings);
        let receipt = self.uploads.upload_ingested(ingestion, target).await?;
        Ok(DropUpload {
            receipt,
            rejected,
            warnings,
        })
    }
}
