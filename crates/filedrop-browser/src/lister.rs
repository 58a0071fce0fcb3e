//! Fetching and normalizing directory listings.

use std::sync::Arc;

use tracing::{debug, warn};

use filedrop_core::config::ContentTypeConfig;
use filedrop_core::error::{AppError, ErrorKind};
use filedrop_core::traits::DriveClient;
use filedrop_core::types::{BucketContext, DirectoryListing, VirtualPath};
use filedrop_core::AppResult;

use crate::content::ContentTypeNormalizer;

/// Lists a directory through the [`DriveClient`] and normalizes every item.
#[derive(Debug, Clone)]
pub struct ContentLister {
    client: Arc<dyn DriveClient>,
    normalizer: ContentTypeNormalizer,
}

impl ContentLister {
    /// Create a lister.
    pub fn new(client: Arc<dyn DriveClient>, normalizer: ContentTypeNormalizer) -> Self {
        Self { client, normalizer }
    }

    /// Create a lister from content-type settings.
    pub fn from_config(client: Arc<dyn DriveClient>, config: &ContentTypeConfig) -> Self {
        Self::new(client, ContentTypeNormalizer::from_config(config))
    }

    /// The normalizer applied to every item.
    pub fn normalizer(&self) -> &ContentTypeNormalizer {
        &self.normalizer
    }

    /// Fetch and normalize the contents of `path` in `bucket`.
    pub async fn list(
        &self,
        path: &VirtualPath,
        bucket: &BucketContext,
    ) -> AppResult<DirectoryListing> {
        let raw = self.client.list(path, bucket).await.map_err(|e| {
            warn!(path = %path, bucket = %bucket, error = %e, "Listing failed");
            if e.is(ErrorKind::Remote) {
                e
            } else {
                AppError::remote(format!("Failed to list {path}: {}", e.message))
            }
        })?;

        let items: Vec<_> = raw
            .into_iter()
            .map(|item| self.normalizer.normalize(item))
            .collect();

        debug!(path = %path, bucket = %bucket, items = items.len(), "Listing fetched");

        Ok(DirectoryListing::new(path.clone(), bucket.clone(), items))
    }
}
