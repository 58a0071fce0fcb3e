//! Shared navigation state for one browser view.

mod state;

pub use state::{ListingRequest, NavigatorState};

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use filedrop_core::types::{BucketContext, Crumb, DirectoryListing, VirtualPath};
use filedrop_core::AppResult;

use crate::lister::ContentLister;

/// Owns the current path, bucket, listing, and loading flag.
///
/// Cloning yields another handle to the same state. Locks are never held
/// across a remote call.
#[derive(Debug, Clone)]
pub struct PathNavigator {
    state: Arc<RwLock<NavigatorState>>,
    lister: ContentLister,
    updates: Arc<watch::Sender<DirectoryListing>>,
}

impl PathNavigator {
    /// Create a navigator at the root of `bucket`.
    pub fn new(lister: ContentLister, bucket: BucketContext) -> Self {
        let state = NavigatorState::new(bucket);
        let (updates, _) = watch::channel(state.listing().clone());
        Self {
            state: Arc::new(RwLock::new(state)),
            lister,
            updates: Arc::new(updates),
        }
    }

    /// Receive every listing that gets applied.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryListing> {
        self.updates.subscribe()
    }

    /// Navigate to `path`, optionally switching bucket, and fetch its listing.
    ///
    /// A failed fetch leaves the previous listing in place, clears the
    /// loading flag if this call raised it, and is returned to the caller.
    pub async fn navigate(
        &self,
        path: &str,
        bucket: Option<BucketContext>,
        show_loading: bool,
    ) -> AppResult<()> {
        let request = self.state.write().await.navigate(path, bucket, show_loading);
        info!(path = %request.path, bucket = %request.bucket, "Navigating");
        self.fetch(request).await
    }

    /// Refetch the current listing only if the current path equals `path`.
    ///
    /// Returns `Ok(true)` when a refresh was performed.
    pub async fn refresh_if_same_path(&self, path: &str) -> AppResult<bool> {
        let request = self.state.write().await.refresh_if_same_path(path);
        match request {
            Some(request) => {
                self.fetch(request).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Refetch the current listing.
    pub async fn refresh(&self) -> AppResult<()> {
        let request = self.state.write().await.refresh();
        self.fetch(request).await
    }

    /// Navigate to the directory of the breadcrumb at `index`.
    pub async fn navigate_to_crumb(&self, index: usize) -> AppResult<()> {
        let crumbs = self.crumbs().await;
        let path = match crumbs.get(index) {
            Some(crumb) => crumb.path.clone(),
            None => VirtualPath::root(),
        };
        self.navigate(path.as_str(), None, true).await
    }

    /// A copy of the whole state.
    pub async fn snapshot(&self) -> NavigatorState {
        self.state.read().await.clone()
    }

    /// The directory being shown.
    pub async fn current_path(&self) -> VirtualPath {
        self.state.read().await.current_path().clone()
    }

    /// The bucket being shown.
    pub async fn bucket(&self) -> BucketContext {
        self.state.read().await.bucket().clone()
    }

    /// The last applied listing.
    pub async fn listing(&self) -> DirectoryListing {
        self.state.read().await.listing().clone()
    }

    /// Whether a fetch that requested the loading indicator is still running.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    /// Breadcrumbs for the current path.
    pub async fn crumbs(&self) -> Vec<Crumb> {
        self.state.read().await.crumbs()
    }

    async fn fetch(&self, request: ListingRequest) -> AppResult<()> {
        match self.lister.list(&request.path, &request.bucket).await {
            Ok(listing) => {
                let applied = self.state.write().await.complete(&request, listing.clone());
                if applied {
                    self.updates.send_replace(listing);
                } else {
                    debug!(ticket = request.ticket, path = %request.path, "Listing not applied");
                }
                Ok(())
            }
            Err(e) => {
                self.state.write().await.fail(&request);
                warn!(path = %request.path, error = %e, "Failed to refresh listing");
                Err(e)
            }
        }
    }
}
