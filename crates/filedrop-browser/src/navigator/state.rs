//! Navigation state and its transitions.
//!
//! Transitions never touch the network. Each one that needs fresh data
//! returns a [`ListingRequest`]; the caller performs the fetch and hands the
//! outcome back through [`NavigatorState::complete`] or
//! [`NavigatorState::fail`].

use serde::Serialize;
use tracing::debug;

use filedrop_core::types::{BucketContext, Crumb, DirectoryListing, VirtualPath};

/// A listing fetch issued by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// Monotonic ticket; later requests carry larger tickets.
    pub ticket: u64,
    /// Directory to fetch.
    pub path: VirtualPath,
    /// Namespace to fetch from.
    pub bucket: BucketContext,
    /// Whether this request raised the loading flag.
    pub show_loading: bool,
}

/// Current path, bucket, listing, and loading flag of one browser view.
#[derive(Debug, Clone, Serialize)]
pub struct NavigatorState {
    current_path: VirtualPath,
    bucket: BucketContext,
    listing: DirectoryListing,
    /// Ticket of the request that raised the loading flag.
    #[serde(skip)]
    loading_ticket: Option<u64>,
    /// Ticket of the request whose listing is currently shown.
    #[serde(skip)]
    applied_ticket: u64,
    #[serde(skip)]
    next_ticket: u64,
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new(BucketContext::csf())
    }
}

impl NavigatorState {
    /// Start at the root of `bucket` with an empty listing.
    pub fn new(bucket: BucketContext) -> Self {
        Self {
            current_path: VirtualPath::root(),
            listing: DirectoryListing::new(VirtualPath::root(), bucket.clone(), Vec::new()),
            bucket,
            loading_ticket: None,
            applied_ticket: 0,
            next_ticket: 1,
        }
    }

    /// Current directory.
    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    /// Current bucket.
    pub fn bucket(&self) -> &BucketContext {
        &self.bucket
    }

    /// Last applied listing.
    pub fn listing(&self) -> &DirectoryListing {
        &self.listing
    }

    /// Whether a loading fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading_ticket.is_some()
    }

    /// Breadcrumbs for the current path.
    pub fn crumbs(&self) -> Vec<Crumb> {
        self.current_path.crumbs()
    }

    /// Move to `path`, optionally switching bucket, and request its listing.
    ///
    /// A path missing its leading or trailing `/` is rewritten and the
    /// transition runs again with the rewritten form, so only normalized
    /// paths are ever stored.
    pub fn navigate(
        &mut self,
        path: &str,
        bucket: Option<BucketContext>,
        show_loading: bool,
    ) -> ListingRequest {
        if !VirtualPath::is_normalized(path) {
            let rewritten = VirtualPath::directory(path);
            debug!(from = path, to = %rewritten, "Normalizing navigation path");
            return self.navigate(rewritten.as_str(), bucket, show_loading);
        }

        self.current_path = VirtualPath::directory(path);
        if let Some(bucket) = bucket {
            self.bucket = bucket;
        }
        self.request(show_loading)
    }

    /// Request a listing of the current path only if it equals `path`.
    ///
    /// Used by work that started while the user was looking at `path` and
    /// finished later: it must not pull the user anywhere.
    pub fn refresh_if_same_path(&mut self, path: &str) -> Option<ListingRequest> {
        let path = VirtualPath::directory(path);
        if path != self.current_path {
            debug!(path = %path, current = %self.current_path, "Skipping refresh, user moved on");
            return None;
        }
        Some(self.request(false))
    }

    /// Request a listing of the current path.
    pub fn refresh(&mut self) -> ListingRequest {
        self.request(false)
    }

    /// Apply the listing fetched for `request`.
    ///
    /// The listing is dropped if the navigator has since moved to another
    /// path or bucket, or if a newer fetch has already been applied. Returns
    /// `true` when the listing was applied.
    pub fn complete(&mut self, request: &ListingRequest, listing: DirectoryListing) -> bool {
        self.settle(request);

        if request.path != self.current_path || request.bucket != self.bucket {
            debug!(
                path = %request.path,
                current = %self.current_path,
                "Discarding listing for a path no longer shown"
            );
            return false;
        }
        if request.ticket < self.applied_ticket {
            debug!(ticket = request.ticket, "Discarding out-of-order listing");
            return false;
        }

        self.applied_ticket = request.ticket;
        self.listing = listing;
        true
    }

    /// Record that the fetch for `request` failed. The listing is kept.
    pub fn fail(&mut self, request: &ListingRequest) {
        self.settle(request);
    }

    fn settle(&mut self, request: &ListingRequest) {
        if self.loading_ticket == Some(request.ticket) {
            self.loading_ticket = None;
        }
    }

    fn request(&mut self, show_loading: bool) -> ListingRequest {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        if show_loading {
            self.loading_ticket = Some(ticket);
        }
        ListingRequest {
            ticket,
            path: self.current_path.clone(),
            bucket: self.bucket.clone(),
            show_loading,
        }
    }
}
