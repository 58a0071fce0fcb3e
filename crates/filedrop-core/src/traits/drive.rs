//! Remote drive collaborator.
//!
//! The drive is opaque to the core: transport, retries, and persistence
//! format are its own concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{BucketContext, FileHandle, RawItem, VirtualPath};

/// A move of one item, optionally across namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Current address of the item.
    pub path: String,
    /// New address of the item.
    pub new_path: String,
    /// Namespace the item currently lives in.
    #[serde(default)]
    pub source: BucketContext,
    /// Namespace to move into; `None` keeps the source namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<BucketContext>,
}

impl MoveRequest {
    /// A move within the default namespace.
    pub fn within(path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            new_path: new_path.into(),
            source: BucketContext::csf(),
            destination: None,
        }
    }

    /// Set the source namespace.
    pub fn from_bucket(mut self, source: BucketContext) -> Self {
        self.source = source;
        self
    }

    /// Set the destination namespace.
    pub fn to_bucket(mut self, destination: BucketContext) -> Self {
        self.destination = Some(destination);
        self
    }
}

/// Trait for the remote object-storage tree.
#[async_trait]
pub trait DriveClient: Send + Sync + std::fmt::Debug + 'static {
    /// List the items of a directory in the given namespace.
    async fn list(&self, path: &VirtualPath, source: &BucketContext) -> AppResult<Vec<RawItem>>;

    /// Move an item, possibly into another namespace.
    async fn move_item(&self, request: MoveRequest) -> AppResult<()>;

    /// Rename an item within its directory.
    async fn rename(&self, path: &str, new_path: &str) -> AppResult<()>;

    /// Upload files into a directory; each file lands under its relative prefix.
    async fn upload(&self, files: Vec<FileHandle>, path: &VirtualPath) -> AppResult<()>;

    /// Create a directory (and any missing parents).
    async fn create_folder(&self, path: &VirtualPath) -> AppResult<()>;
}
