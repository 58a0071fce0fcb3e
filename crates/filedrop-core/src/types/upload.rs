//! In-flight upload records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::file::FileHandle;
use super::path::VirtualPath;

/// Unique identifier for an in-flight upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UploadId(pub Uuid);

impl UploadId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An upload that has been started and has not settled yet.
#[derive(Debug, Clone, Serialize)]
pub struct PendingUpload {
    /// Upload identifier.
    pub id: UploadId,
    /// Directory the files are uploaded into.
    pub target_path: VirtualPath,
    /// Files being uploaded.
    pub files: Vec<FileHandle>,
    /// When the upload started.
    pub started_at: DateTime<Utc>,
}

impl PendingUpload {
    /// Create a pending upload record.
    pub fn new(target_path: VirtualPath, files: Vec<FileHandle>) -> Self {
        Self {
            id: UploadId::new(),
            target_path,
            files,
            started_at: Utc::now(),
        }
    }

    /// Total bytes across all files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }
}
