//! Drop payload entries.
//!
//! A drop yields a tree of entries. Files resolve asynchronously to a
//! [`FileHandle`]; directories expose a reader whose `read_entries` returns
//! children in batches, with an empty batch signalling exhaustion. A single
//! call never promises the full set.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::FileHandle;

/// A file or directory handle obtained from a drop.
#[derive(Debug)]
pub enum DroppedEntry {
    /// A file leaf.
    File(Box<dyn FileEntry>),
    /// A directory with lazily read children.
    Directory(Box<dyn DirectoryEntry>),
}

impl DroppedEntry {
    /// Entry name.
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => file.name(),
            Self::Directory(dir) => dir.name(),
        }
    }

    /// Returns `true` for directories.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// A dropped file that can be resolved to its payload.
#[async_trait]
pub trait FileEntry: Send + Sync + std::fmt::Debug {
    /// File name.
    fn name(&self) -> &str;

    /// Resolve the file payload. The returned handle has no relative prefix.
    async fn file(&self) -> AppResult<FileHandle>;
}

/// A dropped directory.
pub trait DirectoryEntry: Send + Sync + std::fmt::Debug {
    /// Directory name.
    fn name(&self) -> &str;

    /// Open a fresh paginated reader over the children.
    fn reader(&self) -> Box<dyn DirectoryReader>;
}

/// Paginated reader over a directory's children.
#[async_trait]
pub trait DirectoryReader: Send + std::fmt::Debug {
    /// Read the next batch. An empty batch means the directory is exhausted.
    async fn read_entries(&mut self) -> AppResult<Vec<DroppedEntry>>;
}
