//! Recursive resolution of one dropped entry.

use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use filedrop_core::config::IngestConfig;
use filedrop_core::error::AppError;
use filedrop_core::traits::{DirectoryEntry, DroppedEntry, FileEntry};
use filedrop_core::types::FileHandle;

/// A soft failure met while walking. The affected subtree counts as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionWarning {
    /// Relative path of the entry that could not be resolved.
    pub path: String,
    /// What went wrong.
    pub error: AppError,
}

/// Files and empty directories found under one entry.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Resolved files, each carrying its relative prefix.
    pub files: Vec<FileHandle>,
    /// Shallowest empty directories, as relative paths ending in `/`.
    pub empty_directories: Vec<String>,
    /// Soft failures.
    pub warnings: Vec<IngestionWarning>,
}

impl WalkOutcome {
    fn absorb(&mut self, other: WalkOutcome) {
        self.files.extend(other.files);
        self.empty_directories.extend(other.empty_directories);
        self.warnings.extend(other.warnings);
    }
}

/// Walks dropped entries into files and empty-directory markers.
#[derive(Debug, Clone, Copy)]
pub struct EntryWalker {
    /// Maximum number of siblings resolved concurrently.
    read_concurrency: usize,
}

impl Default for EntryWalker {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

impl EntryWalker {
    /// Create a walker resolving at most `read_concurrency` siblings at once.
    pub fn new(read_concurrency: usize) -> Self {
        Self {
            read_concurrency: read_concurrency.max(1),
        }
    }

    /// Create a walker from ingestion settings.
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.read_concurrency)
    }

    /// Walk one top-level entry.
    pub async fn walk(&self, entry: DroppedEntry) -> WalkOutcome {
        self.walk_entry(entry, String::new()).await
    }

    fn walk_entry(&self, entry: DroppedEntry, prefix: String) -> BoxFuture<'_, WalkOutcome> {
        Box::pin(async move {
            match entry {
                DroppedEntry::File(file) => self.resolve_file(file.as_ref(), &prefix).await,
                DroppedEntry::Directory(dir) => self.walk_directory(dir.as_ref(), &prefix).await,
            }
        })
    }

    async fn resolve_file(&self, file: &dyn FileEntry, prefix: &str) -> WalkOutcome {
        match file.file().await {
            Ok(handle) => WalkOutcome {
                files: vec![handle.with_relative_path(prefix)],
                ..Default::default()
            },
            Err(e) => {
                let path = format!("{prefix}{}", file.name());
                warn!(path = %path, error = %e, "Failed to resolve dropped file");
                WalkOutcome {
                    warnings: vec![IngestionWarning { path, error: e }],
                    ..Default::default()
                }
            }
        }
    }

    async fn walk_directory(&self, dir: &dyn DirectoryEntry, prefix: &str) -> WalkOutcome {
        let dir_path = format!("{prefix}{}/", dir.name());

        // A single read returns at most one browser-capped batch; keep reading
        // until an empty batch comes back.
        let mut reader = dir.reader();
        let mut children = Vec::new();
        let mut batches = 0usize;
        loop {
            match reader.read_entries().await {
                Ok(batch) if batch.is_empty() => break,
                Ok(batch) => {
                    batches += 1;
                    children.extend(batch);
                }
                Err(e) => {
                    warn!(path = %dir_path, error = %e, "Directory read failed, treating as empty");
                    return WalkOutcome {
                        files: Vec::new(),
                        empty_directories: vec![dir_path.clone()],
                        warnings: vec![IngestionWarning {
                            path: dir_path,
                            error: AppError::ingestion_read(format!(
                                "Could not read directory: {}",
                                e.message
                            )),
                        }],
                    };
                }
            }
        }

        debug!(path = %dir_path, children = children.len(), batches, "Directory read");

        let child_outcomes: Vec<WalkOutcome> = stream::iter(children)
            .map(|child| self.walk_entry(child, dir_path.clone()))
            .buffered(self.read_concurrency)
            .collect()
            .await;

        let mut outcome = WalkOutcome::default();
        for child in child_outcomes {
            outcome.absorb(child);
        }

        if outcome.files.is_empty() {
            // The whole subtree is empty: one marker for the shallowest directory
            // replaces any markers its children produced.
            outcome.empty_directories = vec![dir_path];
        }

        outcome
    }
}
