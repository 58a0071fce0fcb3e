//! Fan-out over every top-level dropped item and merge of the results.

use std::collections::{BTreeSet, HashSet};

use futures::future::join_all;
use tracing::{debug, info};

use filedrop_core::config::IngestConfig;
use filedrop_core::traits::DroppedEntry;
use filedrop_core::types::FileHandle;

use crate::filter::{SizeFilter, SizeRejection};
use crate::walker::{EntryWalker, IngestionWarning, WalkOutcome};

/// Everything recovered from one drop.
#[derive(Debug, Clone, Default)]
pub struct IngestionResult {
    /// Files to upload, in drop order.
    pub files: Vec<FileHandle>,
    /// Shallowest empty directories, relative to the drop root.
    pub empty_directory_paths: BTreeSet<String>,
    /// Files kept out of `files` because of their size.
    pub rejected: Vec<SizeRejection>,
    /// Entries that could not be resolved.
    pub warnings: Vec<IngestionWarning>,
}

impl IngestionResult {
    /// Returns `true` if there is nothing to upload or create.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.empty_directory_paths.is_empty()
    }

    /// Total bytes across accepted files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }
}

/// Drives the [`EntryWalker`] over a whole drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestionCollector {
    walker: EntryWalker,
    filter: SizeFilter,
}

impl IngestionCollector {
    /// Create a collector from its parts.
    pub fn new(walker: EntryWalker, filter: SizeFilter) -> Self {
        Self { walker, filter }
    }

    /// Create a collector from ingestion settings.
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(EntryWalker::from_config(config), SizeFilter::from_config(config))
    }

    /// Walk every top-level item and merge the results.
    ///
    /// Nothing is returned until every walk has settled.
    pub async fn collect(&self, items: Vec<DroppedEntry>) -> IngestionResult {
        let top_level = items.len();
        let outcomes = join_all(items.into_iter().map(|item| self.walker.walk(item))).await;

        let mut files = Vec::new();
        let mut empty_directory_paths = BTreeSet::new();
        let mut warnings = Vec::new();
        for WalkOutcome {
            files: walked,
            empty_directories,
            warnings: walk_warnings,
        } in outcomes
        {
            files.extend(walked);
            empty_directory_paths.extend(empty_directories);
            warnings.extend(walk_warnings);
        }

        let mut result = self.finish(files, empty_directory_paths);
        result.warnings = warnings;

        info!(
            items = top_level,
            files = result.files.len(),
            empty_dirs = result.empty_directory_paths.len(),
            rejected = result.rejected.len(),
            warnings = result.warnings.len(),
            "Drop ingested"
        );

        result
    }

    /// Accept a plain file list (file picker or a drop without folders).
    pub fn collect_files(&self, files: Vec<FileHandle>) -> IngestionResult {
        let result = self.finish(files, BTreeSet::new());
        info!(
            files = result.files.len(),
            rejected = result.rejected.len(),
            "File list ingested"
        );
        result
    }

    fn finish(
        &self,
        files: Vec<FileHandle>,
        empty_directory_paths: BTreeSet<String>,
    ) -> IngestionResult {
        let files = dedupe(files);
        let (files, rejected) = self.filter.apply(files);
        IngestionResult {
            files,
            empty_directory_paths,
            rejected,
            warnings: Vec::new(),
        }
    }
}

/// Keep the first occurrence of each (relative path, size) pair.
fn dedupe(files: Vec<FileHandle>) -> Vec<FileHandle> {
    let mut seen = HashSet::new();
    let before = files.len();
    let files: Vec<FileHandle> = files
        .into_iter()
        .filter(|f| seen.insert((f.full_path(), f.size_bytes)))
        .collect();
    if files.len() != before {
        debug!(dropped = before - files.len(), "Removed duplicate dropped files");
    }
    files
}
