//! Local paths presented as dropped entries.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::trace;

use filedrop_core::config::IngestConfig;
use filedrop_core::error::{AppError, ErrorKind};
use filedrop_core::result::AppResult;
use filedrop_core::traits::{DirectoryEntry, DirectoryReader, DroppedEntry, FileEntry};
use filedrop_core::types::{FileHandle, FileOrigin};

/// Builds [`DroppedEntry`] trees from local paths.
#[derive(Debug, Clone, Copy)]
pub struct LocalDropSource {
    /// Maximum number of children returned by one directory read.
    batch_size: usize,
}

impl Default for LocalDropSource {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

impl LocalDropSource {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.directory_batch_size)
    }

    /// The entry for one path, as if it had been dropped on its own.
    pub async fn entry(&self, path: &Path) -> AppResult<DroppedEntry> {
        let meta = fs::metadata(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Path not found: {}", path.display()))
            } else {
                AppError::with_source(
                    ErrorKind::IngestionRead,
                    format!("Failed to read {}", path.display()),
                    e,
                )
            }
        })?;
        Ok(self.entry_of(path.to_path_buf(), meta.is_dir()))
    }

    /// Entries for several paths, in order.
    pub async fn entries(&self, paths: &[PathBuf]) -> AppResult<Vec<DroppedEntry>> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            entries.push(self.entry(path).await?);
        }
        Ok(entries)
    }

    fn entry_of(&self, path: PathBuf, is_dir: bool) -> DroppedEntry {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if is_dir {
            DroppedEntry::Directory(Box::new(LocalDirectory {
                name,
                path,
                source: *self,
            }))
        } else {
            DroppedEntry::File(Box::new(LocalFile { name, path }))
        }
    }
}

#[derive(Debug)]
struct LocalFile {
    name: String,
    path: PathBuf,
}

#[async_trait]
impl FileEntry for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn file(&self) -> AppResult<FileHandle> {
        let meta = fs::metadata(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::IngestionRead,
                format!("Failed to read {}", self.path.display()),
                e,
            )
        })?;
        Ok(FileHandle {
            name: self.name.clone(),
            size_bytes: meta.len(),
            content_type: mime_guess::from_path(&self.path)
                .first_raw()
                .map(str::to_string),
            relative_path: String::new(),
            origin: FileOrigin::Local(self.path.clone()),
        })
    }
}

#[derive(Debug)]
struct LocalDirectory {
    name: String,
    path: PathBuf,
    source: LocalDropSource,
}

impl DirectoryEntry for LocalDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn reader(&self) -> Box<dyn DirectoryReader> {
        Box::new(LocalReader {
            path: self.path.clone(),
            source: self.source,
            dir: None,
            done: false,
        })
    }
}

/// Returns at most `batch_size` children per read; opens the directory on
/// the first read.
struct LocalReader {
    path: PathBuf,
    source: LocalDropSource,
    dir: Option<fs::ReadDir>,
    done: bool,
}

impl fmt::Debug for LocalReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalReader")
            .field("path", &self.path)
            .field("opened", &self.dir.is_some())
            .field("done", &self.done)
            .finish()
    }
}

impl LocalReader {
    fn read_error(&self, e: std::io::Error) -> AppError {
        AppError::with_source(
            ErrorKind::IngestionRead,
            format!("Failed to read directory {}", self.path.display()),
            e,
        )
    }
}

#[async_trait]
impl DirectoryReader for LocalReader {
    async fn read_entries(&mut self) -> AppResult<Vec<DroppedEntry>> {
        if self.done {
            return Ok(Vec::new());
        }
        if self.dir.is_none() {
            let opened = fs::read_dir(&self.path).await.map_err(|e| self.read_error(e))?;
            self.dir = Some(opened);
        }

        let mut batch = Vec::new();
        while batch.len() < self.source.batch_size {
            let next = match self.dir.as_mut() {
                Some(dir) => dir.next_entry().await,
                None => Ok(None),
            };
            let Some(entry) = next.map_err(|e| self.read_error(e))? else {
                self.done = true;
                break;
            };
            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| self.read_error(e))?
                .is_dir();
            batch.push(self.source.entry_of(entry.path(), is_dir));
        }

        trace!(path = %self.path.display(), entries = batch.len(), "Read directory batch");
        Ok(batch)
    }
}
