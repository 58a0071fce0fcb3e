//! Maximum-size filtering applied before files reach the uploader.

use std::collections::HashSet;

use tracing::warn;

use filedrop_core::config::IngestConfig;
use filedrop_core::error::AppError;
use filedrop_core::types::FileHandle;

/// A file that was kept out of the upload set because of its size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRejection {
    /// Relative path of the rejected file.
    pub path: String,
    /// Size of the rejected file.
    pub size_bytes: u64,
    /// Always of kind `RejectedBySize`.
    pub error: AppError,
}

/// Drops files above a configured maximum size.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeFilter {
    /// Maximum accepted size; `None` accepts everything.
    max_bytes: Option<u64>,
}

impl SizeFilter {
    /// Create a filter with an optional limit.
    pub fn new(max_bytes: Option<u64>) -> Self {
        Self { max_bytes }
    }

    /// Create a filter from ingestion settings.
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.max_file_size_bytes)
    }

    /// The configured limit.
    pub fn max_bytes(&self) -> Option<u64> {
        self.max_bytes
    }

    /// Split files into accepted and rejected.
    ///
    /// Each distinct oversized file (same relative path and size) is reported
    /// once per call, however many times it appears in `files`.
    pub fn apply(&self, files: Vec<FileHandle>) -> (Vec<FileHandle>, Vec<SizeRejection>) {
        let Some(max) = self.max_bytes else {
            return (files, Vec::new());
        };

        let mut accepted = Vec::with_capacity(files.len());
        let mut rejected = Vec::new();
        let mut reported = HashSet::new();

        for file in files {
            if file.size_bytes <= max {
                accepted.push(file);
                continue;
            }

            let path = file.full_path();
            if reported.insert((path.clone(), file.size_bytes)) {
                warn!(path = %path, size = file.size_bytes, max, "File rejected by size");
                rejected.push(SizeRejection {
                    path,
                    size_bytes: file.size_bytes,
                    error: AppError::rejected_by_size(format!("File is larger than {max} bytes")),
                });
            }
        }

        (accepted, rejected)
    }
}
