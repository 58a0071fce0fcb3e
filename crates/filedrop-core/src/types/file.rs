//! Concrete file payloads produced by drop ingestion.

use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;

/// Where the bytes of a dropped file can be read from.
#[derive(Debug, Clone)]
pub enum FileOrigin {
    /// A file on the local disk.
    Local(PathBuf),
    /// Bytes already held in memory.
    Memory(Bytes),
}

/// A resolved file ready to be handed to the uploader.
#[derive(Debug, Clone, Serialize)]
pub struct FileHandle {
    /// File name without any directory part.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Content type reported by the drop source, if any.
    pub content_type: Option<String>,
    /// Directory prefix relative to the drop root, e.g. `photos/2024/`.
    /// Empty for files dropped at the top level.
    pub relative_path: String,
    /// Payload location.
    #[serde(skip)]
    pub origin: FileOrigin,
}

impl FileHandle {
    /// Create an in-memory file at the top level of a drop.
    pub fn in_memory(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            size_bytes: data.len() as u64,
            content_type: None,
            relative_path: String::new(),
            origin: FileOrigin::Memory(data),
        }
    }

    /// Return the same file placed under a relative directory prefix.
    pub fn with_relative_path(mut self, prefix: impl Into<String>) -> Self {
        self.relative_path = prefix.into();
        self
    }

    /// Prefix plus name, e.g. `photos/2024/cat.png`.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.relative_path, self.name)
    }
}
