//! Drop ingestion configuration.

use serde::{Deserialize, Serialize};

/// Settings that govern how drop payloads are walked and filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum accepted file size in bytes. `None` accepts any size.
    #[serde(default)]
    pub max_file_size_bytes: Option<u64>,
    /// Maximum number of sibling entries resolved concurrently.
    #[serde(default = "default_read_concurrency")]
    pub read_concurrency: usize,
    /// Page size used by drop sources that paginate directory reads.
    #[serde(default = "default_batch_size")]
    pub directory_batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: None,
            read_concurrency: default_read_concurrency(),
            directory_batch_size: default_batch_size(),
        }
    }
}

fn default_read_concurrency() -> usize {
    8
}

fn default_batch_size() -> usize {
    100
}
