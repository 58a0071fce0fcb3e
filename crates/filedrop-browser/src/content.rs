//! Content-type normalization of listed items.

use std::collections::HashMap;
use std::path::Path;

use filedrop_core::config::ContentTypeConfig;
use filedrop_core::types::{ListedItem, RawItem};

/// Recomputes content types and folder flags for raw listing items.
#[derive(Debug, Clone)]
pub struct ContentTypeNormalizer {
    /// Generic type the server uses when it knows nothing specific.
    opaque_binary: String,
    /// Reserved type marking directories.
    directory: String,
    /// Extension overrides, keyed by lowercase extension.
    guesses: HashMap<String, String>,
}

impl Default for ContentTypeNormalizer {
    fn default() -> Self {
        Self::from_config(&ContentTypeConfig::default())
    }
}

impl ContentTypeNormalizer {
    /// Create a normalizer from configuration.
    pub fn from_config(config: &ContentTypeConfig) -> Self {
        Self {
            opaque_binary: config.opaque_binary.clone(),
            directory: config.directory.clone(),
            guesses: config
                .guesses
                .iter()
                .map(|(ext, mime)| (ext.trim_start_matches('.').to_lowercase(), mime.clone()))
                .collect(),
        }
    }

    /// The directory sentinel.
    pub fn directory_type(&self) -> &str {
        &self.directory
    }

    /// Best-effort content type for a file name. Falls back to the opaque
    /// binary type when the extension is unknown.
    pub fn guess(&self, name: &str) -> String {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        if let Some(ext) = ext {
            if let Some(mime) = self.guesses.get(&ext) {
                return mime.clone();
            }
        }

        mime_guess::from_path(name)
            .first_raw()
            .map(str::to_string)
            .unwrap_or_else(|| self.opaque_binary.clone())
    }

    /// Normalize one raw item.
    ///
    /// A specific server-supplied type is never replaced; only the opaque
    /// binary type is swapped for a guess.
    pub fn normalize(&self, raw: RawItem) -> ListedItem {
        let is_folder = raw.content_type == self.directory;
        let content_type = if raw.content_type == self.opaque_binary {
            self.guess(&raw.name)
        } else {
            raw.content_type
        };

        ListedItem {
            cid: raw.cid,
            name: raw.name,
            content_type,
            is_folder,
            created_at: raw.created_at,
            size: raw.size,
        }
    }

    /// Normalize an already listed item again.
    pub fn renormalize(&self, item: ListedItem) -> ListedItem {
        self.normalize(RawItem {
            cid: item.cid,
            name: item.name,
            content_type: item.content_type,
            size: item.size,
            created_at: item.created_at,
        })
    }
}
