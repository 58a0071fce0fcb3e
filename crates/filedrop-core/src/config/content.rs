//! Content-type normalization configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sentinel content types and the extension guess table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeConfig {
    /// Content type the server reports when it knows nothing specific.
    #[serde(default = "default_opaque_binary")]
    pub opaque_binary: String,
    /// Reserved content type marking a listed item as a directory.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Extension (lowercase, without dot) to MIME overrides, consulted
    /// before the built-in guesser.
    #[serde(default)]
    pub guesses: HashMap<String, String>,
}

impl Default for ContentTypeConfig {
    fn default() -> Self {
        Self {
            opaque_binary: default_opaque_binary(),
            directory: default_directory(),
            guesses: HashMap::new(),
        }
    }
}

fn default_opaque_binary() -> String {
    "application/octet-stream".to_string()
}

fn default_directory() -> String {
    "application/chainsafe-files-directory".to_string()
}
