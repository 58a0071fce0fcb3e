//! Remote drive configuration.

use serde::{Deserialize, Serialize};

/// Settings for the drive the CLI talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Root directory of the local drive.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Name of the directory under the root holding the trash namespace.
    #[serde(default = "default_trash_dir")]
    pub trash_dir: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            trash_dir: default_trash_dir(),
        }
    }
}

fn default_root_path() -> String {
    "./data/drive".to_string()
}

fn default_trash_dir() -> String {
    ".trash".to_string()
}
