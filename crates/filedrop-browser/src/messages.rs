//! Toast wording for browser operations.

use filedrop_core::traits::Toast;
use filedrop_core::types::ItemKind;

/// Shown when a drop contains a directory and folder uploads are off.
pub const FOLDER_UPLOAD_UNSUPPORTED: &str = "Folder uploads are not supported currently";

/// A multi-item action that reports per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Move into the trash bucket.
    Trash,
    /// Move within the current bucket.
    Move,
    /// Move out of the trash bucket.
    Recover,
}

impl BulkAction {
    fn past(&self) -> &'static str {
        match self {
            Self::Trash => "deleted",
            Self::Move => "moved",
            Self::Recover => "recovered",
        }
    }

    fn progressive(&self) -> &'static str {
        match self {
            Self::Trash => "deleting",
            Self::Move => "moving",
            Self::Recover => "recovering",
        }
    }

    /// Toast for one item that went through.
    pub fn success(&self, kind: ItemKind) -> Toast {
        Toast::success(format!("{} {} successfully", kind.title(), self.past()))
    }

    /// Toast for one item that failed.
    pub fn failure(&self, kind: ItemKind) -> Toast {
        Toast::error(format!(
            "There was an error {} this {}",
            self.progressive(),
            kind.noun()
        ))
    }
}
