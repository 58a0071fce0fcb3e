//! Directory listings and the selection identities resolved against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::BucketContext;
use super::path::VirtualPath;

/// An item as returned by the remote drive, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    /// Content identifier.
    pub cid: String,
    /// Item name within its directory.
    pub name: String,
    /// Content type reported by the server.
    pub content_type: String,
    /// Size in bytes, when known.
    #[serde(default)]
    pub size: Option<u64>,
    /// Creation time, when known.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Whether a listed item is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A regular file.
    File,
    /// A directory.
    Folder,
}

impl ItemKind {
    /// Lowercase noun used in messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }

    /// Capitalized noun used at the start of messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Folder => "Folder",
        }
    }
}

/// A normalized listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedItem {
    /// Content identifier.
    pub cid: String,
    /// Item name within its directory.
    pub name: String,
    /// Normalized content type.
    pub content_type: String,
    /// Derived from the directory sentinel content type.
    pub is_folder: bool,
    /// Creation time, when known.
    pub created_at: Option<DateTime<Utc>>,
    /// Size in bytes, when known.
    pub size: Option<u64>,
}

impl ListedItem {
    /// File or folder.
    pub fn kind(&self) -> ItemKind {
        if self.is_folder {
            ItemKind::Folder
        } else {
            ItemKind::File
        }
    }

    /// Selection identity of this item.
    pub fn identity(&self) -> SelectedItem {
        SelectedItem::new(&self.cid, &self.name)
    }
}

/// Contents of one directory at one point in time.
///
/// Listings are replaced wholesale on every successful fetch and never
/// patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// Directory the listing belongs to.
    pub path: VirtualPath,
    /// Namespace the listing belongs to.
    pub bucket: BucketContext,
    /// Items in server order.
    pub items: Vec<ListedItem>,
}

impl DirectoryListing {
    /// Create a listing.
    pub fn new(path: VirtualPath, bucket: BucketContext, items: Vec<ListedItem>) -> Self {
        Self {
            path,
            bucket,
            items,
        }
    }

    /// Find the entry matching a selection identity (cid and name).
    pub fn resolve(&self, selected: &SelectedItem) -> Option<&ListedItem> {
        self.items.iter().find(|item| selected.matches(item))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the directory has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Minimal identity of a selected item.
///
/// The cid alone is not unique: identical content stored under two names
/// shares a cid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedItem {
    /// Content identifier.
    pub cid: String,
    /// Item name.
    pub name: String,
}

impl SelectedItem {
    /// Create a selection identity.
    pub fn new(cid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if both cid and name match the listed item.
    pub fn matches(&self, item: &ListedItem) -> bool {
        self.cid == item.cid && self.name == item.name
    }
}

impl From<&ListedItem> for SelectedItem {
    fn from(item: &ListedItem) -> Self {
        item.identity()
    }
}
