//! Which operations each kind of item offers.

use std::collections::HashMap;

use serde::Serialize;

use filedrop_core::types::ListedItem;

/// A user-facing operation on one or more items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    Preview,
    Download,
    Info,
    Rename,
    Move,
    Delete,
}

/// Policy grouping of listed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Directory,
    /// Any file; every file gets these operations.
    File,
    Audio,
    Video,
    Image,
    Pdf,
    Text,
}

impl ContentCategory {
    /// Specific category of an item; plain files map to `File`.
    pub fn of(item: &ListedItem) -> Self {
        if item.is_folder {
            return Self::Directory;
        }
        let content_type = item.content_type.as_str();
        match content_type.split('/').next().unwrap_or_default() {
            "audio" => Self::Audio,
            "video" if content_type == "video/mp4" => Self::Video,
            "image" => Self::Image,
            "text" => Self::Text,
            _ if content_type == "application/pdf" => Self::Pdf,
            _ => Self::File,
        }
    }
}

/// Item and bulk operations per content category.
#[derive(Debug, Clone)]
pub struct OperationPolicy {
    item: HashMap<ContentCategory, Vec<FileOperation>>,
    bulk: HashMap<ContentCategory, Vec<FileOperation>>,
}

impl Default for OperationPolicy {
    fn default() -> Self {
        use FileOperation::*;

        let item = HashMap::from([
            (ContentCategory::Directory, vec![Rename, Move, Delete]),
            (ContentCategory::File, vec![Download, Info, Rename, Move, Delete]),
            (ContentCategory::Audio, vec![Preview]),
            (ContentCategory::Video, vec![Preview]),
            (ContentCategory::Image, vec![Preview]),
            (ContentCategory::Pdf, vec![Preview]),
            (ContentCategory::Text, vec![Preview]),
        ]);
        let bulk = HashMap::from([
            (ContentCategory::Directory, vec![Move]),
            (ContentCategory::File, vec![Delete, Move]),
        ]);

        Self { item, bulk }
    }
}

impl OperationPolicy {
    /// Operations offered for one item.
    ///
    /// Files get the generic file operations followed by those of their
    /// specific category.
    pub fn item_operations(&self, item: &ListedItem) -> Vec<FileOperation> {
        let category = ContentCategory::of(item);
        let mut operations = Vec::new();
        if category != ContentCategory::Directory {
            operations.extend(self.lookup(&self.item, ContentCategory::File));
        }
        for op in self.lookup(&self.item, category) {
            if !operations.contains(op) {
                operations.push(*op);
            }
        }
        operations
    }

    /// Operations that every item of a selection allows in bulk.
    ///
    /// An empty selection allows nothing.
    pub fn allowed_bulk_operations(&self, items: &[&ListedItem]) -> Vec<FileOperation> {
        let mut per_item = items.iter().map(|item| {
            let category = if item.is_folder {
                ContentCategory::Directory
            } else {
                ContentCategory::File
            };
            self.lookup(&self.bulk, category)
        });

        let Some(first) = per_item.next() else {
            return Vec::new();
        };
        let mut allowed = first.to_vec();
        for ops in per_item {
            allowed.retain(|op| ops.contains(op));
        }
        allowed
    }

    fn lookup<'a>(
        &self,
        table: &'a HashMap<ContentCategory, Vec<FileOperation>>,
        category: ContentCategory,
    ) -> &'a [FileOperation] {
        table.get(&category).map(Vec::as_slice).unwrap_or_default()
    }
}
