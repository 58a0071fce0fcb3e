//! Transient preview of items being dragged inside the browser.

use serde::Serialize;
use tracing::trace;

use filedrop_core::types::{DirectoryListing, ListedItem, SelectedItem};

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragItemType {
    /// Items of the listing being moved around.
    MovableItem,
    /// Files coming from the operating system.
    NativeFile,
}

/// Pointer position relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// State of the drag layer at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragSnapshot {
    pub is_dragging: bool,
    pub item_type: Option<DragItemType>,
    pub selected: Vec<SelectedItem>,
    pub offset: Option<PointerOffset>,
}

impl DragSnapshot {
    /// An in-progress drag of listing items.
    pub fn moving(selected: Vec<SelectedItem>, offset: Option<PointerOffset>) -> Self {
        Self {
            is_dragging: true,
            item_type: Some(DragItemType::MovableItem),
            selected,
            offset,
        }
    }
}

/// How the listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLayout {
    #[default]
    Table,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewIcon {
    Folder,
    Image,
    Pdf,
    Text,
}

impl PreviewIcon {
    pub fn of(item: &ListedItem) -> Self {
        if item.is_folder {
            Self::Folder
        } else if item.content_type.starts_with("image/") {
            Self::Image
        } else if item.content_type == "application/pdf" {
            Self::Pdf
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    /// Stable `{cid}_{name}` key.
    pub key: String,
    pub name: String,
    pub is_folder: bool,
    pub icon: PreviewIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragPreview {
    pub layout: PreviewLayout,
    /// CSS translate for the pointer offset; `None` keeps the preview hidden.
    pub transform: Option<String>,
    pub entries: Vec<PreviewEntry>,
}

/// Maps a live drag selection onto the current listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragPreviewProjector {
    layout: PreviewLayout,
}

impl DragPreviewProjector {
    pub fn new(layout: PreviewLayout) -> Self {
        Self { layout }
    }

    /// Build the preview, or `None` when no listing items are being dragged.
    pub fn project(&self, drag: &DragSnapshot, listing: &DirectoryListing) -> Option<DragPreview> {
        if !drag.is_dragging || drag.item_type != Some(DragItemType::MovableItem) {
            return None;
        }

        Some(DragPreview {
            layout: self.layout,
            transform: drag
                .offset
                .map(|PointerOffset { x, y }| format!("translate({x}px, {y}px)")),
            entries: resolve_entries(&drag.selected, listing),
        })
    }
}

/// Selected items still present in `listing`, in selection order.
///
/// Items removed while the drag was in progress are skipped.
pub fn resolve_entries(selected: &[SelectedItem], listing: &DirectoryListing) -> Vec<PreviewEntry> {
    selected
        .iter()
        .filter_map(|s| {
            let item = listing.resolve(s);
            if item.is_none() {
                trace!(cid = %s.cid, name = %s.name, "Dragged item no longer listed");
            }
            item
        })
        .map(|item| PreviewEntry {
            key: format!("{}_{}", item.cid, item.name),
            name: item.name.clone(),
            is_folder: item.is_folder,
            icon: PreviewIcon::of(item),
        })
        .collect()
}
