//! # filedrop-browser
//!
//! Browsing and mutation coordination over a remote drive.
//!
//! [`PathNavigator`] owns the current virtual path, bucket context, listing,
//! and loading flag; every other component reads that state through it and
//! changes it only through its transitions. [`ContentLister`] fetches and
//! normalizes listings, [`BulkOperationCoordinator`] runs multi-item
//! mutations with per-item isolation, [`UploadCoordinator`] starts uploads
//! and refreshes only if the user is still looking at the target directory,
//! and [`DragPreviewProjector`] maps a live drag selection onto the listing.

pub mod bulk;
pub mod content;
pub mod lister;
pub mod messages;
pub mod navigator;
pub mod operations;
pub mod preview;
pub mod session;
pub mod upload;


pub use bulk::{BulkOperationCoordinator, BulkReport, ItemOutcome};
pub use content::ContentTypeNormalizer;
pub use lister::ContentLister;
pub use messages::BulkAction;
pub use navigator::{ListingRequest, NavigatorState, PathNavigator};
pub use operations::{ContentCategory, FileOperation, OperationPolicy};
pub use preview::{
    DragItemType, DragPreview, DragPreviewProjector, DragSnapshot, PointerOffset, PreviewEntry,
    PreviewIcon, PreviewLayout,
};
pub use session::{BrowserSession, DropUpload};
pub use upload::{UploadCoordinator, UploadReceipt};
