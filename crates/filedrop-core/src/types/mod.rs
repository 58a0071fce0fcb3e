//! Core type definitions used across the Filedrop workspace.

pub mod bucket;
pub mod file;
pub mod listing;
pub mod path;
pub mod upload;

pub use bucket::{BucketContext, BucketKind};
pub use file::{FileHandle, FileOrigin};
pub use listing::{DirectoryListing, ItemKind, ListedItem, RawItem, SelectedItem};
pub use path::{Crumb, VirtualPath};
pub use upload::{PendingUpload, UploadId};
