//! Collaborator traits defined in `filedrop-core` and implemented by adapters.

pub mod drive;
pub mod entry;
pub mod notifier;

pub use drive::{DriveClient, MoveRequest};
pub use entry::{DirectoryEntry, DirectoryReader, DroppedEntry, FileEntry};
pub use notifier::{LogNotifier, Notifier, Toast, ToastAppearance};
