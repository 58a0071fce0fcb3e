//! Local filesystem drive.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use filedrop_core::config::{ContentTypeConfig, RemoteConfig};
use filedrop_core::error::{AppError, ErrorKind};
use filedrop_core::result::AppResult;
use filedrop_core::traits::{DriveClient, MoveRequest};
use filedrop_core::types::{BucketContext, BucketKind, FileHandle, FileOrigin, RawItem, VirtualPath};

/// Drive stored under a root directory.
///
/// The default namespace is the root itself; the trash namespace is a
/// reserved subdirectory that never shows up in default listings. Item
/// content types are reported the way a remote server without sniffing
/// would: the directory sentinel for folders, the opaque binary type for
/// every file.
#[derive(Debug, Clone)]
pub struct LocalDrive {
    root: PathBuf,
    trash_dir: String,
    directory_type: String,
    opaque_type: String,
}

impl LocalDrive {
    /// Create a drive rooted at `config.root_path`, creating it if needed.
    pub async fn new(config: &RemoteConfig, content_types: &ContentTypeConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root_path);
        let drive = Self {
            root,
            trash_dir: config.trash_dir.clone(),
            directory_type: content_types.directory.clone(),
            opaque_type: content_types.opaque_binary.clone(),
        };
        for dir in [drive.root.clone(), drive.root.join(&drive.trash_dir)] {
            fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create drive root: {}", dir.display()),
                    e,
                )
            })?;
        }
        Ok(drive)
    }

    /// Root directory of the drive.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_root(&self, bucket: &BucketContext) -> AppResult<PathBuf> {
        match bucket.kind {
            BucketKind::Csf => Ok(self.root.clone()),
            BucketKind::Trash => Ok(self.root.join(&self.trash_dir)),
            BucketKind::Share => Err(AppError::validation(
                "Shared buckets are not available on a local drive",
            )),
        }
    }

    /// Resolve a virtual address inside a namespace.
    fn resolve(&self, bucket: &BucketContext, path: &str) -> AppResult<PathBuf> {
        let clean = path.trim_matches('/');
        if clean.split('/').any(|segment| segment == "..") {
            return Err(AppError::validation(format!("Path escapes the drive: {path}")));
        }
        Ok(self.namespace_root(bucket)?.join(clean))
    }

    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    fn is_reserved(&self, bucket: &BucketContext, path: &VirtualPath, name: &str) -> bool {
        bucket.kind == BucketKind::Csf && path.is_root() && name == self.trash_dir
    }

    async fn write_file(&self, file: &FileHandle, dest: &Path) -> AppResult<()> {
        self.ensure_parent(dest).await?;
        let written = match &file.origin {
            FileOrigin::Memory(data) => fs::write(dest, data).await,
            FileOrigin::Local(source) => fs::copy(source, dest).await.map(|_| ()),
        };
        written.map_err(|e| {
            AppError::with_source(
                ErrorKind::Remote,
                format!("Failed to upload {}", file.full_path()),
                e,
            )
        })?;
        debug!(path = %dest.display(), bytes = file.size_bytes, "Wrote file");
        Ok(())
    }
}

/// Map an I/O failure of a drive call, keeping "not found" distinct.
fn remote_error(e: std::io::Error, message: String) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(message)
    } else {
        AppError::with_source(ErrorKind::Remote, message, e)
    }
}

#[async_trait]
impl DriveClient for LocalDrive {
    async fn list(&self, path: &VirtualPath, source: &BucketContext) -> AppResult<Vec<RawItem>> {
        let full_path = self.resolve(source, path.as_str())?;
        if !full_path.exists() {
            return Ok(Vec::new());
        }

        let mut dir = fs::read_dir(&full_path)
            .await
            .map_err(|e| remote_error(e, format!("Failed to list directory: {path}")))?;

        let mut items = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| remote_error(e, format!("Failed to read directory entry in {path}")))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.is_reserved(source, path, &name) {
                continue;
            }
            let meta = entry
                .metadata()
                .await
                .map_err(|e| remote_error(e, format!("Failed to get metadata: {name}")))?;

            let address = path.join_file(&name);
            let cid = Uuid::new_v5(
                &Uuid::NAMESPACE_URL,
                format!("{}:{address}:{}", source.kind, meta.len()).as_bytes(),
            );

            items.push(RawItem {
                cid: cid.to_string(),
                name,
                content_type: if meta.is_dir() {
                    self.directory_type.clone()
                } else {
                    self.opaque_type.clone()
                },
                size: meta.is_file().then(|| meta.len()),
                created_at: meta.modified().ok().map(chrono::DateTime::<chrono::Utc>::from),
            });
        }

        // Folders first, then by name
        let directory_type = &self.directory_type;
        items.sort_by(|a, b| {
            (b.content_type == *directory_type)
                .cmp(&(a.content_type == *directory_type))
                .then(a.name.cmp(&b.name))
        });

        debug!(path = %path, bucket = %source, items = items.len(), "Listed directory");
        Ok(items)
    }

    async fn move_item(&self, request: MoveRequest) -> AppResult<()> {
        let destination = request.destination.as_ref().unwrap_or(&request.source);
        let from = self.resolve(&request.source, &request.path)?;
        let to = self.resolve(destination, &request.new_path)?;
        self.ensure_parent(&to).await?;

        fs::rename(&from, &to).await.map_err(|e| {
            remote_error(
                e,
                format!("Failed to move {} -> {}", request.path, request.new_path),
            )
        })?;
        debug!(from = %request.path, to = %request.new_path, bucket = %destination, "Moved item");
        Ok(())
    }

    async fn rename(&self, path: &str, new_path: &str) -> AppResult<()> {
        self.move_item(MoveRequest::within(path, new_path)).await
    }

    async fn upload(&self, files: Vec<FileHandle>, path: &VirtualPath) -> AppResult<()> {
        for file in &files {
            let dest = self.resolve(
                &BucketContext::csf(),
                &path.join_dir(&file.relative_path).join_file(&file.name),
            )?;
            self.write_file(file, &dest).await?;
        }
        Ok(())
    }

    async fn create_folder(&self, path: &VirtualPath) -> AppResult<()> {
        let full_path = self.resolve(&BucketContext::csf(), path.as_str())?;
        fs::create_dir_all(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Remote,
                format!("Failed to create folder: {path}"),
                e,
            )
        })?;
        Ok(())
    }
}
