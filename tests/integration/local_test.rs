//! Integration tests against the local filesystem adapters.

mod helpers;

use std::path::Path;
use std::sync::Arc;

use filedrop_browser::BrowserSession;
use filedrop_core::config::{DriveConfig, RemoteConfig};
use filedrop_core::types::{BucketContext, SelectedItem, VirtualPath};
use filedrop_local::{LocalDrive, LocalDropSource};

struct LocalApp {
    _dirs: (tempfile::TempDir, tempfile::TempDir),
    source_root: std::path::PathBuf,
    config: DriveConfig,
    session: BrowserSession,
}

impl LocalApp {
    async fn new() -> Self {
        let drive_dir = tempfile::tempdir().expect("Failed to create drive dir");
        let source_dir = tempfile::tempdir().expect("Failed to create source dir");

        let mut config = DriveConfig::default();
        config.remote = RemoteConfig {
            root_path: drive_dir.path().to_string_lossy().to_string(),
            trash_dir: ".trash".to_string(),
        };
        config.ingest.directory_batch_size = 3;

        let drive = LocalDrive::new(&config.remote, &config.content_types)
            .await
            .expect("Failed to open drive");
        let session = BrowserSession::new(
            Arc::new(drive),
            Arc::new(helpers::RecordingNotifier::default()),
            &config,
        );

        Self {
            source_root: source_dir.path().to_path_buf(),
            _dirs: (drive_dir, source_dir),
            config,
            session,
        }
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.source_root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap_or(Path::new("/"))).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.source_root.join(relative)).unwrap();
    }

    async fn names(&self) -> Vec<String> {
        self.session
            .navigator
            .listing()
            .await
            .items
            .into_iter()
            .map(|i| i.name)
            .collect()
    }
}

#[tokio::test]
async fn test_local_drop_round_trip() {
    let app = LocalApp::new().await;
    for i in 0..7 {
        app.write(&format!("album/track{i}.mp3"), "x");
    }
    app.write("album/cover.png", "png");
    app.mkdir("album/extras/empty");

    app.session
        .open(Some("/music/"), BucketContext::csf())
        .await
        .expect("Open failed");

    let source = LocalDropSource::from_config(&app.config.ingest);
    let entries = source
        .entries(&[app.source_root.join("album")])
        .await
        .expect("Failed to read drop");
    let uploaded = app
        .session
        .ingest_and_upload(entries, &VirtualPath::directory("/music/"))
        .await
        .expect("Upload failed");

    assert_eq!(uploaded.receipt.files, 8);
    assert_eq!(uploaded.receipt.folders_created, 1);
    assert!(uploaded.receipt.refreshed);
    assert_eq!(app.names().await, vec!["album"]);

    app.session
        .navigator
        .navigate("/music/album/", None, true)
        .await
        .expect("Navigation failed");
    let listing = app.session.navigator.listing().await;
    assert_eq!(listing.len(), 9);
    assert!(listing.items[0].is_folder);
    assert_eq!(listing.items[0].name, "extras");
    let cover = listing
        .items
        .iter()
        .find(|i| i.name == "cover.png")
        .expect("cover missing");
    assert_eq!(cover.content_type, "image/png");
}

#[tokio::test]
async fn test_local_trash_and_recover() {
    let app = LocalApp::new().await;
    app.write("notes.txt", "hello");

    app.session
        .open(None, BucketContext::csf())
        .await
        .expect("Open failed");
    let entries = LocalDropSource::default()
        .entries(&[app.source_root.join("notes.txt")])
        .await
        .expect("Failed to read drop");
    app.session
        .ingest_and_upload(entries, &VirtualPath::root())
        .await
        .expect("Upload failed");

    let listing = app.session.navigator.listing().await;
    let selected: Vec<SelectedItem> = listing.items.iter().map(|i| i.identity()).collect();
    let report = app.session.bulk.move_to_trash(&selected).await;
    assert!(report.all_succeeded());
    assert!(app.names().await.is_empty());

    app.session
        .open(None, BucketContext::trash())
        .await
        .expect("Open failed");
    assert_eq!(app.names().await, vec!["notes.txt"]);

    let trashed: Vec<SelectedItem> = app
        .session
        .navigator
        .listing()
        .await
        .items
        .iter()
        .map(|i| i.identity())
        .collect();
    let report = app
        .session
        .bulk
        .recover(&trashed, &VirtualPath::root())
        .await;
    assert!(report.all_succeeded());
    assert!(app.names().await.is_empty());

    app.session
        .open(None, BucketContext::csf())
        .await
        .expect("Open failed");
    assert_eq!(app.names().await, vec!["notes.txt"]);
}

#[tokio::test]
async fn test_local_trash_from_subdirectory_lands_at_trash_root() {
    let app = LocalApp::new().await;
    app.write("notes.txt", "hello");

    app.session
        .open(Some("/docs/"), BucketContext::csf())
        .await
        .expect("Open failed");
    let entries = LocalDropSource::default()
        .entries(&[app.source_root.join("notes.txt")])
        .await
        .expect("Failed to read drop");
    app.session
        .ingest_and_upload(entries, &VirtualPath::directory("/docs/"))
        .await
        .expect("Upload failed");

    let listing = app.session.navigator.listing().await;
    let selected: Vec<SelectedItem> = listing.items.iter().map(|i| i.identity()).collect();
    let report = app.session.bulk.move_to_trash(&selected).await;
    assert!(report.all_succeeded());
    assert!(app.names().await.is_empty());

    app.session
        .open(None, BucketContext::trash())
        .await
        .expect("Open failed");
    assert_eq!(app.names().await, vec!["notes.txt"]);

    let trashed: Vec<SelectedItem> = app
        .session
        .navigator
        .listing()
        .await
        .items
        .iter()
        .map(|i| i.identity())
        .collect();
    let report = app
        .session
        .bulk
        .recover(&trashed, &VirtualPath::directory("/docs/"))
        .await;
    assert!(report.all_succeeded());

    app.session
        .open(Some("/docs/"), BucketContext::csf())
        .await
        .expect("Open failed");
    assert_eq!(app.names().await, vec!["notes.txt"]);
}

#[tokio::test]
async fn test_local_rename() {
    let app = LocalApp::new().await;
    app.write("a.txt", "a");
    app.session
        .open(None, BucketContext::csf())
        .await
        .expect("Open failed");
    let entries = LocalDropSource::default()
        .entries(&[app.source_root.join("a.txt")])
        .await
        .expect("Failed to read drop");
    app.session
        .ingest_and_upload(entries, &VirtualPath::root())
        .await
        .expect("Upload failed");

    app.session
        .bulk
        .rename("/a.txt", "/b.txt")
        .await
        .expect("Rename failed");

    assert_eq!(app.names().await, vec!["b.txt"]);
}
