//! Integration tests for upload coordination.

mod helpers;

use filedrop_core::error::ErrorKind;
use filedrop_core::traits::{DroppedEntry, ToastAppearance};
use filedrop_core::types::{FileHandle, VirtualPath};

use helpers::{dir, drop_of, file};

#[tokio::test]
async fn test_drop_with_folder_is_rejected_whole() {
    let app = helpers::TestBrowser::new();
    app.go("/x/").await;

    let raw: Vec<DroppedEntry> = drop_of(vec![file("a.txt", 1), dir("photos", vec![])]);
    let err = app
        .session
        .uploads
        .handle_drop(
            vec![FileHandle::in_memory("a.txt", "a")],
            &raw,
            &VirtualPath::directory("/x/"),
        )
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::UnsupportedFolderDrop));
    assert_eq!(app.drive.count("upload"), 0);
    assert_eq!(app.drive.count("list /x/"), 1);

    let toasts = app.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].appearance, ToastAppearance::Error);
    assert_eq!(toasts[0].message, "Folder uploads are not supported currently");
}

#[tokio::test]
async fn test_plain_drop_uploads_and_refreshes() {
    let app = helpers::TestBrowser::new();
    app.go("/x/").await;

    let raw = drop_of(vec![file("a.txt", 1), file("b.txt", 1)]);
    let receipt = app
        .session
        .uploads
        .handle_drop(
            vec![
                FileHandle::in_memory("a.txt", "a"),
                FileHandle::in_memory("b.txt", "b"),
            ],
            &raw,
            &VirtualPath::directory("x"),
        )
        .await
        .expect("Upload failed");

    assert_eq!(receipt.files, 2);
    assert!(receipt.refreshed);
    assert!(app
        .drive
        .calls()
        .contains(&"upload /x/ [a.txt,b.txt]".to_string()));
    assert_eq!(app.drive.count("list /x/"), 2);
}

#[tokio::test]
async fn test_refresh_follows_failed_upload() {
    let app = helpers::TestBrowser::new();
    app.go("/x/").await;
    app.drive.fail_path("/x/");

    let err = app
        .session
        .uploads
        .upload(vec![FileHandle::in_memory("a.txt", "a")], &VirtualPath::directory("/x/"))
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::Remote));
    let calls = app.drive.calls();
    let upload_at = calls
        .iter()
        .position(|c| c.starts_with("upload /x/"))
        .expect("upload not called");
    let refresh_at = calls
        .iter()
        .rposition(|c| c.starts_with("list /x/"))
        .expect("refresh not called");
    assert!(refresh_at > upload_at);
}

#[tokio::test]
async fn test_in_flight_uploads_are_tracked() {
    let app = helpers::TestBrowser::new();
    app.go("/").await;
    let gate = app.drive.hold_path("/big/");

    let uploads = app.session.uploads.clone();
    let task = tokio::spawn(async move {
        uploads
            .upload(
                vec![FileHandle::in_memory("movie.mp4", vec![0u8; 64])],
                &VirtualPath::directory("/big/"),
            )
            .await
    });
    app.drive.wait_for("upload /big/").await;

    let in_flight = app.session.uploads.uploads_in_progress().await;
    assert_eq!(in_flight.len(), 1);
    assert_eq!(in_flight[0].target_path.as_str(), "/big/");
    assert_eq!(in_flight[0].total_bytes(), 64);

    gate.notify_one();
    let receipt = task
        .await
        .expect("Upload task panicked")
        .expect("Upload failed");

    assert_eq!(receipt.id, in_flight[0].id);
    assert!(app.session.uploads.uploads_in_progress().await.is_empty());
}
