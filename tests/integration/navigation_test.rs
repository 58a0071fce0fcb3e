//! Integration tests for path navigation and listing.

mod helpers;

use filedrop_browser::{DragPreviewProjector, DragSnapshot, PreviewIcon};
use filedrop_core::error::ErrorKind;
use filedrop_core::types::{BucketContext, FileHandle, SelectedItem, VirtualPath};

use helpers::{raw_file, raw_folder, raw_typed};

#[tokio::test]
async fn test_initial_state() {
    let app = helpers::TestBrowser::new();
    let state = app.session.navigator.snapshot().await;

    assert!(state.current_path().is_root());
    assert_eq!(state.bucket(), &BucketContext::csf());
    assert!(!state.is_loading());
    assert!(app.drive.calls().is_empty());
}

#[tokio::test]
async fn test_navigation_normalizes_and_lists() {
    let app = helpers::TestBrowser::new();
    app.drive.set_listing(
        "/docs/",
        BucketContext::csf(),
        vec![raw_folder("sub"), raw_file("report.pdf"), raw_typed("blob.bin", "image/png")],
    );

    app.session
        .navigator
        .navigate("docs", None, true)
        .await
        .expect("Navigation failed");

    let state = app.session.navigator.snapshot().await;
    assert_eq!(state.current_path().as_str(), "/docs/");
    assert!(!state.is_loading());

    let items = &state.listing().items;
    assert!(items[0].is_folder);
    assert_eq!(items[1].content_type, "application/pdf");
    // A specific server type is never replaced by a guess.
    assert_eq!(items[2].content_type, "image/png");
}

#[tokio::test]
async fn test_failed_listing_preserves_previous_listing() {
    let app = helpers::TestBrowser::new();
    app.drive
        .set_listing("/", BucketContext::csf(), vec![raw_file("keep.txt")]);
    app.drive.fail_path("/broken/");
    app.go("/").await;

    let err = app
        .session
        .navigator
        .navigate("/broken/", None, true)
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::Remote));
    let state = app.session.navigator.snapshot().await;
    assert!(!state.is_loading());
    assert_eq!(state.listing().items[0].name, "keep.txt");
}

#[tokio::test]
async fn test_upload_settling_elsewhere_does_not_refresh() {
    let app = helpers::TestBrowser::new();
    app.go("/x/").await;

    let gate = app.drive.hold_path("/y/");
    let uploads = app.session.uploads.clone();
    let upload = tokio::spawn(async move {
        uploads
            .upload(vec![FileHandle::in_memory("a.txt", "a")], &VirtualPath::directory("/y/"))
            .await
    });
    app.drive.wait_for("upload /y/").await;

    app.go("/z/").await;
    gate.notify_one();
    let receipt = upload
        .await
        .expect("Upload task panicked")
        .expect("Upload failed");

    assert!(!receipt.refreshed);
    assert_eq!(app.drive.count("list /y/"), 0);
    assert_eq!(app.drive.count("list /x/"), 1);
    assert_eq!(app.drive.count("list /z/"), 1);
    assert_eq!(
        app.session.navigator.current_path().await.as_str(),
        "/z/"
    );
}

#[tokio::test]
async fn test_slow_listing_for_abandoned_path_is_discarded() {
    let app = helpers::TestBrowser::new();
    app.drive
        .set_listing("/slow/", BucketContext::csf(), vec![raw_file("old.txt")]);
    app.drive
        .set_listing("/fast/", BucketContext::csf(), vec![raw_file("new.txt")]);

    let gate = app.drive.hold_path("/slow/");
    let navigator = app.session.navigator.clone();
    let slow = tokio::spawn(async move { navigator.navigate("/slow/", None, true).await });
    app.drive.wait_for("list /slow/").await;

    app.session
        .navigator
        .navigate("/fast/", None, true)
        .await
        .expect("Navigation failed");
    gate.notify_one();
    slow.await
        .expect("Navigation task panicked")
        .expect("Navigation failed");

    let state = app.session.navigator.snapshot().await;
    assert_eq!(state.current_path().as_str(), "/fast/");
    assert_eq!(state.listing().items[0].name, "new.txt");
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_switching_bucket() {
    let app = helpers::TestBrowser::new();
    app.drive
        .set_listing("/", BucketContext::trash(), vec![raw_file("gone.txt")]);

    app.session
        .open(None, BucketContext::trash())
        .await
        .expect("Open failed");

    let state = app.session.navigator.snapshot().await;
    assert_eq!(state.bucket(), &BucketContext::trash());
    assert_eq!(state.listing().items[0].name, "gone.txt");
}

#[tokio::test]
async fn test_breadcrumbs() {
    let app = helpers::TestBrowser::new();
    app.go("/a/b/c/").await;

    let crumbs = app.session.navigator.crumbs().await;
    let texts: Vec<&str> = crumbs.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);

    app.session
        .navigator
        .navigate_to_crumb(1)
        .await
        .expect("Navigation failed");
    assert_eq!(
        app.session.navigator.current_path().await.as_str(),
        "/a/b/"
    );
}

#[tokio::test]
async fn test_drag_preview_skips_items_deleted_during_drag() {
    let app = helpers::TestBrowser::new();
    app.drive.set_listing(
        "/",
        BucketContext::csf(),
        vec![raw_file("a.png"), raw_folder("dir")],
    );
    app.go("/").await;

    let drag = DragSnapshot::moving(
        vec![
            SelectedItem::new("cid-a.png", "a.png"),
            SelectedItem::new("cid-dir", "dir"),
        ],
        None,
    );

    // "a.png" disappears before the next projection.
    app.drive
        .set_listing("/", BucketContext::csf(), vec![raw_folder("dir")]);
    app.session.navigator.refresh().await.expect("Refresh failed");

    let listing = app.session.navigator.listing().await;
    let preview = DragPreviewProjector::default()
        .project(&drag, &listing)
        .expect("Preview missing");
    assert_eq!(preview.entries.len(), 1);
    assert_eq!(preview.entries[0].icon, PreviewIcon::Folder);
    assert_eq!(preview.entries[0].key, "cid-dir_dir");
}
