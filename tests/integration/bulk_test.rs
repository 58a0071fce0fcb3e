//! Integration tests for bulk and single-item operations.

mod helpers;

use filedrop_browser::{FileOperation, ItemOutcome};
use filedrop_core::error::ErrorKind;
use filedrop_core::traits::ToastAppearance;
use filedrop_core::types::{BucketContext, SelectedItem, VirtualPath};

use helpers::{raw_file, raw_folder};

fn sel(name: &str) -> SelectedItem {
    SelectedItem::new(format!("cid-{name}"), name)
}

async fn browser_at_docs() -> helpers::TestBrowser {
    let app = helpers::TestBrowser::new();
    app.drive.set_listing(
        "/docs/",
        BucketContext::csf(),
        vec![raw_file("a"), raw_file("b"), raw_file("c"), raw_folder("sub")],
    );
    app.go("/docs/").await;
    app
}

#[tokio::test]
async fn test_trash_with_one_failure() {
    let app = browser_at_docs().await;
    app.drive.fail_path("/docs/b");

    let report = app
        .session
        .bulk
        .move_to_trash(&[sel("a"), sel("b"), sel("c")])
        .await;

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert!(matches!(&report.outcomes[1], ItemOutcome::Failed { item, .. } if item.name == "b"));

    let calls = app.drive.calls();
    assert!(calls.contains(&"move csf:/docs/a -> trash:/a".to_string()));
    assert!(calls.contains(&"move csf:/docs/c -> trash:/c".to_string()));

    // One listing for the navigation, exactly one refresh after the batch.
    assert_eq!(app.drive.count("list /docs/"), 2);

    let errors: Vec<_> = app
        .notifier
        .toasts()
        .into_iter()
        .filter(|t| t.appearance == ToastAppearance::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "There was an error deleting this file");
}

#[tokio::test]
async fn test_trash_folder_wording() {
    let app = browser_at_docs().await;

    app.session.bulk.move_to_trash(&[sel("sub")]).await;

    assert_eq!(app.notifier.messages(), vec!["Folder deleted successfully"]);
}

#[tokio::test]
async fn test_vanished_item_is_skipped() {
    let app = browser_at_docs().await;

    let report = app
        .session
        .bulk
        .move_to_trash(&[sel("ghost"), sel("a")])
        .await;

    assert_eq!(report.not_found(), 1);
    assert!(matches!(
        &report.outcomes[0],
        ItemOutcome::NotFound { error, .. } if error.is(ErrorKind::NotFoundInListing)
    ));
    assert_eq!(report.succeeded(), 1);
    assert_eq!(app.drive.count("move"), 1);
    assert_eq!(app.notifier.messages(), vec!["File deleted successfully"]);
}

#[tokio::test]
async fn test_cid_alone_does_not_resolve() {
    let app = browser_at_docs().await;

    let report = app
        .session
        .bulk
        .move_to_trash(&[SelectedItem::new("cid-a", "not-a")])
        .await;

    assert_eq!(report.not_found(), 1);
    assert!(!report.refreshed);
    assert_eq!(app.drive.count("list /docs/"), 1);
}

#[tokio::test]
async fn test_no_refresh_after_user_left() {
    let app = browser_at_docs().await;
    let gate = app.drive.hold_path("/docs/a");

    let bulk = app.session.bulk.clone();
    let batch = tokio::spawn(async move { bulk.move_to_trash(&[sel("a")]).await });
    app.drive.wait_for("move csf:/docs/a").await;

    app.go("/elsewhere/").await;
    gate.notify_one();
    let report = batch.await.expect("Batch task panicked");

    assert_eq!(report.succeeded(), 1);
    assert!(!report.refreshed);
    assert_eq!(app.drive.count("list /docs/"), 1);
}

#[tokio::test]
async fn test_recover_from_trash() {
    let app = helpers::TestBrowser::new();
    app.drive
        .set_listing("/", BucketContext::trash(), vec![raw_file("old.txt")]);
    app.session
        .open(None, BucketContext::trash())
        .await
        .expect("Open failed");

    let report = app
        .session
        .bulk
        .recover(&[sel("old.txt")], &VirtualPath::directory("/restored"))
        .await;

    assert!(report.all_succeeded());
    assert!(app
        .drive
        .calls()
        .contains(&"move trash:/old.txt -> csf:/restored/old.txt".to_string()));
    assert_eq!(app.notifier.messages(), vec!["File recovered successfully"]);
}

#[tokio::test]
async fn test_move_items_into_folder() {
    let app = browser_at_docs().await;

    let report = app
        .session
        .bulk
        .move_items(&[sel("a"), sel("sub")], &VirtualPath::directory("/archive"))
        .await;

    assert_eq!(report.succeeded(), 2);
    let calls = app.drive.calls();
    assert!(calls.contains(&"move csf:/docs/a -> csf:/archive/a".to_string()));
    assert!(calls.contains(&"move csf:/docs/sub -> csf:/archive/sub".to_string()));
}

#[tokio::test]
async fn test_rename_refreshes_unconditionally() {
    let app = browser_at_docs().await;

    app.session
        .bulk
        .rename("/docs/a", "/docs/z")
        .await
        .expect("Rename failed");
    assert_eq!(app.drive.count("list /docs/"), 2);

    app.drive.fail_path("/docs/b");
    let err = app
        .session
        .bulk
        .rename("/docs/b", "/docs/y")
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Remote));
    assert_eq!(app.drive.count("list /docs/"), 3);
}

#[tokio::test]
async fn test_bulk_operations_offered_for_selection() {
    let app = browser_at_docs().await;
    let listing = app.session.navigator.listing().await;

    let file = listing.resolve(&sel("a")).expect("a missing");
    let folder = listing.resolve(&sel("sub")).expect("sub missing");

    let policy = &app.session.policy;
    assert_eq!(
        policy.allowed_bulk_operations(&[file]),
        vec![FileOperation::Delete, FileOperation::Move]
    );
    assert_eq!(
        policy.allowed_bulk_operations(&[file, folder]),
        vec![FileOperation::Move]
    );
}
