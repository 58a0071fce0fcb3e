//! Integration tests for drop ingestion.

mod helpers;

use std::collections::{BTreeSet, HashSet};

use filedrop_core::config::{DriveConfig, IngestConfig};
use filedrop_core::error::ErrorKind;
use filedrop_core::types::VirtualPath;
use filedrop_ingest::IngestionCollector;

use helpers::{dir, drop_of, file, paged_dir, unreadable_dir};

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[tokio::test]
async fn test_paginated_directory_yields_every_file_once() {
    let children = (0..250).map(|i| file(&format!("f{i}.txt"), 1)).collect();
    let result = IngestionCollector::default()
        .collect(drop_of(vec![paged_dir("big", children, 100)]))
        .await;

    assert_eq!(result.files.len(), 250);
    let unique: HashSet<String> = result.files.iter().map(|f| f.full_path()).collect();
    assert_eq!(unique.len(), 250);
    assert!(unique.contains("big/f0.txt"));
    assert!(unique.contains("big/f249.txt"));
}

#[tokio::test]
async fn test_page_boundary_exact_multiple() {
    let children = (0..200).map(|i| file(&format!("f{i}"), 1)).collect();
    let result = IngestionCollector::default()
        .collect(drop_of(vec![paged_dir("even", children, 100)]))
        .await;
    assert_eq!(result.files.len(), 200);
}

#[tokio::test]
async fn test_directory_of_empty_directories_collapses() {
    let result = IngestionCollector::default()
        .collect(drop_of(vec![dir("A", vec![dir("B", vec![]), dir("C", vec![])])]))
        .await;

    assert!(result.files.is_empty());
    assert_eq!(result.empty_directory_paths, set(&["A/"]));
}

#[tokio::test]
async fn test_mixed_drop() {
    let result = IngestionCollector::default()
        .collect(drop_of(vec![
            file("top.txt", 3),
            dir(
                "photos",
                vec![
                    file("cat.png", 10),
                    dir("2024", vec![file("dog.png", 20)]),
                    dir("empty", vec![dir("deeper", vec![])]),
                ],
            ),
            dir("blank", vec![]),
        ]))
        .await;

    let paths: Vec<String> = result.files.iter().map(|f| f.full_path()).collect();
    assert_eq!(paths, vec!["top.txt", "photos/cat.png", "photos/2024/dog.png"]);
    assert_eq!(result.empty_directory_paths, set(&["photos/empty/", "blank/"]));
    assert_eq!(result.total_bytes(), 33);
}

#[tokio::test]
async fn test_unreadable_directory_is_not_fatal() {
    let result = IngestionCollector::default()
        .collect(drop_of(vec![dir(
            "A",
            vec![file("ok.txt", 1), unreadable_dir("locked")],
        )]))
        .await;

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.empty_directory_paths, set(&["A/locked/"]));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].error.is(ErrorKind::IngestionRead));
}

#[tokio::test]
async fn test_oversized_file_reported_once() {
    let config = IngestConfig {
        max_file_size_bytes: Some(100),
        ..Default::default()
    };
    let result = IngestionCollector::from_config(&config)
        .collect(drop_of(vec![
            file("huge.iso", 500),
            file("huge.iso", 500),
            file("small.txt", 100),
        ]))
        .await;

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].name, "small.txt");
    assert_eq!(result.rejected.len(), 1);
    assert_eq!(result.rejected[0].path, "huge.iso");
    assert_eq!(result.rejected[0].size_bytes, 500);
    assert!(result.rejected[0].error.is(ErrorKind::RejectedBySize));
}

#[tokio::test]
async fn test_ingest_and_upload_creates_empty_folders() {
    let app = helpers::TestBrowser::with_config(&DriveConfig::default());
    app.go("/dest/").await;

    let uploaded = app
        .session
        .ingest_and_upload(
            drop_of(vec![dir(
                "A",
                vec![file("a.txt", 1), dir("B", vec![]), dir("C", vec![file("c.txt", 2)])],
            )]),
            &VirtualPath::directory("/dest/"),
        )
        .await
        .expect("Upload failed");

    let calls = app.drive.calls();
    assert!(calls.contains(&"mkdir /dest/A/B/".to_string()));
    assert!(calls.contains(&"upload /dest/A/ [a.txt]".to_string()));
    assert!(calls.contains(&"upload /dest/A/C/ [c.txt]".to_string()));
    assert_eq!(uploaded.receipt.files, 2);
    assert_eq!(uploaded.receipt.folders_created, 1);
    assert!(uploaded.receipt.refreshed);
    assert_eq!(app.drive.count("list /dest/"), 2);
}
