//! Integration test: downloads and exports through the filesystem host.
//!
//! Saves text, binary blobs and a CSV export into a temp directory and checks
//! the files on disk, name collisions, and that no staging files are left.

mod common;

use perfdash_core::download::{download_blob, Blob, FsDocument, HostDocument, HostError, ObjectUrl};
use perfdash_core::export::{default_export_name, export_payload};
use perfdash_core::payload::PerformancePayload;
use perfdash_core::url_model::SchemePolicy;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn text_and_blob_downloads_land_on_disk() {
    let dir = tempdir().unwrap();
    let mut doc = FsDocument::new(dir.path()).unwrap();

    download_blob(&mut doc, "hello\n", "notes.txt", None).unwrap();
    let bytes: Vec<u8> = (0u8..=255).collect();
    download_blob(&mut doc, Blob::untyped(bytes.clone()), "raw.bin", None).unwrap();

    assert_eq!(fs::read(dir.path().join("notes.txt")).unwrap(), b"hello\n");
    assert_eq!(fs::read(dir.path().join("raw.bin")).unwrap(), bytes);
    assert_eq!(doc.live_object_urls(), 0);
    assert_eq!(dir_entries(dir.path()), ["notes.txt", "raw.bin"]);
}

#[test]
fn same_name_twice_does_not_overwrite() {
    let dir = tempdir().unwrap();
    let mut doc = FsDocument::new(dir.path()).unwrap();

    download_blob(&mut doc, "one", "report.csv", None).unwrap();
    download_blob(&mut doc, "two", "report.csv", None).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("report.csv")).unwrap(), "one");
    assert_eq!(fs::read_to_string(dir.path().join("report (1).csv")).unwrap(), "two");
    assert_eq!(doc.saved_paths().len(), 2);
}

#[test]
fn hostile_filename_stays_inside_download_dir() {
    let dir = tempdir().unwrap();
    let download_dir = dir.path().join("downloads");
    let mut doc = FsDocument::new(&download_dir).unwrap();

    download_blob(&mut doc, "x", "../../escape.txt", None).unwrap();

    assert_eq!(dir_entries(&download_dir), ["escape.txt"]);
    assert_eq!(dir_entries(dir.path()), ["downloads"]);
}

#[test]
fn empty_filename_falls_back() {
    let dir = tempdir().unwrap();
    let mut doc = FsDocument::new(dir.path()).unwrap();
    download_blob(&mut doc, "x", "", None).unwrap();
    assert_eq!(dir_entries(dir.path()), ["download.bin"]);
}

#[test]
fn click_on_revoked_url_fails() {
    let dir = tempdir().unwrap();
    let mut doc = FsDocument::new(dir.path()).unwrap();
    let url = doc.create_object_url(&Blob::untyped(b"abc".to_vec())).unwrap();
    doc.revoke_object_url(&url);

    let anchor = perfdash_core::download::TransientAnchor::hidden(url, "late.txt");
    let handle = doc.append_anchor(anchor).unwrap();
    let err = doc.click(handle).unwrap_err();
    assert!(matches!(err, HostError::UnknownObjectUrl(ref u) if u == &ObjectUrl::new("blob:perfdash/1")));
    doc.remove_anchor(handle);
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn payload_export_writes_csv() {
    let payload_file = common::fixtures::payload_file();
    let payload = PerformancePayload::from_path(payload_file.path()).unwrap();
    let dir = tempdir().unwrap();
    let mut doc = FsDocument::new(dir.path()).unwrap();

    let name = default_export_name(&payload);
    export_payload(&mut doc, &payload, &name, SchemePolicy::Denylist).unwrap();

    let csv = fs::read_to_string(dir.path().join("performance-2024-Q3.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Atlas,ops,https://atlas.example.com,91.50,9,12,0.7500"));
    assert!(lines[2].starts_with("Beacon,,,40.00"));
    assert!(lines[3].starts_with("Comet,,https://comet.example.org/status,66.25,0,0,0.0000"));
    assert!(!csv.to_lowercase().contains("javascript"));
    assert_eq!(doc.live_object_urls(), 0);
}
