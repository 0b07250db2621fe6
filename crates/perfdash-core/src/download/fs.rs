//! Filesystem host: "clicking" a download anchor saves the blob into a
//! directory.
//!
//! Object URLs are backed by staged temp files inside the download directory;
//! revoking an object URL deletes its staged file. Saved files are written to
//! `<name>.part` first and renamed into place. An existing file is never
//! overwritten: `report.csv` becomes `report (1).csv`, like a browser would.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::blob::Blob;
use super::host::{AnchorHandle, HostDocument, HostError, ObjectUrl, TransientAnchor};
use crate::url_model::download_filename;

const PART_SUFFIX: &str = ".part";
const MAX_NAME_ATTEMPTS: u32 = 1000;

#[derive(Debug)]
pub struct FsDocument {
    download_dir: PathBuf,
    next_id: u64,
    staged: HashMap<ObjectUrl, NamedTempFile>,
    anchors: HashMap<u64, TransientAnchor>,
    saved: Vec<PathBuf>,
}

impl FsDocument {
    /// Host saving into `download_dir`, created if missing.
    pub fn new(download_dir: impl Into<PathBuf>) -> Result<Self, HostError> {
        let download_dir = download_dir.into();
        fs::create_dir_all(&download_dir).map_err(|e| {
            HostError::io(format!("create download dir {}", download_dir.display()), e)
        })?;
        Ok(Self {
            download_dir,
            next_id: 0,
            staged: HashMap::new(),
            anchors: HashMap::new(),
            saved: Vec::new(),
        })
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Paths of files saved so far, in click order.
    pub fn saved_paths(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Object URLs whose staged file has not been released yet.
    pub fn live_object_urls(&self) -> usize {
        self.staged.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn save(&self, staged: &Path, suggested: &str) -> Result<PathBuf, HostError> {
        let final_path = unique_path(&self.download_dir, &download_filename(suggested))?;
        let part = part_path(&final_path);
        fs::copy(staged, &part)
            .map_err(|e| HostError::io(format!("write {}", part.display()), e))?;
        fs::rename(&part, &final_path).map_err(|e| {
            HostError::io(
                format!("rename {} to {}", part.display(), final_path.display()),
                e,
            )
        })?;
        Ok(final_path)
    }
}

impl HostDocument for FsDocument {
    fn create_object_url(&mut self, blob: &Blob) -> Result<ObjectUrl, HostError> {
        let mut staged = tempfile::Builder::new()
            .prefix(".perfdash-")
            .suffix(".blob")
            .tempfile_in(&self.download_dir)
            .map_err(|e| HostError::io("create staging file", e))?;
        staged
            .write_all(blob.bytes())
            .and_then(|()| staged.flush())
            .map_err(|e| HostError::io("write staging file", e))?;

        let url = ObjectUrl::new(format!("blob:perfdash/{}", self.next_id()));
        tracing::debug!(url = %url, bytes = blob.len(), mime = blob.mime(), "staged blob");
        self.staged.insert(url.clone(), staged);
        Ok(url)
    }

    fn revoke_object_url(&mut self, url: &ObjectUrl) {
        // Dropping the temp file deletes it.
        if self.staged.remove(url).is_some() {
            tracing::debug!(url = %url, "revoked object URL");
        }
    }

    fn append_anchor(&mut self, anchor: TransientAnchor) -> Result<AnchorHandle, HostError> {
        let id = self.next_id();
        self.anchors.insert(id, anchor);
        Ok(AnchorHandle(id))
    }

    fn click(&mut self, anchor: AnchorHandle) -> Result<(), HostError> {
        let attached = self
            .anchors
            .get(&anchor.0)
            .ok_or(HostError::DetachedAnchor(anchor.0))?;
        let staged = self
            .staged
            .get(&attached.href)
            .ok_or_else(|| HostError::UnknownObjectUrl(attached.href.clone()))?;
        let path = self.save(staged.path(), &attached.download)?;
        tracing::info!(path = %path.display(), "saved download");
        self.saved.push(path);
        Ok(())
    }

    fn remove_anchor(&mut self, anchor: AnchorHandle) {
        self.anchors.remove(&anchor.0);
    }
}

/// `file.csv` → `file.csv.part`.
fn part_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(PART_SUFFIX);
    PathBuf::from(o)
}

/// First of `name`, `stem (1).ext`, `stem (2).ext`, ... that does not exist in `dir`.
fn unique_path(dir: &Path, name: &str) -> Result<PathBuf, HostError> {
    let first = dir.join(name);
    if !first.exists() {
        return Ok(first);
    }
    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    };
    for n in 1..=MAX_NAME_ATTEMPTS {
        let candidate = dir.join(format!("{stem} ({n}){ext}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(HostError::io(
        format!("no free filename for {name} in {}", dir.display()),
        std::io::Error::from(std::io::ErrorKind::AlreadyExists),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        let p = part_path(Path::new("/tmp/report.csv"));
        assert_eq!(p.to_string_lossy(), "/tmp/report.csv.part");
    }

    #[test]
    fn unique_path_numbers_collisions() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            unique_path(dir.path(), "report.csv").unwrap(),
            dir.path().join("report.csv")
        );
        fs::write(dir.path().join("report.csv"), b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "report.csv").unwrap(),
            dir.path().join("report (1).csv")
        );
        fs::write(dir.path().join("report (1).csv"), b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "report.csv").unwrap(),
            dir.path().join("report (2).csv")
        );
    }

    #[test]
    fn unique_path_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes"), b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "notes").unwrap(),
            dir.path().join("notes (1)")
        );
    }

    #[test]
    fn revoke_deletes_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = FsDocument::new(dir.path()).unwrap();
        let url = doc.create_object_url(&Blob::untyped(b"abc".to_vec())).unwrap();
        let staged = doc.staged[&url].path().to_path_buf();
        assert!(staged.exists());
        doc.revoke_object_url(&url);
        assert!(!staged.exists());
        assert_eq!(doc.live_object_urls(), 0);
    }
}
