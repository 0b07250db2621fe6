//! In-memory host that records every call. Used by tests and embedders that
//! want to inspect downloads without a real document.

use std::collections::BTreeMap;

use super::blob::Blob;
use super::host::{AnchorHandle, HostDocument, HostError, ObjectUrl, TransientAnchor};

/// A download the memory host "saved" when an anchor was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub filename: String,
    pub blob: Blob,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    next_id: u64,
    object_urls: BTreeMap<ObjectUrl, Blob>,
    anchors: BTreeMap<u64, TransientAnchor>,
    issued_urls: Vec<ObjectUrl>,
    created: usize,
    revoked: usize,
    saved: Vec<SavedDownload>,
    reject_clicks: bool,
    unsupported: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose `click` always fails after the anchor is attached.
    pub fn rejecting_clicks() -> Self {
        Self {
            reject_clicks: true,
            ..Self::default()
        }
    }

    /// Host without object URL support.
    pub fn without_object_urls() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked
    }

    /// Object URLs created and not yet revoked.
    pub fn live_object_urls(&self) -> usize {
        self.object_urls.len()
    }

    /// Every object URL ever handed out, in order.
    pub fn issued_urls(&self) -> &[ObjectUrl] {
        &self.issued_urls
    }

    pub fn attached_anchors(&self) -> usize {
        self.anchors.len()
    }

    pub fn saved(&self) -> &[SavedDownload] {
        &self.saved
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl HostDocument for MemoryDocument {
    fn create_object_url(&mut self, blob: &Blob) -> Result<ObjectUrl, HostError> {
        if self.unsupported {
            return Err(HostError::Unsupported);
        }
        let url = ObjectUrl::new(format!("blob:memory/{}", self.next_id()));
        self.object_urls.insert(url.clone(), blob.clone());
        self.issued_urls.push(url.clone());
        self.created += 1;
        Ok(url)
    }

    fn revoke_object_url(&mut self, url: &ObjectUrl) {
        self.revoked += 1;
        self.object_urls.remove(url);
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
        if self.reject_clicks {
            return Err(HostError::ClickRejected(anchor.0));
        }
        let blob = self
            .object_urls
            .get(&attached.href)
            .ok_or_else(|| HostError::UnknownObjectUrl(attached.href.clone()))?;
        self.saved.push(SavedDownload {
            filename: attached.download.clone(),
            blob: blob.clone(),
        });
        Ok(())
    }

    fn remove_anchor(&mut self, anchor: AnchorHandle) {
        self.anchors.remove(&anchor.0);
    }
}
