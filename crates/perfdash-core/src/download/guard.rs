//! RAII guard that tears down a download's host resources when dropped.

use super::host::{AnchorHandle, HostDocument, ObjectUrl};

/// Removes the attached anchor (if any), then revokes the object URL.
///
/// Runs on success and on every early return, so an object URL is never
/// left dangling.
pub(super) struct ReleaseGuard<'h, H: HostDocument + ?Sized> {
    pub(super) host: &'h mut H,
    pub(super) url: ObjectUrl,
    pub(super) anchor: Option<AnchorHandle>,
}

impl<H: HostDocument + ?Sized> Drop for ReleaseGuard<'_, H> {
    fn drop(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            self.host.remove_anchor(anchor);
        }
        self.host.revoke_object_url(&self.url);
    }
}
