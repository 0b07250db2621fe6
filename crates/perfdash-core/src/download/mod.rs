//! Client-side file saving through a transient anchor.
//!
//! [`download_blob`] wraps text in a blob (or reuses a given blob), obtains a
//! temporary object URL from the host, attaches a hidden anchor carrying the
//! `download` filename, clicks it, removes it, and revokes the object URL.
//! The host is reached only through [`HostDocument`], so the helper runs the
//! same against a browser-like document, the filesystem, or a test recorder.

mod blob;
mod fs;
mod guard;
mod host;
mod memory;

pub use blob::{Blob, DownloadContent};
pub use fs::FsDocument;
pub use host::{AnchorHandle, HostDocument, HostError, ObjectUrl, TransientAnchor};
pub use memory::{MemoryDocument, SavedDownload};

use guard::ReleaseGuard;

/// MIME type for text content when the caller gives none.
pub const DEFAULT_TEXT_MIME: &str = "text/plain;charset=utf-8;";

/// Saves `content` as `filename` through the host's native save behavior.
///
/// `mime` applies only to text content; blobs keep their own type. Host
/// failures are returned as-is. The object URL is revoked on every path,
/// and an attached anchor is removed even when the click fails.
pub fn download_blob<H>(
    host: &mut H,
    content: impl Into<DownloadContent>,
    filename: &str,
    mime: Option<&str>,
) -> Result<(), HostError>
where
    H: HostDocument + ?Sized,
{
    let blob = content.into().into_blob(mime.unwrap_or(DEFAULT_TEXT_MIME));
    let url = host.create_object_url(&blob)?;
    let mut guard = ReleaseGuard {
        host,
        url,
        anchor: None,
    };

    let anchor = TransientAnchor::hidden(guard.url.clone(), filename);
    let handle = guard.host.append_anchor(anchor)?;
    guard.anchor = Some(handle);
    guard.host.click(handle)?;

    tracing::info!(filename, bytes = blob.len(), "download triggered");
    Ok(())
}
