//! Capability interface over the document/window state a download needs.

use std::fmt;

use super::blob::Blob;

/// Temporary reference to a blob held by the host (`blob:` URL).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An invisible anchor that exists only long enough to be clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientAnchor {
    pub href: ObjectUrl,
    /// Value of the `download` attribute (suggested filename).
    pub download: String,
    pub hidden: bool,
}

impl TransientAnchor {
    pub fn hidden(href: ObjectUrl, download: impl Into<String>) -> Self {
        Self {
            href,
            download: download.into(),
            hidden: true,
        }
    }
}

/// Handle to an anchor attached to the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorHandle(pub u64);

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("object URLs are not supported by this host")]
    Unsupported,
    #[error("unknown object URL {0}")]
    UnknownObjectUrl(ObjectUrl),
    #[error("anchor {0} is not attached to the document")]
    DetachedAnchor(u64),
    #[error("click on anchor {0} was not dispatched")]
    ClickRejected(u64),
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl HostError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        HostError::Io {
            context: context.into(),
            source,
        }
    }
}

/// The document/window operations used by [`download_blob`](super::download_blob).
///
/// `revoke_object_url` and `remove_anchor` cannot fail: releasing an unknown
/// URL or a detached anchor is a no-op, matching browser behavior.
pub trait HostDocument {
    fn create_object_url(&mut self, blob: &Blob) -> Result<ObjectUrl, HostError>;

    fn revoke_object_url(&mut self, url: &ObjectUrl);

    fn append_anchor(&mut self, anchor: TransientAnchor) -> Result<AnchorHandle, HostError>;

    /// Activates the anchor, starting the host's native save behavior.
    fn click(&mut self, anchor: AnchorHandle) -> Result<(), HostError>;

    fn remove_anchor(&mut self, anchor: AnchorHandle);
}
