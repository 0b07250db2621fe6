//! In-memory blobs and the content accepted by the download helper.

/// Immutable bytes tagged with a MIME type, like a browser `Blob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    /// Blob with an empty type, as `new Blob([bytes])` would produce.
    pub fn untyped(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, String::new())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// What to download: an existing blob (used as-is) or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadContent {
    Text(String),
    Blob(Blob),
}

impl DownloadContent {
    /// Turns the content into a blob. `mime` only applies to text.
    pub fn into_blob(self, mime: &str) -> Blob {
        match self {
            DownloadContent::Blob(blob) => blob,
            DownloadContent::Text(text) => Blob::new(text.into_bytes(), mime),
        }
    }
}

impl From<String> for DownloadContent {
    fn from(text: String) -> Self {
        DownloadContent::Text(text)
    }
}

impl From<&str> for DownloadContent {
    fn from(text: &str) -> Self {
        DownloadContent::Text(text.to_string())
    }
}

impl From<Blob> for DownloadContent {
    fn from(blob: Blob) -> Self {
        DownloadContent::Blob(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_takes_the_given_mime() {
        let blob = DownloadContent::from("a,b\n").into_blob("text/csv");
        assert_eq!(blob.bytes(), b"a,b\n");
        assert_eq!(blob.mime(), "text/csv");
    }

    #[test]
    fn blob_keeps_its_own_mime() {
        let original = Blob::new(vec![0u8, 1, 2], "application/pdf");
        let blob = DownloadContent::from(original.clone()).into_blob("text/plain");
        assert_eq!(blob, original);
    }

    #[test]
    fn untyped_blob_has_empty_mime() {
        let blob = Blob::untyped(b"xyz".to_vec());
        assert_eq!(blob.mime(), "");
        assert_eq!(blob.len(), 3);
        assert!(!blob.is_empty());
    }
}
