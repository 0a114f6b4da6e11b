//! Files chosen for upload as new slides.

use marquee_error::{IoError, MarqueeResult};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A file selected by the operator, held in memory until the playlist is saved.
///
/// The declared content type may be empty when the source could not tell.
/// Cloning is cheap; the bytes are shared.
///
/// # Examples
///
/// ```
/// use marquee_core::UploadFile;
///
/// let file = UploadFile::new("lobby.png", "image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(file.name(), "lobby.png");
/// assert_eq!(file.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    content_type: String,
    bytes: Arc<[u8]>,
}

impl UploadFile {
    /// Create an upload from in-memory bytes.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an upload from disk, naming it after the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    #[instrument(skip(path, content_type), fields(path = %path.as_ref().display()))]
    pub async fn from_path(
        path: impl AsRef<Path>,
        content_type: impl Into<String>,
    ) -> MarqueeResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            IoError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(name = %name, size = bytes.len(), "Loaded upload from disk");
        Ok(Self::new(name, content_type, bytes))
    }

    /// File name, including extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared content type; empty when unknown.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
