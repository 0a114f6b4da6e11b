//! Slide entries.

use crate::PreviewHandle;
use marquee_core::{LibraryMedia, MediaType, UploadFile};

/// Where a slide came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SourceKind {
    /// Picked from the media library
    #[display("library")]
    Library,
    /// Freshly uploaded file
    #[display("upload")]
    Upload,
}

/// Backing data of a slide; fixed when the slide is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideSource {
    /// Library asset referenced by id
    Library {
        /// Library asset id
        media_id: i64,
    },
    /// Uploaded file sent with the playlist on save
    Upload {
        /// The raw file
        file: UploadFile,
        /// Preview allocated for the file
        preview: PreviewHandle,
    },
}

/// One entry in a playlist's ordered slide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideItem {
    url: String,
    media_type: MediaType,
    source: SlideSource,
}

impl SlideItem {
    /// Slide backed by a library asset.
    pub fn library(media: &LibraryMedia) -> Self {
        Self {
            url: media.url.clone(),
            media_type: MediaType::Image,
            source: SlideSource::Library { media_id: media.id },
        }
    }

    pub(crate) fn upload(file: UploadFile, preview: PreviewHandle) -> Self {
        Self {
            url: preview.url(),
            media_type: MediaType::Image,
            source: SlideSource::Upload { file, preview },
        }
    }

    /// Displayable URL: the preview for uploads, the remote URL for library slides.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Media type; always an image for interactive playlists.
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Backing data.
    pub fn source(&self) -> &SlideSource {
        &self.source
    }

    /// Provenance of the slide.
    pub fn kind(&self) -> SourceKind {
        match self.source {
            SlideSource::Library { .. } => SourceKind::Library,
            SlideSource::Upload { .. } => SourceKind::Upload,
        }
    }

    /// Library asset id, for library slides.
    pub fn media_id(&self) -> Option<i64> {
        match self.source {
            SlideSource::Library { media_id } => Some(media_id),
            SlideSource::Upload { .. } => None,
        }
    }

    /// Uploaded file, for upload slides.
    pub fn file(&self) -> Option<&UploadFile> {
        match &self.source {
            SlideSource::Upload { file, .. } => Some(file),
            SlideSource::Library { .. } => None,
        }
    }

    /// Preview handle, for upload slides.
    pub fn preview(&self) -> Option<&PreviewHandle> {
        match &self.source {
            SlideSource::Upload { preview, .. } => Some(preview),
            SlideSource::Library { .. } => None,
        }
    }
}
