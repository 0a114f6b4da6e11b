//! Playlist records exchanged with the signage API.

use serde::{Deserialize, Serialize};

/// Top-level fields submitted with a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistMeta {
    /// Display name of the playlist
    pub name: String,
    /// Layout (style) identifier; selects the slide cap
    pub style_id: u32,
}

impl PlaylistMeta {
    /// Create playlist metadata.
    pub fn new(name: impl Into<String>, style_id: u32) -> Self {
        Self {
            name: name.into(),
            style_id,
        }
    }
}

/// A slide as stored on a saved playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSlide {
    /// Position within the playlist
    pub index: u32,
    /// Remote URL of the slide's media
    pub media: String,
    /// Library asset backing the slide
    pub media_id: i64,
}

/// A saved playlist, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlaylistDetail {
    /// Playlist id
    id: i64,
    /// Display name
    name: String,
    /// Layout identifier
    style_id: u32,
    /// Saved slides, in no guaranteed order
    #[serde(default)]
    slides: Vec<SavedSlide>,
}

impl PlaylistDetail {
    /// Assemble a detail record.
    pub fn new(id: i64, name: impl Into<String>, style_id: u32, slides: Vec<SavedSlide>) -> Self {
        Self {
            id,
            name: name.into(),
            style_id,
            slides,
        }
    }

    /// Metadata to resubmit when editing this playlist.
    pub fn meta(&self) -> PlaylistMeta {
        PlaylistMeta::new(self.name.clone(), self.style_id)
    }
}

/// Server acknowledgement of a created or updated playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Playlist id
    pub id: i64,
    /// Display name
    pub name: String,
}
