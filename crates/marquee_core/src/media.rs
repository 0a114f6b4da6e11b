//! Library media types.

use serde::{Deserialize, Serialize};

/// Type of media a slide can reference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image (JPEG, PNG, WebP)
    #[display("image")]
    Image,
    /// Video clip
    #[display("video")]
    Video,
}

impl MediaType {
    /// String form used by the signage API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

/// A previously uploaded asset stored server-side.
///
/// This is the shape the media picker hands to the slide editor: the set of
/// currently selected library items.
///
/// # Examples
///
/// ```
/// use marquee_core::LibraryMedia;
///
/// let media = LibraryMedia::new(7, "https://cdn.example.com/7.png");
/// assert_eq!(media.id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryMedia {
    /// Library asset id
    pub id: i64,
    /// Remote URL of the asset
    pub url: String,
}

impl LibraryMedia {
    /// Create a library media reference.
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }
}

/// One page of the media library listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaPage {
    /// Media on this page
    data: Vec<LibraryMedia>,
    /// 1-based page number
    #[serde(default = "first_page")]
    current_page: u32,
    /// Last available page
    #[serde(default = "first_page")]
    last_page: u32,
    /// Total number of media items
    #[serde(default)]
    total: u64,
}

fn first_page() -> u32 {
    1
}

impl MediaPage {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}
