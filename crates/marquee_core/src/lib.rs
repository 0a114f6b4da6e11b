//! Core data types for the Marquee playlist toolkit.
//!
//! These are the values exchanged between the slide editor, the signage API
//! client and the command-line shell.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod playlist;
mod upload;

pub use media::{LibraryMedia, MediaPage, MediaType};
pub use playlist::{PlaylistDetail, PlaylistMeta, PlaylistSummary, SavedSlide};
pub use upload::UploadFile;
