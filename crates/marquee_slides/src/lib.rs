//! Capped slide collection editing for Marquee interactive playlists.
//!
//! An interactive playlist is an ordered list of image slides. Its layout
//! decides how many slides it needs. This crate provides:
//!
//! - **Validation**: whether a file or URL is an acceptable slide image
//! - **Layout caps**: a data-driven table from layout id to slide count
//! - **Slide collection**: the ordered, capped list of slides being edited,
//!   with upload, library merge, replace, delete and reorder
//! - **Slide form**: the multipart field list submitted on save
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{LibraryMedia, PlaylistMeta, UploadFile};
//! use marquee_slides::{LayoutCaps, SlideCollection};
//!
//! let caps = LayoutCaps::default();
//! let mut slides = SlideCollection::new(caps.resolve(Some(2)));
//!
//! slides.add_uploads(vec![UploadFile::new("a.jpg", "image/jpeg", vec![1, 2, 3])]);
//! slides.merge_library(&[LibraryMedia::new(9, "https://cdn.example.com/9.png")]);
//! assert_eq!(slides.len(), 2);
//! assert_eq!(slides.remaining(), Some(2));
//!
//! let form = slides.to_form_data(&PlaylistMeta::new("Lobby", 2));
//! assert_eq!(form.text("slide_number"), Some("2"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod form;
mod item;
mod layout;
mod preview;
pub mod validation;

pub use collection::{AddReport, MergeReport, SlideCollection};
pub use form::{FormValue, SlideForm};
pub use item::{SlideItem, SlideSource, SourceKind};
pub use layout::{LayoutCap, LayoutCaps, LayoutEntry};
pub use marquee_error::{ImageRejection, SlideError, SlideErrorKind};
pub use preview::{PreviewHandle, PreviewRegistry};
pub use validation::{is_valid_image_file, is_valid_image_url};
