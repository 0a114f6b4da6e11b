//! Marquee - interactive playlist editing for digital signage.
//!
//! Operators build playlists of image slides whose count is fixed by the
//! chosen layout. Slides come from fresh uploads or from the shared media
//! library, and the result is saved to the signage REST API as a multipart
//! form.
//!
//! # Architecture
//!
//! - `marquee_error` - Error types
//! - `marquee_core` - Core data types (uploads, library media, playlists)
//! - `marquee_slides` - Validation, layout caps, the slide collection
//! - `marquee_client` - API client and configuration
//!
//! This crate re-exports everything and adds [`PlaylistEditor`], the editing
//! session that ties a slide collection to the library selection and the API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod editor;
pub mod telemetry;

pub use editor::{EditPlan, EditSummary, PlaylistEditor};
pub use marquee_client::{
    ApiConfig, ApiConfigBuilder, MarqueeConfig, PlaylistApi, PlaylistClient, into_multipart,
};
pub use marquee_core::{
    LibraryMedia, MediaPage, MediaType, PlaylistDetail, PlaylistMeta, PlaylistSummary, SavedSlide,
    UploadFile,
};
pub use marquee_error::{
    ConfigError, HttpError, ImageRejection, IoError, JsonError, MarqueeError, MarqueeErrorKind,
    MarqueeResult, SlideError, SlideErrorKind,
};
pub use marquee_slides::{
    AddReport, FormValue, LayoutCap, LayoutCaps, LayoutEntry, MergeReport, PreviewHandle,
    PreviewRegistry, SlideCollection, SlideForm, SlideItem, SlideSource, SourceKind,
    is_valid_image_file, is_valid_image_url, validation,
};
