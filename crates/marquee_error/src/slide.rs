//! Slide editing error types.

/// Why a candidate file or URL was not accepted as an image slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageRejection {
    /// Extension is explicitly disallowed (icons)
    #[display("disallowed extension")]
    Disallowed,
    /// Extension belongs to a video format
    #[display("video files are not accepted")]
    Video,
    /// Extension is not one of the accepted image extensions
    #[display("unsupported extension")]
    UnsupportedExtension,
    /// Declared content type is not an accepted image type
    #[display("unsupported content type")]
    UnsupportedMime,
}

/// Kinds of slide editing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SlideErrorKind {
    /// The candidate failed image validation
    #[display("Invalid image '{}': {}", name, reason)]
    InvalidImage {
        /// File name or URL of the candidate
        name: String,
        /// Rejection reason
        reason: ImageRejection,
    },
    /// Index does not address an existing slide
    #[display("Slide index {} out of range for {} slides", index, len)]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current number of slides
        len: usize,
    },
}

/// Slide editing error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{SlideError, SlideErrorKind};
///
/// let err = SlideError::new(SlideErrorKind::IndexOutOfRange { index: 5, len: 2 });
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Slide Error: {} at line {} in {}", kind, line, file)]
pub struct SlideError {
    /// The kind of error that occurred
    pub kind: SlideErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SlideError {
    /// Create a new slide error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SlideErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SlideErrorKind {
        &self.kind
    }
}
