//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, IoError, JsonError, SlideError};

/// Every error a Marquee operation can surface.
///
/// # Examples
///
/// ```
/// use marquee_error::{HttpError, MarqueeError};
///
/// let err: MarqueeError = HttpError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON decoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Local file error
    #[from(IoError)]
    Io(IoError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Slide editing error
    #[from(SlideError)]
    Slide(SlideError),
}

/// Marquee error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }
}

impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
