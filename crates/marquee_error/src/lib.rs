//! Error types for the Marquee playlist toolkit.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use marquee_error::{HttpError, MarqueeResult};
//!
//! fn submit() -> MarqueeResult<()> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(submit().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod io;
mod json;
mod slide;

pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;
pub use slide::{ImageRejection, SlideError, SlideErrorKind};
