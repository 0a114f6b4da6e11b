//! Signage API client and configuration for Marquee.
//!
//! The slide editor itself never touches the network. This crate is the
//! collaborator that loads saved playlists, lists library media and submits
//! the multipart body produced by [`marquee_slides::SlideCollection::to_form_data`].
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_client::{MarqueeConfig, PlaylistApi, PlaylistClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MarqueeConfig::load()?;
//! let client = PlaylistClient::new(config.api().clone())?;
//! let playlist = client.fetch_playlist(12).await?;
//! println!("{} has {} slides", playlist.name(), playlist.slides().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod multipart;

pub use client::{PlaylistApi, PlaylistClient};
pub use config::{ApiConfig, ApiConfigBuilder, MarqueeConfig};
pub use multipart::into_multipart;
