//! Configuration for the signage API and layout table.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`marquee.toml` shipped with this crate)
//! 2. `~/.config/marquee/marquee.toml`
//! 3. `./marquee.toml`
//! 4. Environment variables prefixed `MARQUEE_`, with `__` between sections
//!    (e.g. `MARQUEE_API__TOKEN`)

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use marquee_error::{ConfigError, MarqueeResult};
use marquee_slides::LayoutCaps;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../marquee.toml");

/// Connection settings for the signage REST API.
///
/// # Examples
///
/// ```
/// use marquee_client::ApiConfigBuilder;
///
/// let api = ApiConfigBuilder::default()
///     .base_url("https://signage.example.com/api")
///     .token("secret")
///     .build()
///     .unwrap();
/// assert_eq!(*api.per_page(), 24);
/// assert_eq!(api.endpoint("media"), "https://signage.example.com/api/media");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ApiConfig {
    /// Base URL of the API, without trailing slash
    base_url: String,

    /// Bearer token sent with every request
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,

    /// Page size for media listings
    #[builder(default = "default_per_page()")]
    #[serde(default = "default_per_page")]
    per_page: u32,

    /// Request timeout in seconds
    #[builder(default = "default_timeout_secs()")]
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_per_page() -> u32 {
    24
}

fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level Marquee configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MarqueeConfig {
    /// API connection settings
    api: ApiConfig,

    /// Slide caps per layout
    #[serde(default)]
    layouts: LayoutCaps,
}

impl MarqueeConfig {
    /// Assemble a configuration directly.
    pub fn new(api: ApiConfig, layouts: LayoutCaps) -> Self {
        Self { api, layouts }
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
        Self::deserialize_from(config)
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if missing.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/marquee/marquee.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("marquee").required(false))
            .add_source(Environment::with_prefix("MARQUEE").separator("__"));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;
        Self::deserialize_from(config)
    }

    fn deserialize_from(config: Config) -> MarqueeResult<Self> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        debug!(
            base_url = %parsed.api.base_url,
            layouts = parsed.layouts.len(),
            "Configuration loaded"
        );
        Ok(parsed)
    }
}
