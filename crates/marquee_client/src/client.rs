//! HTTP client for the signage REST API.

use crate::{ApiConfig, into_multipart};
use marquee_core::{MediaPage, PlaylistDetail, PlaylistSummary};
use marquee_error::{HttpError, JsonError, MarqueeResult};
use marquee_slides::SlideForm;
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

const PLAYLISTS_PATH: &str = "interactive-playlists";
const MEDIA_PATH: &str = "media";

/// Remote operations the playlist editor depends on.
///
/// Failures leave the caller's slide collection untouched, so a failed save
/// can simply be retried.
#[async_trait::async_trait]
pub trait PlaylistApi: Send + Sync {
    /// Create a playlist from a serialized slide form.
    async fn create_playlist(&self, form: SlideForm) -> MarqueeResult<PlaylistSummary>;

    /// Replace an existing playlist's fields and slides.
    async fn update_playlist(&self, id: i64, form: SlideForm) -> MarqueeResult<PlaylistSummary>;

    /// Load a saved playlist for editing.
    async fn fetch_playlist(&self, id: i64) -> MarqueeResult<PlaylistDetail>;

    /// List one page of library media (1-based).
    async fn list_media(&self, page: u32) -> MarqueeResult<MediaPage>;
}

/// Responses may arrive bare or wrapped in a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

/// Client for the signage REST API.
#[derive(Debug, Clone)]
pub struct PlaylistClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl PlaylistClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ApiConfig) -> MarqueeResult<Self> {
        debug!("Creating playlist client");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    /// Get the API configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        match self.config.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> MarqueeResult<T> {
        let response = self.authorize(request).send().await.map_err(|e| {
            error!("Request failed: {}", e);
            HttpError::new(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            HttpError::with_status(status.as_u16(), format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Server returned error");
            return Err(HttpError::with_status(
                status.as_u16(),
                format!("Server returned {}: {}", status, body),
            )
            .into());
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {}", e);
            JsonError::new(format!("Failed to parse response: {}", e))
        })?;
        Ok(envelope.into_inner())
    }
}

#[async_trait::async_trait]
impl PlaylistApi for PlaylistClient {
    #[instrument(skip(self, form), fields(fields = form.len()))]
    async fn create_playlist(&self, form: SlideForm) -> MarqueeResult<PlaylistSummary> {
        let url = self.config.endpoint(PLAYLISTS_PATH);
        debug!("Creating playlist at {}", url);

        let request = self.client.post(&url).multipart(into_multipart(form)?);
        let summary: PlaylistSummary = self.send(request).await?;

        debug!(id = summary.id, "Playlist created");
        Ok(summary)
    }

    #[instrument(skip(self, form), fields(fields = form.len()))]
    async fn update_playlist(&self, id: i64, form: SlideForm) -> MarqueeResult<PlaylistSummary> {
        let url = self.config.endpoint(&format!("{}/{}", PLAYLISTS_PATH, id));
        debug!("Updating playlist at {}", url);

        // Multipart PUT is not parsed by the API; POST with a method override.
        let form = form.with_method_override("PUT");
        let request = self.client.post(&url).multipart(into_multipart(form)?);
        let summary: PlaylistSummary = self.send(request).await?;

        debug!("Playlist updated");
        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn fetch_playlist(&self, id: i64) -> MarqueeResult<PlaylistDetail> {
        let url = self.config.endpoint(&format!("{}/{}", PLAYLISTS_PATH, id));
        debug!("Fetching playlist from {}", url);

        let detail: PlaylistDetail = self.send(self.client.get(&url)).await?;
        debug!(slides = detail.slides().len(), "Playlist fetched");
        Ok(detail)
    }

    #[instrument(skip(self))]
    async fn list_media(&self, page: u32) -> MarqueeResult<MediaPage> {
        let url = self.config.endpoint(MEDIA_PATH);
        let per_page = self.config.per_page().to_string();
        let page_param = page.max(1).to_string();
        debug!("Listing media from {}", url);

        let request = self.client.get(&url).query(&[
            ("page", page_param.as_str()),
            ("per_page", per_page.as_str()),
            ("type", "image"),
        ]);
        let listing: MediaPage = self.send(request).await?;
        debug!(count = listing.data().len(), "Media page fetched");
        Ok(listing)
    }
}
