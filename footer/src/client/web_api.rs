use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::client::StreamingClient;
use crate::error::{FooterError, Result};
use crate::model::{PlaybackSnapshot, VolumeLevel};

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// [`StreamingClient`] backed by the streaming service's HTTP API.
///
/// # Example
///
/// ```rust,no_run
/// use footer::{StreamingClient, WebApiClient};
///
/// # async fn run() -> footer::Result<()> {
/// let client = WebApiClient::new("BQD...access-token")?;
/// let snapshot = client.get_current_playback_state().await?;
/// println!("playing: {}", snapshot.is_playing);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebApiClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl WebApiClient {
    /// Create a client for the public API endpoint
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE, access_token)
    }

    /// Create a client for a custom API endpoint (proxies, test servers)
    pub fn with_base_url(base_url: &str, access_token: impl Into<String>) -> Result<Self> {
        if base_url.is_empty() {
            return Err(FooterError::InvalidConfig("API URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(FooterError::InvalidConfig(
                "API URL must start with http:// or https://".into(),
            ));
        }

        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(FooterError::InvalidConfig("Access token cannot be empty".into()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("footer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
    }

    async fn fetch_snapshot(&self, path: &str) -> Result<PlaybackSnapshot> {
        log::debug!("GET {}", path);
        let response = check_status(self.request(Method::GET, path).send().await?).await?;

        // 204 means no active device or nothing loaded
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(PlaybackSnapshot::default());
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(PlaybackSnapshot::default());
        }

        serde_json::from_str(&body).map_err(|e| {
            FooterError::MalformedResponse(format!("Failed to parse {}: {}", path, e))
        })
    }

    async fn command(&self, method: Method, path: &str) -> Result<()> {
        self.send_command(self.request(method, path)).await
    }

    async fn send_command(&self, request: RequestBuilder) -> Result<()> {
        // The service answers 411 to body-less PUT/POST without a length.
        let response = request.header(CONTENT_LENGTH, 0).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(FooterError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok());
            Err(FooterError::RateLimited { retry_after })
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(FooterError::Service {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl StreamingClient for WebApiClient {
    async fn get_current_playback_state(&self) -> Result<PlaybackSnapshot> {
        self.fetch_snapshot("/me/player").await
    }

    async fn get_current_playing_track(&self) -> Result<PlaybackSnapshot> {
        self.fetch_snapshot("/me/player/currently-playing").await
    }

    async fn play(&self) -> Result<()> {
        self.command(Method::PUT, "/me/player/play").await
    }

    async fn pause(&self) -> Result<()> {
        self.command(Method::PUT, "/me/player/pause").await
    }

    async fn skip_to_next(&self) -> Result<()> {
        self.command(Method::POST, "/me/player/next").await
    }

    async fn skip_to_previous(&self) -> Result<()> {
        self.command(Method::POST, "/me/player/previous").await
    }

    async fn set_volume(&self, volume: VolumeLevel) -> Result<()> {
        let request = self
            .request(Method::PUT, "/me/player/volume")
            .query(&[("volume_percent", volume.percent())]);
        self.send_command(request).await
    }
}
