//! Status image HTTP client

use crate::error::{ClientError, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, warn};

/// Client for a remote status-code image provider
#[derive(Debug, Clone)]
pub struct StatusImageClient {
    http: Client,
    base_url: String,
}

impl StatusImageClient {
    /// Default provider
    pub const DEFAULT_BASE_URL: &'static str = "https://http.cat";

    /// Create a client for the default provider
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a client for a provider rooted at `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the image for `code`
    pub fn image_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Fetch the image for a status code.
    ///
    /// Any transport failure or non-success status is an error; callers that
    /// only care about "got bytes or not" can match on `Ok`.
    pub async fn fetch_image(&self, code: &str) -> Result<Vec<u8>> {
        let url = self.image_url(code);
        debug!(url = %url, "Fetching status image");

        let response = self.http.get(&url).header(ACCEPT, "image/*").send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Provider has no image");
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let data = response.bytes().await?.to_vec();
        debug!(url = %url, size = data.len(), "Fetched status image");

        Ok(data)
    }
}

impl Default for StatusImageClient {
    fn default() -> Self {
        Self::new()
    }
}
