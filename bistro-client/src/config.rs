//! Client configuration

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the catalog API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_API | http://localhost:8080 | Catalog API base URL |
/// | MEDIA_URL | (unset) | Prefix for `storage/images` paths |
/// | CATALOG_TIMEOUT_SECS | 30 | Request timeout |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog API base URL (e.g., "https://api.example.com/api/v1")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Base URL prepended to media-storage image paths
    pub media_base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            media_base_url: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_API").unwrap_or_else(|_| "http://localhost:8080".into());
        let timeout = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let media_base_url = std::env::var("MEDIA_URL").ok().filter(|s| !s.is_empty());

        Self {
            base_url,
            timeout,
            media_base_url,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the media base URL
    pub fn with_media_base_url(mut self, url: impl Into<String>) -> Self {
        self.media_base_url = Some(url.into());
        self
    }

    /// Create a catalog client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::CatalogClient> {
        crate::CatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
