use bistro_client::ClientConfig;

/// Restaurant contact number used when none is configured
pub const DEFAULT_CONTACT_NUMBER: &str = "+1 (555) 123-4567";

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_API | http://localhost:8080 | Catalog API base URL |
/// | MEDIA_URL | (unset) | Prefix for media-storage image paths |
/// | CATALOG_TIMEOUT_SECS | 30 | Catalog request timeout |
/// | CONTACT_NUMBER | +1 (555) 123-4567 | Number reservations are sent to |
/// | LOG_LEVEL | info | Default log filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog client settings
    pub catalog: ClientConfig,
    /// Restaurant messaging contact number
    pub contact_number: String,
    /// Log level
    pub log_level: String,
    /// Log directory
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            catalog: ClientConfig::from_env(),
            contact_number: std::env::var("CONTACT_NUMBER")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT_NUMBER.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}
