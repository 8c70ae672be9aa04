//! Bistro Client - HTTP client for the public catalog API
//!
//! Read-only access to the item and configuration collections, with
//! failures classified into a uniform error envelope.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::{CatalogApi, CatalogClient};

// Re-export shared types for convenience
pub use shared::{CatalogResponse, Configuration, ConfigurationType, ErrorEnvelope, Item};
