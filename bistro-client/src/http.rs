//! HTTP client for the public catalog API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{CatalogResponse, Configuration, ConfigurationType, Item};

/// Items listing endpoint, filtered by `item_type`
pub const ITEMS_PATH: &str = "item/public/get-all";
/// Configurations listing endpoint, filtered by `configuration_type`
pub const CONFIGURATIONS_PATH: &str = "configuration/public/get-all";

/// Read-only catalog operations
///
/// Implemented by [`CatalogClient`] over HTTP; directories only depend on
/// this trait so they can be driven by any source.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List items of the given type (e.g. "PRODUCT")
    async fn list_items(&self, item_type: &str) -> ClientResult<CatalogResponse<Vec<Item>>>;

    /// List configuration entries of the given type
    async fn list_configurations(
        &self,
        configuration_type: ConfigurationType,
    ) -> ClientResult<CatalogResponse<Vec<Configuration>>>;
}

/// Network catalog client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Unknown(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{path}?{key}={value}` and decode the envelope
    async fn get_filtered<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        value: &str,
    ) -> ClientResult<CatalogResponse<T>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, %key, %value, "catalog request");

        let result = self.send(&url, key, value).await;
        if let Err(e) = &result {
            tracing::warn!(%url, kind = ?e.kind(), error = %e, "catalog request failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        key: &str,
        value: &str,
    ) -> ClientResult<CatalogResponse<T>> {
        let response = self.client.get(url).query(&[(key, value)]).send().await?;
        Self::handle_response(response).await
    }

    /// Error statuses become [`ClientError::Server`]. A 2xx body that is not a
    /// catalog envelope is handed back as a rejected response.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<CatalogResponse<T>> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_server_body(status.as_u16(), &text));
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::warn!(error = %e, "catalog body is not an envelope");
                Ok(CatalogResponse::rejected())
            }
        }
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_items(&self, item_type: &str) -> ClientResult<CatalogResponse<Vec<Item>>> {
        self.get_filtered(ITEMS_PATH, "item_type", item_type).await
    }

    async fn list_configurations(
        &self,
        configuration_type: ConfigurationType,
    ) -> ClientResult<CatalogResponse<Vec<Configuration>>> {
        self.get_filtered(
            CONFIGURATIONS_PATH,
            "configuration_type",
            configuration_type.as_str(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::new(&ClientConfig::new("http://localhost:9000/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }
}
