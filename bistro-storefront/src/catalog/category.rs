//! Category directory

use bistro_client::CatalogApi;
use shared::models::UNCATEGORIZED_NAME;
use shared::{CategoryInfo, Configuration, ConfigurationType};

use super::FetchOutcome;
use crate::menu::ALL_CATEGORIES;

/// Configuration type the directory loads
pub const CATEGORY_CONFIGURATION_TYPE: ConfigurationType = ConfigurationType::Category;

const FETCH_SUCCESS: &str = "Categories fetched successfully";
const FETCH_FAILED: &str = "Failed to fetch categories";
const FETCH_ERROR: &str = "An unknown error occurred while fetching categories";

/// Cached category configurations
#[derive(Debug, Clone, Default)]
pub struct CategoryDirectory {
    categories: Vec<Configuration>,
}

impl CategoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-filled with records, without a fetch
    pub fn with_categories(categories: Vec<Configuration>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Configuration] {
        &self.categories
    }

    /// Load categories from the catalog, replacing the cache.
    ///
    /// Any failure leaves the cache empty.
    pub async fn fetch<C: CatalogApi + ?Sized>(&mut self, client: &C) -> FetchOutcome {
        match client.list_configurations(CATEGORY_CONFIGURATION_TYPE).await {
            Ok(response) if response.success => {
                self.categories = response.data.unwrap_or_default();
                tracing::info!(count = self.categories.len(), "categories loaded");
                FetchOutcome::succeeded(FETCH_SUCCESS, self.categories.len())
            }
            Ok(response) => {
                self.categories.clear();
                let message = response.message().unwrap_or(FETCH_FAILED).to_string();
                tracing::warn!(%message, "category fetch rejected");
                FetchOutcome::failed(message)
            }
            Err(e) => {
                self.categories.clear();
                tracing::error!(error = %e, "{FETCH_ERROR}");
                FetchOutcome::failed(FETCH_ERROR)
            }
        }
    }

    /// Display info for a category id; unknown ids get the uncategorized default
    pub fn info(&self, id: &str) -> CategoryInfo {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(CategoryInfo::from)
            .unwrap_or_default()
    }

    /// Category chip labels: "All" followed by every cached name.
    ///
    /// A record without a name is labelled the way `info` resolves it.
    pub fn filter_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(
                self.categories
                    .iter()
                    .map(|c| c.name.as_deref().unwrap_or(UNCATEGORIZED_NAME)),
            )
            .collect()
    }
}
