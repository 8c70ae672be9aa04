//! Item directory

use bistro_client::CatalogApi;
use shared::Item;

use super::FetchOutcome;

/// Item type the directory loads
pub const ITEM_TYPE: &str = "PRODUCT";

const FETCH_SUCCESS: &str = "Items fetched successfully";
const FETCH_FAILED: &str = "Failed to fetch items";
const FETCH_ERROR: &str = "An unknown error occurred while fetching items";

/// Cached menu items. Consumers scan the whole collection; there is no
/// lookup by id.
#[derive(Debug, Clone, Default)]
pub struct ItemDirectory {
    items: Vec<Item>,
}

impl ItemDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Load items from the catalog, replacing the cache.
    ///
    /// Any failure leaves the cache empty.
    pub async fn fetch<C: CatalogApi + ?Sized>(&mut self, client: &C) -> FetchOutcome {
        match client.list_items(ITEM_TYPE).await {
            Ok(response) if response.success => {
                self.items = response.data.unwrap_or_default();
                tracing::info!(count = self.items.len(), "items loaded");
                FetchOutcome::succeeded(FETCH_SUCCESS, self.items.len())
            }
            Ok(response) => {
                self.items.clear();
                let message = response.message().unwrap_or(FETCH_FAILED).to_string();
                tracing::warn!(%message, "item fetch rejected");
                FetchOutcome::failed(message)
            }
            Err(e) => {
                self.items.clear();
                tracing::error!(error = %e, "{FETCH_ERROR}");
                FetchOutcome::failed(FETCH_ERROR)
            }
        }
    }

    /// Items flagged as featured, for the landing page
    pub fn featured(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.is_featured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::{FakeCatalog, Reply};
    use shared::CatalogResponse;

    #[tokio::test]
    async fn test_fetch_success() {
        let mut dir = ItemDirectory::new();
        let catalog = FakeCatalog::ok(
            vec![Item::new("1", "Soup"), Item::new("2", "Bread")],
            vec![],
        );

        let outcome = dir.fetch(&catalog).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Items fetched successfully");
        assert_eq!(dir.items().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_rejected_uses_server_message() {
        let mut dir = ItemDirectory::with_items(vec![Item::new("1", "Soup")]);
        let catalog = FakeCatalog {
            items: Reply::Ok(CatalogResponse::failed("menu unpublished")),
            configurations: Reply::Ok(CatalogResponse::ok(vec![])),
        };

        let outcome = dir.fetch(&catalog).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "menu unpublished");
        assert!(dir.items().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_clears_cache() {
        let mut dir = ItemDirectory::with_items(vec![Item::new("1", "Soup")]);
        let catalog = FakeCatalog {
            items: Reply::ServerError,
            configurations: Reply::Ok(CatalogResponse::ok(vec![])),
        };

        let outcome = dir.fetch(&catalog).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "An unknown error occurred while fetching items");
        assert_eq!(outcome.count, 0);
        assert!(dir.items().is_empty());
    }

    #[test]
    fn test_featured() {
        let mut popular = Item::new("1", "Risotto");
        popular.is_featured = Some(true);
        let dir = ItemDirectory::with_items(vec![popular, Item::new("2", "Bread")]);

        let names: Vec<_> = dir.featured().filter_map(|i| i.name.as_deref()).collect();
        assert_eq!(names, vec!["Risotto"]);
    }
}
