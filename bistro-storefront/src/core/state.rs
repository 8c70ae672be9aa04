use bistro_client::CatalogApi;
use rust_decimal::Decimal;
use shared::{CategoryInfo, Item};

use crate::cart::Cart;
use crate::catalog::{CategoryDirectory, FetchOutcome, ItemDirectory};
use crate::menu::MenuFilter;

/// Everything a storefront session owns
///
/// Passed explicitly to whatever needs it; the cart never shares its lines
/// with the directories.
#[derive(Debug, Clone, Default)]
pub struct StorefrontState {
    pub categories: CategoryDirectory,
    pub items: ItemDirectory,
    pub cart: Cart,
}

impl StorefrontState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch categories and items concurrently.
    ///
    /// The two fetches touch disjoint state, so completion order does not
    /// matter. Returns `(categories, items)` outcomes.
    pub async fn refresh_catalog<C: CatalogApi + ?Sized>(
        &mut self,
        client: &C,
    ) -> (FetchOutcome, FetchOutcome) {
        let (categories, items) =
            tokio::join!(self.categories.fetch(client), self.items.fetch(client));
        tracing::info!(
            categories_ok = categories.success,
            items_ok = items.success,
            "catalog refreshed"
        );
        (categories, items)
    }

    /// Current menu view for `filter`
    pub fn filtered_menu(&self, filter: &MenuFilter) -> Vec<&Item> {
        filter.apply(self.items.items(), &self.categories)
    }

    /// Category display info for an item
    pub fn category_of(&self, item: &Item) -> CategoryInfo {
        self.categories
            .info(item.category_id.as_deref().unwrap_or_default())
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::{FakeCatalog, Reply};
    use crate::menu::MenuFlow;
    use shared::{CatalogResponse, Configuration};

    fn catalog() -> FakeCatalog {
        FakeCatalog::ok(
            vec![
                Item::new("1", "Truffle Pasta").with_price(18.0).with_category("main"),
                Item::new("2", "Caesar Salad")
                    .with_price(9.5)
                    .with_sale_price(8.0)
                    .with_category("app"),
            ],
            vec![
                Configuration::category("main", "Main", "Mains"),
                Configuration::category("app", "Appetizer", "Starters"),
            ],
        )
    }

    #[tokio::test]
    async fn test_refresh_then_browse_and_order() {
        let mut state = StorefrontState::new();
        let (cats, items) = state.refresh_catalog(&catalog()).await;
        assert!(cats.success && items.success);

        let filter = MenuFilter::new().with_category("Appetizer");
        let salad = state.filtered_menu(&filter)[0].clone();
        assert_eq!(state.category_of(&salad).name, "Appetizer");

        let mut flow = MenuFlow::default();
        flow.open(salad);
        flow.dialog_mut().unwrap().increase();
        flow.confirm(&mut state.cart);

        assert_eq!(state.cart_total(), Decimal::new(16, 0));
    }

    #[tokio::test]
    async fn test_one_failed_fetch_leaves_other_directory_loaded() {
        let mut state = StorefrontState::new();
        let mut fake = catalog();
        fake.configurations = Reply::Ok(CatalogResponse::failed("nope"));

        let (cats, items) = state.refresh_catalog(&fake).await;

        assert!(!cats.success);
        assert!(items.success);
        assert!(state.categories.categories().is_empty());
        assert_eq!(state.items.items().len(), 2);
        // every item now resolves to the default category
        let all = state.filtered_menu(&MenuFilter::new().with_category("uncategorized"));
        assert_eq!(all.len(), 2);
    }
}
