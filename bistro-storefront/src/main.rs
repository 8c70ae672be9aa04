use bistro_storefront::{
    Config, MenuFilter, MessagingLink, StorefrontState, init_logger_with_file, print_banner,
};
use shared::util::resolve_image_src;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(env = %config.environment, catalog = %config.catalog.base_url, "Bistro storefront starting...");

    // 2. Catalog client + messaging link
    let client = config.catalog.build_client()?;
    let link = MessagingLink::new(&config.contact_number)?;

    // 3. Load the catalog
    let mut state = StorefrontState::new();
    let (categories, items) = state.refresh_catalog(&client).await;
    if !categories.success {
        tracing::warn!(message = %categories.message, "categories unavailable");
    }
    if !items.success {
        tracing::warn!(message = %items.message, "items unavailable");
    }

    // 4. Menu summary
    let media_base = config.catalog.media_base_url.as_deref();
    for category in state.categories.filter_options() {
        let filter = MenuFilter::new().with_category(category);
        let dishes = state.filtered_menu(&filter);
        tracing::info!(%category, count = dishes.len(), "menu section");
        for item in dishes {
            tracing::debug!(
                id = %item.id,
                name = item.name.as_deref().unwrap_or_default(),
                price = item.unit_price(),
                image = ?item.main_image.as_deref().map(|p| resolve_image_src(media_base, p)),
                "menu item"
            );
        }
    }

    let featured = state.items.featured().count();
    tracing::info!(featured, contact = %link.number(), "storefront ready");

    Ok(())
}
