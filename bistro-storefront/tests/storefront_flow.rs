// bistro-storefront/tests/storefront_flow.rs
// End-to-end: catalog API -> directories -> menu filter -> customization -> cart

use bistro_client::ClientConfig;
use bistro_storefront::{MenuFilter, MenuFlow, StorefrontState};
use rust_decimal::Decimal;
use serde_json::json;
use shared::{CartLine, QuantityOp};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_catalog() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/configuration/public/get-all"))
        .and(query_param("configuration_type", "CATEGORY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": "main", "name": "Main", "description": "Mains", "configuration_type": "CATEGORY" },
                { "id": "app", "name": "Appetizer", "description": "Starters", "configuration_type": "CATEGORY" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/public/get-all"))
        .and(query_param("item_type", "PRODUCT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "id": "pasta",
                    "name": "Truffle Pasta",
                    "description": "Tagliatelle, black truffle",
                    "price": 18.0,
                    "category_id": "main",
                    "custom_properties": { "ingredients": ["Tagliatelle", "Truffle", "Parmesan"] }
                },
                {
                    "id": "salad",
                    "name": "Caesar Salad",
                    "description": "Romaine, croutons",
                    "price": 9.5,
                    "sale_price": 8.25,
                    "category_id": "app",
                    "custom_properties": { "ingredients": ["Cheese", 5] }
                },
                { "id": "water", "name": "Still Water" }
            ]
        })))
        .mount(&server)
        .await;

    server
}

fn names<'a>(items: &[&'a shared::Item]) -> Vec<&'a str> {
    items.iter().filter_map(|&i| i.name.as_deref()).collect()
}

#[tokio::test]
async fn test_menu_filtering_over_fetched_catalog() {
    let server = mock_catalog().await;
    let client = ClientConfig::new(server.uri()).build_client().unwrap();

    let mut state = StorefrontState::new();
    let (cats, items) = state.refresh_catalog(&client).await;
    assert!(cats.success, "{}", cats.message);
    assert!(items.success, "{}", items.message);

    let appetizers = state.filtered_menu(&MenuFilter::new().with_category("Appetizer"));
    assert_eq!(names(&appetizers), vec!["Caesar Salad"]);

    let truffle = state.filtered_menu(&MenuFilter::new().with_search("TRUFFLE"));
    assert_eq!(names(&truffle), vec!["Truffle Pasta"]);

    assert_eq!(state.category_of(state.items.items().last().unwrap()).name, "uncategorized");
}

#[tokio::test]
async fn test_customize_and_checkout_totals() {
    let server = mock_catalog().await;
    let client = ClientConfig::new(server.uri()).build_client().unwrap();
    let mut state = StorefrontState::new();
    state.refresh_catalog(&client).await;

    let find = |id: &str| {
        state
            .items
            .items()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .unwrap()
    };
    let pasta = find("pasta");
    let salad = find("salad");
    let water = find("water");

    let mut flow = MenuFlow::default();

    // pasta x2 without parmesan
    flow.open(pasta.clone());
    let dialog = flow.dialog_mut().unwrap();
    assert_eq!(dialog.ingredients().len(), 3);
    dialog.toggle_ingredient("Parmesan");
    dialog.increase();
    assert!(flow.confirm(&mut state.cart));

    // salad: mixed ingredient list offers nothing to exclude
    flow.open(salad);
    assert!(flow.dialog().unwrap().ingredients().is_empty());
    flow.confirm(&mut state.cart);

    // water has no price at all
    flow.open(water);
    flow.confirm(&mut state.cart);

    // re-adding pasta merges by id: +1 regardless of the dialog quantity
    flow.open(pasta.clone());
    flow.dialog_mut().unwrap().increase();
    flow.confirm(&mut state.cart);

    assert_eq!(state.cart.len(), 3);
    let pasta_line = state.cart.get("pasta").unwrap();
    assert_eq!(pasta_line.quantity, 3);
    assert_eq!(pasta_line.excluded_ingredients, vec!["Parmesan"]);

    // 18 x 3 + 8.25 x 1 + 1 x 1
    assert_eq!(state.cart_total(), Decimal::new(6325, 2));

    let line = CartLine::new(pasta, 1);
    state.cart.update_quantity(&line, QuantityOp::Minus);
    state.cart.update_quantity(&line, QuantityOp::Minus);
    state.cart.update_quantity(&line, QuantityOp::Minus);
    assert_eq!(state.cart.get("pasta").unwrap().quantity, 1);

    state.cart.remove_from_cart("salad");
    state.cart.remove_from_cart("salad");
    assert_eq!(state.cart.len(), 2);
    assert_eq!(state.cart_total(), Decimal::new(19, 0));

    state.cart.clear_cart();
    assert!(state.cart.is_empty());
}

#[tokio::test]
async fn test_unreachable_catalog_leaves_directories_empty() {
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(2)
        .build_client()
        .unwrap();

    let mut state = StorefrontState::new();
    let (cats, items) = state.refresh_catalog(&client).await;

    assert!(!cats.success);
    assert!(!items.success);
    assert!(state.filtered_menu(&MenuFilter::new()).is_empty());
    assert_eq!(state.categories.filter_options(), vec!["All"]);
}

#[tokio::test]
async fn test_non_json_catalog_reports_rejected_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let client = ClientConfig::new(server.uri()).build_client().unwrap();

    let mut state = StorefrontState::new();
    let (cats, items) = state.refresh_catalog(&client).await;

    assert!(!cats.success);
    assert_eq!(cats.message, "Failed to fetch categories");
    assert!(!items.success);
    assert_eq!(items.message, "Failed to fetch items");
    assert!(state.items.items().is_empty());
}
