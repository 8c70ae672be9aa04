//! Item Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key in `custom_properties` holding the ingredient list
pub const INGREDIENTS_KEY: &str = "ingredients";

/// Price used when an item carries neither a sale price nor a price
pub const FALLBACK_UNIT_PRICE: f64 = 1.0;

/// Sellable catalog entry (dish)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Free-form properties; may hold an `ingredients` string array
    #[serde(default)]
    pub custom_properties: Option<Map<String, Value>>,
    /// Configuration reference (String ID)
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Item {
    /// Bare item with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            description: None,
            price: None,
            sale_price: None,
            custom_properties: None,
            category_id: None,
            main_image: None,
            images: None,
            is_featured: None,
            rating: None,
            currency: None,
            item_type: None,
            status: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set a custom property, creating the map on first use
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom_properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Price charged per unit: sale price, then price, then the fallback of 1
    pub fn unit_price(&self) -> f64 {
        self.sale_price
            .or(self.price)
            .unwrap_or(FALLBACK_UNIT_PRICE)
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// Ingredient names a customer may exclude.
    ///
    /// Only an array made entirely of strings counts; any other shape
    /// (missing, not an array, mixed element types) yields an empty list.
    pub fn ingredients(&self) -> Vec<String> {
        let Some(Value::Array(values)) = self
            .custom_properties
            .as_ref()
            .and_then(|props| props.get(INGREDIENTS_KEY))
        else {
            return Vec::new();
        };

        values
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}
