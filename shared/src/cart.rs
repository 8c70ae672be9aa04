//! Cart line types

use serde::{Deserialize, Serialize};

use crate::models::Item;

/// One entry in the cart: an item, how many, and what to leave out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
}

impl CartLine {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            excluded_ingredients: Vec::new(),
        }
    }

    pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
        self.excluded_ingredients = excluded;
        self
    }

    /// Item id, the merge key of the cart
    pub fn item_id(&self) -> &str {
        &self.item.id
    }
}

/// Direction of a cart quantity stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityOp {
    Plus,
    Minus,
}
