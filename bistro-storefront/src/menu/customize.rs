//! Item customization flow
//!
//! `Browsing -> Customizing -> Browsing`. The dialog is modal: it always
//! returns to browsing, either by confirming into the cart or by dismissal.

use rust_decimal::Decimal;
use shared::{CartLine, Item};

use crate::cart::{Cart, money};

/// Per-item customization state: which ingredients to leave out and how many
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationDialog {
    item: Item,
    ingredients: Vec<String>,
    excluded: Vec<String>,
    quantity: u32,
}

impl CustomizationDialog {
    /// Fresh dialog: no exclusions, quantity 1.
    ///
    /// Ingredients come from `custom_properties.ingredients` only when that
    /// is an array of strings; otherwise there is nothing to toggle.
    pub fn open(item: Item) -> Self {
        let ingredients = item.ingredients();
        Self {
            item,
            ingredients,
            excluded: Vec::new(),
            quantity: 1,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Toggleable ingredient names
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Excluded ingredients in the order they were toggled off
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_excluded(&self, ingredient: &str) -> bool {
        self.excluded.iter().any(|i| i == ingredient)
    }

    /// Flip an ingredient's exclusion. Names not in the ingredient list are ignored.
    pub fn toggle_ingredient(&mut self, ingredient: &str) {
        if !self.ingredients.iter().any(|i| i == ingredient) {
            tracing::debug!(%ingredient, item_id = %self.item.id, "ignoring unknown ingredient");
            return;
        }

        if self.is_excluded(ingredient) {
            self.excluded.retain(|i| i != ingredient);
        } else {
            self.excluded.push(ingredient.to_string());
        }
    }

    pub fn increase(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrease quantity, never below 1
    pub fn decrease(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Price shown in the dialog footer: unit price times quantity
    pub fn preview_total(&self) -> Decimal {
        money::round_money(money::line_amount(&self.item, self.quantity))
    }

    /// Package the current selection as a cart line
    pub fn into_line(self) -> CartLine {
        CartLine {
            item: self.item,
            quantity: self.quantity,
            excluded_ingredients: self.excluded,
        }
    }
}

/// Menu page interaction state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuFlow {
    #[default]
    Browsing,
    Customizing(CustomizationDialog),
}

impl MenuFlow {
    pub fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    /// Open the dialog for `item`, replacing any dialog already open
    pub fn open(&mut self, item: Item) {
        tracing::debug!(item_id = %item.id, "customization opened");
        *self = Self::Customizing(CustomizationDialog::open(item));
    }

    pub fn dialog(&self) -> Option<&CustomizationDialog> {
        match self {
            Self::Customizing(dialog) => Some(dialog),
            Self::Browsing => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut CustomizationDialog> {
        match self {
            Self::Customizing(dialog) => Some(dialog),
            Self::Browsing => None,
        }
    }

    /// Close the dialog without touching the cart
    pub fn dismiss(&mut self) {
        *self = Self::Browsing;
    }

    /// Hand the customized line to the cart and return to browsing.
    ///
    /// Returns `false` when no dialog was open.
    pub fn confirm(&mut self, cart: &mut Cart) -> bool {
        match std::mem::take(self) {
            Self::Customizing(dialog) => {
                cart.add_to_cart(dialog.into_line());
                true
            }
            Self::Browsing => false,
        }
    }
}
