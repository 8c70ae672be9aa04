use serde::{Deserialize, Serialize};
use shared::Item;

use crate::catalog::CategoryDirectory;

/// Category selection that matches every item
pub const ALL_CATEGORIES: &str = "All";

/// Current category selection and search text
///
/// The filtered view is recomputed on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub selected_category: String,
    pub search: String,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    fn matches_category(&self, item: &Item, categories: &CategoryDirectory) -> bool {
        if self.selected_category == ALL_CATEGORIES {
            return true;
        }
        let category_id = item.category_id.as_deref().unwrap_or_default();
        categories.info(category_id).name == self.selected_category
    }

    /// Case-insensitive substring match on name or description
    fn matches_search(&self, item: &Item) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&query))
        };
        contains(&item.name) || contains(&item.description)
    }

    pub fn matches(&self, item: &Item, categories: &CategoryDirectory) -> bool {
        self.matches_category(item, categories) && self.matches_search(item)
    }

    /// Items passing the filter, in directory order
    pub fn apply<'a>(&self, items: &'a [Item], categories: &CategoryDirectory) -> Vec<&'a Item> {
        items
            .iter()
            .filter(|item| self.matches(item, categories))
            .collect()
    }
}
