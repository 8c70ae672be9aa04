//! Catalog directories
//!
//! In-memory caches of the catalog collections, each filled by a single
//! `fetch`. A failed fetch empties the cache; nothing is retried.

mod category;
mod item;

pub use category::{CATEGORY_CONFIGURATION_TYPE, CategoryDirectory};
pub use item::{ITEM_TYPE, ItemDirectory};

use serde::Serialize;

/// Result of a directory fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    pub success: bool,
    pub message: String,
    /// Number of records now cached
    pub count: usize,
}

impl FetchOutcome {
    pub(crate) fn succeeded(message: &str, count: usize) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            count,
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            count: 0,
        }
    }
}
