//! Resolved category display info

use serde::{Deserialize, Serialize};

use super::Configuration;

/// Name shown for items whose category cannot be resolved
pub const UNCATEGORIZED_NAME: &str = "uncategorized";
/// Description shown for items whose category cannot be resolved
pub const UNCATEGORIZED_DESCRIPTION: &str = "no category description";

/// Display-safe view of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for CategoryInfo {
    fn default() -> Self {
        Self {
            name: UNCATEGORIZED_NAME.to_string(),
            description: UNCATEGORIZED_DESCRIPTION.to_string(),
            image: None,
        }
    }
}

/// Each missing text field falls back on its own
impl From<&Configuration> for CategoryInfo {
    fn from(cfg: &Configuration) -> Self {
        Self {
            name: cfg.name.as_deref().unwrap_or(UNCATEGORIZED_NAME).to_string(),
            description: cfg
                .description
                .as_deref()
                .unwrap_or(UNCATEGORIZED_DESCRIPTION)
                .to_string(),
            image: cfg.main_image.clone(),
        }
    }
}
