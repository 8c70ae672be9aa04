//! Configuration Model

use serde::{Deserialize, Serialize};

/// Kind of grouping a configuration record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationType {
    Category,
    Type,
    Brand,
}

impl ConfigurationType {
    /// Query-string value used by the catalog API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "CATEGORY",
            Self::Type => "TYPE",
            Self::Brand => "BRAND",
        }
    }
}

impl std::fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration entity (category, type or brand grouping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    pub configuration_type: ConfigurationType,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Configuration {
    /// Minimal category record, mostly useful for fixtures
    pub fn category(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tenant_id: None,
            name: Some(name.into()),
            description: Some(description.into()),
            main_image: None,
            configuration_type: ConfigurationType::Category,
            created_by: None,
            created_at: None,
            updated_at: None,
        }
    }
}
