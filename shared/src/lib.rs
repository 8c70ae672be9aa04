//! Shared types for the Bistro storefront
//!
//! Catalog records, cart line types and response envelopes used by both
//! the catalog client and the storefront engine.

pub mod cart;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartLine, QuantityOp};
pub use models::{CategoryInfo, Configuration, ConfigurationType, Item};
pub use response::{CatalogResponse, ErrorEnvelope};
