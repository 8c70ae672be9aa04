//! Catalog data models
//!
//! Wire types returned by the public catalog API. Field names follow the
//! API's snake_case JSON; fields the storefront never reads are dropped on
//! decode.

pub mod category;
pub mod configuration;
pub mod item;

// Re-exports
pub use category::*;
pub use configuration::*;
pub use item::*;
