//! Menu browsing
//!
//! Filtered views over the item directory and the modal customization flow
//! that feeds the cart.

mod customize;
mod filter;

pub use customize::{CustomizationDialog, MenuFlow};
pub use filter::{ALL_CATEGORIES, MenuFilter};
