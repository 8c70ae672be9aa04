//! Bistro Storefront - restaurant menu, cart and reservation engine
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): category and item directories filled from the catalog API
//! - **Cart** (`cart`): in-memory cart with merge-by-item semantics and decimal totals
//! - **Menu** (`menu`): category/search filtering and the per-item customization flow
//! - **Reservation** (`reservation`): reservation/contact forms sent through a messaging deep link
//!
//! # Module layout
//!
//! ```text
//! bistro-storefront/src/
//! ├── core/          # config, storefront state
//! ├── catalog/       # category + item directories
//! ├── cart/          # cart engine, money arithmetic
//! ├── menu/          # filter, customization dialog
//! ├── reservation/   # forms, messaging link
//! └── utils/         # errors, logger, validation
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod menu;
pub mod reservation;
pub mod utils;

// Re-export public types
pub use cart::Cart;
pub use catalog::{CategoryDirectory, FetchOutcome, ItemDirectory};
pub use core::{Config, StorefrontState};
pub use menu::{CustomizationDialog, MenuFilter, MenuFlow};
pub use reservation::{ContactMessage, MessagingLink, ReservationRequest};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____  _      __
   / __ )(_)____/ /__________
  / __  / / ___/ __/ ___/ __ \
 / /_/ / (__  ) /_/ /  / /_/ /
/_____/_/____/\__/_/   \____/
    "#
    );
}
