//! Utilities
//!
//! - [`AppError`] - storefront error type
//! - logger setup
//! - form validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
