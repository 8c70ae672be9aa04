//! Storefront error type
//!
//! Cart, menu and directory operations never fail; errors only come from
//! configuration and form validation. Catalog failures are folded into
//! directory fetch outcomes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Form input rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration value missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
