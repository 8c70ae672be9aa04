//! API Response types
//!
//! Response envelopes of the public catalog API.

use serde::{Deserialize, Serialize};

/// Status string carried by every error envelope
pub const STATUS_ERROR: &str = "error";

/// Catalog read response
///
/// Both read endpoints answer with this shape:
/// ```json
/// {
///     "success": true,
///     "message": "OK",
///     "data": [ ... ]
/// }
/// ```
/// The caller is responsible for interpreting `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CatalogResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> CatalogResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create an unsuccessful response with a message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unsuccessful response carrying nothing, for bodies that are not a
    /// catalog envelope at all
    pub fn rejected() -> Self {
        Self {
            success: false,
            data: None,
            message: None,
        }
    }

    /// Message, treating an empty string as absent
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Uniform failure envelope
///
/// ```json
/// {
///     "status": "error",
///     "success": false,
///     "error": "Network error - no response from server",
///     "errors": "",
///     "message": "Network error - no response from server",
///     "data": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub success: bool,
    pub error: String,
    pub errors: String,
    pub message: String,
    /// Always `null` on the wire
    pub data: Option<()>,
}

impl ErrorEnvelope {
    pub fn new(
        error: impl Into<String>,
        errors: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            success: false,
            error: error.into(),
            errors: errors.into(),
            message: message.into(),
            data: None,
        }
    }
}
