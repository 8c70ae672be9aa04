//! Client error types

use shared::ErrorEnvelope;
use thiserror::Error;

/// Fallback text when the server answered with an error but gave no details
pub const SERVER_ERROR_TEXT: &str = "Server error occurred";
/// Text used when the request went out but no response came back
pub const NETWORK_ERROR_TEXT: &str = "Network error - no response from server";
/// Text used for anything that is neither a server nor a network failure
pub const UNKNOWN_ERROR_TEXT: &str = "An unknown error occurred";

/// Coarse failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Server responded with a non-2xx status
    Server,
    /// Request was sent but no response was received
    Network,
    /// Anything else
    Unknown,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server responded with an error status
    #[error("Server error ({status}): {}", server_message(.message))]
    Server {
        status: u16,
        error: Option<String>,
        errors: Option<String>,
        message: Option<String>,
    },

    /// No response from server
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Unclassified failure
    #[error("Unknown error: {0}")]
    Unknown(String),
}

fn server_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(SERVER_ERROR_TEXT)
}

impl ClientError {
    /// Build a server error from the status and the raw response body.
    ///
    /// `error`, `errors` and `message` are taken from the body when it is a
    /// JSON object carrying non-empty strings under those keys.
    pub fn from_server_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |key: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(key))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        Self::Server {
            status,
            error: field("error"),
            errors: field("errors"),
            message: field("message"),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Server { .. } => ErrorKind::Server,
            Self::Network(_) => ErrorKind::Network,
            Self::InvalidResponse(_) | Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Convert into the uniform failure envelope
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Server {
                error,
                errors,
                message,
                ..
            } => ErrorEnvelope::new(
                error.as_deref().unwrap_or(SERVER_ERROR_TEXT),
                errors.as_deref().unwrap_or_default(),
                message.as_deref().unwrap_or(SERVER_ERROR_TEXT),
            ),
            Self::Network(_) => ErrorEnvelope::new(NETWORK_ERROR_TEXT, "", NETWORK_ERROR_TEXT),
            Self::InvalidResponse(_) | Self::Unknown(_) => {
                ErrorEnvelope::new(UNKNOWN_ERROR_TEXT, "", UNKNOWN_ERROR_TEXT)
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::Network(err)
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

impl From<ClientError> for ErrorEnvelope {
    fn from(err: ClientError) -> Self {
        err.envelope()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_body_fields_extracted() {
        let err = ClientError::from_server_body(
            422,
            r#"{"error": "bad type", "errors": "item_type", "message": "Invalid filter"}"#,
        );
        let env = err.envelope();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(env.error, "bad type");
        assert_eq!(env.errors, "item_type");
        assert_eq!(env.message, "Invalid filter");
        assert!(!env.success);
        assert_eq!(env.status, "error");
    }

    #[test]
    fn test_server_body_not_json_uses_fallbacks() {
        let env = ClientError::from_server_body(502, "<html>Bad Gateway</html>").envelope();
        assert_eq!(env.error, SERVER_ERROR_TEXT);
        assert_eq!(env.errors, "");
        assert_eq!(env.message, SERVER_ERROR_TEXT);
    }

    #[test]
    fn test_empty_strings_use_fallbacks() {
        let env = ClientError::from_server_body(500, r#"{"error": "", "message": ""}"#).envelope();
        assert_eq!(env.error, SERVER_ERROR_TEXT);
        assert_eq!(env.message, SERVER_ERROR_TEXT);
    }

    #[test]
    fn test_unknown_envelope() {
        let err = ClientError::Unknown("builder".into());
        assert_eq!(err.kind(), ErrorKind::Unknown);
        let env: ErrorEnvelope = err.into();
        assert_eq!(env.message, UNKNOWN_ERROR_TEXT);
        assert!(env.data.is_none());
    }
}
