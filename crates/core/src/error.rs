//! Client error model.

use thiserror::Error;

/// Result type used across the client layers.
pub type PortalResult<T> = Result<T, PortalError>;

/// Error taxonomy for the admin client.
///
/// Every failure a screen can observe falls into one of these buckets.
/// Screens catch all of them at their boundary; none may escape into the
/// rendering layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// Missing, invalid or expired credential. Handled globally: the
    /// session is cleared and the caller is sent back to the login entry
    /// point (unless the failure came from the login endpoint itself).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Valid session, insufficient permission. Resolves to the no-access
    /// view, never to partial content.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// Client-side field validation failure. Stays local to the owning
    /// form; never sent over the network.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Transport-level failure (DNS, connect, IO). The triggering screen
    /// keeps its last-known-good data.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout.
    #[error("request timed out")]
    Timeout,

    /// Non-2xx response, or a 2xx envelope with `success: false`. Carries
    /// the server message verbatim when one was provided.
    #[error("server error: {message}")]
    Server { status: Option<u16>, message: String },
}

impl PortalError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// True when the screen should keep showing its previous data
    /// (transient transport failures).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_network_shaped() {
        assert!(PortalError::Timeout.is_transient());
        assert!(PortalError::Network("refused".into()).is_transient());
        assert!(!PortalError::Authentication("expired".into()).is_transient());
        assert!(!PortalError::server(Some(500), "boom").is_transient());
    }

    #[test]
    fn validation_error_displays_field_and_message() {
        let err = PortalError::validation("email", "Invalid email address");
        assert_eq!(err.to_string(), "email: Invalid email address");
    }
}
