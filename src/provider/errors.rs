//! Error type for identity-provider operations

use std::fmt;

/// Failure reported by, or on the way to, the identity provider
///
/// The message is preserved verbatim from the provider's response so callers
/// can surface exactly what the provider said. `Display` prints the message
/// alone for the same reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// HTTP status, when the request reached the provider
    pub status: Option<u16>,
    /// Provider message, unmodified
    pub message: String,
}

impl ProviderError {
    /// Failure the provider answered with an HTTP error status
    #[must_use]
    pub fn http(status: u16, message: String) -> Self {
        Self {
            status: Some(status),
            message,
        }
    }

    /// Failure before any provider response arrived
    #[must_use]
    pub fn transport(message: String) -> Self {
        Self {
            status: None,
            message,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim_message() {
        let err = ProviderError::http(422, "Signups not allowed for otp".to_string());
        assert_eq!(err.to_string(), "Signups not allowed for otp");

        let transport = ProviderError::transport("connection refused".to_string());
        assert_eq!(transport.to_string(), "connection refused");
        assert!(transport.status.is_none());
    }
}
