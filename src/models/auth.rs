//! Common authentication error type
//!
//! Unifies the per-component errors for consumers that want one failure
//! type at the UI boundary. The components themselves keep their own enums;
//! nothing inside this crate converts through here.

use std::fmt;

use crate::enrolment::{EnrolError, RegisterError};
use crate::magic_link::MagicLinkError;

/// Any failure from the two sign-in paths
#[derive(Debug)]
pub enum AuthError {
    /// Device credential ceremony errors
    Enrolment(EnrolError),
    /// Credential registration errors
    Registration(RegisterError),
    /// Magic link issuance and redemption errors
    MagicLink(MagicLinkError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Enrolment(err) => write!(f, "Enrolment error: {err}"),
            AuthError::Registration(err) => write!(f, "Registration error: {err}"),
            AuthError::MagicLink(err) => write!(f, "Magic link error: {err}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Enrolment(err) => Some(err),
            AuthError::Registration(err) => Some(err),
            AuthError::MagicLink(err) => Some(err),
        }
    }
}

impl From<EnrolError> for AuthError {
    fn from(err: EnrolError) -> Self {
        AuthError::Enrolment(err)
    }
}

impl From<RegisterError> for AuthError {
    fn from(err: RegisterError) -> Self {
        AuthError::Registration(err)
    }
}

impl From<MagicLinkError> for AuthError {
    fn from(err: MagicLinkError) -> Self {
        AuthError::MagicLink(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use std::error::Error;

    #[test]
    fn test_conversions_preserve_error_kind() {
        let err: AuthError = EnrolError::UnsupportedPlatform.into();
        assert!(matches!(err, AuthError::Enrolment(_)));

        let err: AuthError = RegisterError::Unauthenticated.into();
        assert!(matches!(err, AuthError::Registration(_)));

        let err: AuthError =
            MagicLinkError::IssuanceFailed(ProviderError::transport("offline".to_string())).into();
        assert!(matches!(err, AuthError::MagicLink(_)));
    }

    #[test]
    fn test_source_chains_to_component_error() {
        let err: AuthError = RegisterError::Unauthenticated.into();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Not authenticated");
    }

    #[test]
    fn test_display_names_the_failing_path() {
        let err: AuthError = EnrolError::UnsupportedPlatform.into();
        assert!(err.to_string().starts_with("Enrolment error:"));
    }
}
