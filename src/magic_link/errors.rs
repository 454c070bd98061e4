//! Error types for magic link operations

use std::fmt;

use crate::provider::ProviderError;

/// Ways a magic link operation can fail
///
/// Both variants carry the provider's failure unchanged, and `Display`
/// prints the provider's message alone. Callers surface exactly what the
/// provider said; the status lives on the inner error for callers that
/// branch on it.
#[derive(Debug)]
pub enum MagicLinkError {
    /// The provider could not issue the link
    IssuanceFailed(ProviderError),

    /// The provider rejected the one-time token
    RedemptionFailed(ProviderError),
}

impl fmt::Display for MagicLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagicLinkError::IssuanceFailed(err) | MagicLinkError::RedemptionFailed(err) => {
                write!(f, "{err}")
            }
        }
    }
}

impl std::error::Error for MagicLinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MagicLinkError::IssuanceFailed(err) | MagicLinkError::RedemptionFailed(err) => {
                Some(err)
            }
        }
    }
}
