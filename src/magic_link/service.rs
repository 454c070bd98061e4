//! Magic link issuance and redemption

use log::debug;

use super::errors::MagicLinkError;
use crate::models::{MagicLinkRequest, UserRecord};
use crate::provider::IdentityProvider;

/// One-time-link sign-in over an injected identity provider
///
/// Both operations are thin delegations; the value this layer adds is the
/// discriminated error taxonomy and keeping the provider behind a seam the
/// tests can script.
pub struct MagicLinkService<P> {
    provider: P,
}

impl<P: IdentityProvider> MagicLinkService<P> {
    /// Create a service over an identity provider
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Request delivery of a one-time sign-in link
    ///
    /// Idempotent from the caller's perspective: issuing again simply asks
    /// the provider for another link. The redirect target is forwarded
    /// untouched, including its absence.
    ///
    /// # Errors
    ///
    /// Returns [`MagicLinkError::IssuanceFailed`] carrying the provider's
    /// message verbatim.
    pub async fn issue(&self, request: MagicLinkRequest) -> Result<(), MagicLinkError> {
        debug!("issuing one-time sign-in link");
        self.provider
            .send_magic_link(&request.email, request.redirect_to.as_deref())
            .await
            .map_err(MagicLinkError::IssuanceFailed)
    }

    /// Exchange a delivered one-time token for the identity it proves
    ///
    /// The returned record is the provider's, as-is; callers own any
    /// further interpretation. A token that was already redeemed fails
    /// here like any other rejection.
    ///
    /// # Errors
    ///
    /// Returns [`MagicLinkError::RedemptionFailed`] carrying the provider's
    /// message verbatim.
    pub async fn redeem(&self, token: &str) -> Result<UserRecord, MagicLinkError> {
        debug!("redeeming one-time token");
        self.provider
            .user_from_token(token)
            .await
            .map_err(MagicLinkError::RedemptionFailed)
    }
}
