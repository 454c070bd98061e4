//! The identity-provider contract consumed by both sign-in paths

use async_trait::async_trait;

use super::errors::ProviderError;
use crate::models::{Session, UserRecord};

/// The three provider primitives this crate builds on
///
/// One production implementation ships with the crate
/// ([`crate::provider::GoTrueClient`]); tests use
/// [`crate::testing::MockIdentityProvider`]. The registrar and the magic
/// link service take the provider as an explicit dependency rather than
/// reaching for an ambient client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The current session, if one is stored and not expired
    async fn current_session(&self) -> Option<Session>;

    /// Request delivery of a one-time sign-in link
    ///
    /// `redirect_to` is forwarded untouched, including its absence;
    /// redirect policy belongs to the provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure, message verbatim.
    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), ProviderError>;

    /// Exchange a one-time token for the user record it identifies
    ///
    /// # Errors
    ///
    /// Returns the provider's failure, message verbatim. A token that was
    /// already redeemed fails here; that is the provider enforcing one-time
    /// use, not a transient fault.
    async fn user_from_token(&self, access_token: &str) -> Result<UserRecord, ProviderError>;
}
