//! The authenticator capability consumed by the enrolment flow

use async_trait::async_trait;

use super::errors::CeremonyError;
use super::types::{CreatedCredential, CredentialCreationOptions};

/// A device-local credential-creation capability
///
/// Implementations wrap whatever the embedding platform exposes (a browser
/// credential API, an OS passkey service). This crate ships no production
/// implementation; the embedder supplies one, and
/// [`crate::testing::MockAuthenticator`] stands in for tests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether the platform exposes a credential-creation capability
    ///
    /// Checked before every ceremony; a `false` answer means enrolment
    /// fails fast without prompting the user.
    fn is_available(&self) -> bool;

    /// Run one credential-creation ceremony
    ///
    /// Suspends until the user responds, the ceremony times out, or the
    /// platform refuses. Implementations must not retry on their own; a
    /// retry needs a fresh challenge and fresh user interaction.
    ///
    /// # Errors
    ///
    /// Returns a [`CeremonyError`] describing how the ceremony ended when
    /// no credential was produced.
    async fn create_credential(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<CreatedCredential, CeremonyError>;
}
