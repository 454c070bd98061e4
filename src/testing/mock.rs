//! Mock implementations of the crate's two external capabilities
//!
//! Both mocks are scripted at construction and record every call, so tests
//! can assert not just on outcomes but on what the services actually asked
//! for.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::fixtures::TestFixtures;
use crate::authenticator::{
    Authenticator, CeremonyError, CreatedCredential, CredentialCreationOptions,
};
use crate::models::{Session, UserRecord};
use crate::provider::{IdentityProvider, ProviderError};

/// How a scripted ceremony ends
enum ScriptedCeremony {
    Approve,
    TimeOut,
    Cancel,
    Reject(String),
}

/// Scripted authenticator for exercising the enrolment flow
pub struct MockAuthenticator {
    available: bool,
    outcome: ScriptedCeremony,
    credential_id: String,
    attestation_object: Vec<u8>,
    recorded: Mutex<Vec<CredentialCreationOptions>>,
}

impl MockAuthenticator {
    /// Approves every ceremony with the given credential
    #[must_use]
    pub fn approving(credential_id: &str, attestation_object: &[u8]) -> Self {
        Self {
            credential_id: credential_id.to_string(),
            attestation_object: attestation_object.to_vec(),
            ..Self::scripted(true, ScriptedCeremony::Approve)
        }
    }

    /// A platform without credential support
    #[must_use]
    pub fn unavailable() -> Self {
        Self::scripted(false, ScriptedCeremony::Approve)
    }

    /// Every ceremony times out waiting for the user
    #[must_use]
    pub fn timing_out() -> Self {
        Self::scripted(true, ScriptedCeremony::TimeOut)
    }

    /// The user dismisses every ceremony
    #[must_use]
    pub fn cancelling() -> Self {
        Self::scripted(true, ScriptedCeremony::Cancel)
    }

    /// The platform refuses every ceremony with this message
    #[must_use]
    pub fn rejecting(message: &str) -> Self {
        Self::scripted(true, ScriptedCeremony::Reject(message.to_string()))
    }

    fn scripted(available: bool, outcome: ScriptedCeremony) -> Self {
        Self {
            available,
            outcome,
            credential_id: String::new(),
            attestation_object: Vec::new(),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Options every ceremony so far received
    #[must_use]
    pub fn recorded_options(&self) -> Vec<CredentialCreationOptions> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of ceremonies run
    #[must_use]
    pub fn ceremony_count(&self) -> usize {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn create_credential(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<CreatedCredential, CeremonyError> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(options);
        match &self.outcome {
            ScriptedCeremony::Approve => Ok(CreatedCredential {
                id: self.credential_id.clone(),
                attestation_object: self.attestation_object.clone(),
            }),
            ScriptedCeremony::TimeOut => Err(CeremonyError::TimedOut),
            ScriptedCeremony::Cancel => Err(CeremonyError::Cancelled),
            ScriptedCeremony::Reject(message) => Err(CeremonyError::Rejected(message.clone())),
        }
    }
}

/// Scripted identity provider with call recording
///
/// `current_session` returns the scripted session as-is, expired or not;
/// filtering stale sessions is the caller's job and tests rely on the mock
/// not doing it for them.
pub struct MockIdentityProvider {
    session: Option<Session>,
    failure: Option<ProviderError>,
    user: UserRecord,
    sent: Mutex<Vec<(String, Option<String>)>>,
    redeemed: Mutex<Vec<String>>,
}

impl MockIdentityProvider {
    /// Provider with no stored session
    #[must_use]
    pub fn signed_out() -> Self {
        Self::with_optional_session(None)
    }

    /// Provider holding a live session with the given access token
    #[must_use]
    pub fn signed_in(access_token: &str) -> Self {
        Self::with_optional_session(Some(Session {
            access_token: access_token.to_string(),
            expires_at: None,
        }))
    }

    /// Provider holding exactly this session
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self::with_optional_session(Some(session))
    }

    /// Provider whose issue and introspection calls fail with this error
    #[must_use]
    pub fn failing(failure: ProviderError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::with_optional_session(None)
        }
    }

    /// Script the record returned by token introspection
    #[must_use]
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.user = user;
        self
    }

    fn with_optional_session(session: Option<Session>) -> Self {
        Self {
            session,
            failure: None,
            user: TestFixtures::user_record(),
            sent: Mutex::new(Vec::new()),
            redeemed: Mutex::new(Vec::new()),
        }
    }

    /// Emails and redirect targets passed to `send_magic_link`
    #[must_use]
    pub fn sent_links(&self) -> Vec<(String, Option<String>)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Tokens passed to `user_from_token`
    #[must_use]
    pub fn redeemed_tokens(&self) -> Vec<String> {
        self.redeemed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }

    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), ProviderError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((email.to_string(), redirect_to.map(ToString::to_string)));
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(())
    }

    async fn user_from_token(&self, access_token: &str) -> Result<UserRecord, ProviderError> {
        self.redeemed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(access_token.to_string());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_authenticator_records_ceremonies() {
        let mock = MockAuthenticator::timing_out();
        assert!(mock.is_available());
        assert_eq!(mock.ceremony_count(), 0);

        let options = CredentialCreationOptions {
            challenge: vec![1, 2, 3],
            relying_party: crate::authenticator::RelyingParty {
                name: "Test".to_string(),
            },
            user: crate::authenticator::UserEntity {
                id: vec![4, 5, 6],
                name: "Device".to_string(),
                display_name: "Device".to_string(),
            },
            algorithm: crate::authenticator::CredentialAlgorithm::Es256,
            user_verification: crate::authenticator::UserVerification::Preferred,
            timeout: std::time::Duration::from_secs(60),
        };

        let result = mock.create_credential(options).await;
        assert!(matches!(result, Err(CeremonyError::TimedOut)));
        assert_eq!(mock.ceremony_count(), 1);
        assert_eq!(mock.recorded_options()[0].challenge, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_mock_provider_returns_scripted_session_unfiltered() {
        let expired = TestFixtures::expired_session();
        let mock = MockIdentityProvider::with_session(expired.clone());

        let session = mock.current_session().await.unwrap();
        assert_eq!(session.access_token, expired.access_token);
        assert!(session.is_expired());
    }

    #[tokio::test]
    async fn test_mock_provider_records_failed_calls_too() {
        let mock =
            MockIdentityProvider::failing(ProviderError::transport("offline".to_string()));

        let result = mock.send_magic_link("user@example.com", None).await;
        assert!(result.is_err());
        assert_eq!(mock.sent_links().len(), 1);

        let result = mock.user_from_token("token").await;
        assert!(result.is_err());
        assert_eq!(mock.redeemed_tokens(), vec!["token"]);
    }
}
