//! Device credential enrolment services
//!
//! Two single-shot operations joined only by call order: the enroller drives
//! one authenticator ceremony and packages the result, the registrar binds
//! that result to the authenticated user with one HTTP call. Neither
//! operation retries; a failed ceremony needs fresh user interaction and a
//! failed registration is the caller's decision to repeat.

use std::time::Duration;

use log::debug;

use super::errors::{EnrolError, RegisterError};
use crate::authenticator::{
    Authenticator, CredentialAlgorithm, CredentialCreationOptions, RelyingParty, UserEntity,
    UserVerification,
};
use crate::crypto;
use crate::models::DeviceCredential;
use crate::provider::IdentityProvider;
use crate::settings::EnrolmentSettings;

/// Relying-party name shown in the platform's enrolment prompt
pub const RELYING_PARTY_NAME: &str = "Dompet";

/// How long the authenticator waits for user interaction
pub const CEREMONY_TIMEOUT: Duration = Duration::from_secs(60);

/// Path of the enrolment endpoint, relative to the API base URL
pub const ENROL_PATH: &str = "/api/auth/biometric/enrol";

/// Drives the authenticator ceremony and packages the result
pub struct DeviceEnroller<A> {
    authenticator: A,
}

impl<A: Authenticator> DeviceEnroller<A> {
    /// Create an enroller over the platform's authenticator
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// Enrol this device, producing a credential ready for registration
    ///
    /// Runs one credential-creation ceremony with a fresh challenge and a
    /// fresh user handle. No network I/O happens here; the returned
    /// credential is bound to the account by
    /// [`CredentialRegistrar::register`].
    ///
    /// # Errors
    ///
    /// - [`EnrolError::UnsupportedPlatform`] when the platform exposes no
    ///   credential-creation capability; no ceremony is started.
    /// - [`EnrolError::CeremonyFailed`] when the ceremony times out, is
    ///   cancelled, or is refused by the platform.
    pub async fn enrol(&self, device_name: &str) -> Result<DeviceCredential, EnrolError> {
        if !self.authenticator.is_available() {
            return Err(EnrolError::UnsupportedPlatform);
        }

        let options = CredentialCreationOptions {
            challenge: crypto::generate_challenge(),
            relying_party: RelyingParty {
                name: RELYING_PARTY_NAME.to_string(),
            },
            user: UserEntity {
                id: crypto::generate_user_handle(),
                name: device_name.to_string(),
                display_name: device_name.to_string(),
            },
            algorithm: CredentialAlgorithm::Es256,
            user_verification: UserVerification::Preferred,
            timeout: CEREMONY_TIMEOUT,
        };

        debug!("starting credential ceremony for device '{device_name}'");
        let created = self
            .authenticator
            .create_credential(options)
            .await
            .map_err(|e| EnrolError::CeremonyFailed(e.to_string()))?;
        debug!("credential ceremony produced credential '{}'", created.id);

        Ok(DeviceCredential {
            device_id: created.id,
            public_key: crypto::encode_attestation_object(&created.attestation_object),
        })
    }
}

/// Binds an enrolled credential to the authenticated user's account
pub struct CredentialRegistrar<P> {
    provider: P,
    http: reqwest::Client,
    settings: EnrolmentSettings,
}

impl<P: IdentityProvider> CredentialRegistrar<P> {
    /// Create a registrar with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(provider: P, settings: EnrolmentSettings) -> Result<Self, RegisterError> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| RegisterError::Rejected {
                status: None,
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self::with_http_client(provider, http, settings))
    }

    /// Create a registrar around a caller-configured `reqwest` client
    #[must_use]
    pub fn with_http_client(
        provider: P,
        http: reqwest::Client,
        settings: EnrolmentSettings,
    ) -> Self {
        Self {
            provider,
            http,
            settings,
        }
    }

    /// Register a credential with the enrolment endpoint
    ///
    /// Takes the credential by value: a credential is consumed exactly once,
    /// successful or not. The session gate runs first, so an unauthenticated
    /// caller costs no network traffic. Any 2xx answer is success; the
    /// response body is ignored.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::Unauthenticated`] when no live session exists.
    /// - [`RegisterError::Rejected`] when the backend answers outside 2xx
    ///   (status preserved) or the call never completes (no status).
    pub async fn register(&self, credential: DeviceCredential) -> Result<(), RegisterError> {
        let session = self
            .provider
            .current_session()
            .await
            .filter(|session| !session.is_expired())
            .ok_or(RegisterError::Unauthenticated)?;

        let url = format!(
            "{}{ENROL_PATH}",
            self.settings.api_base_url.trim_end_matches('/')
        );
        debug!("registering device credential '{}'", credential.device_id);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&session.access_token)
            .json(&credential)
            .send()
            .await
            .map_err(|e| RegisterError::Rejected {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("enrolment endpoint accepted the credential ({status})");
            return Ok(());
        }

        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("enrolment endpoint returned status {code}")
        } else {
            body
        };
        Err(RegisterError::Rejected {
            status: Some(code),
            message,
        })
    }
}
