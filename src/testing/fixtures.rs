//! Pre-built test data

use chrono::{Duration, Utc};

use crate::models::{DeviceCredential, Session, UserRecord};
use crate::settings::{AuthSettings, EnrolmentSettings, ProviderSettings};

/// Fixtures shared across the test suite
pub struct TestFixtures;

impl TestFixtures {
    /// Complete settings pointing at loopback services
    #[must_use]
    pub fn settings() -> AuthSettings {
        AuthSettings {
            enrolment: Self::enrolment_settings(),
            provider: Self::provider_settings(),
        }
    }

    /// Enrolment settings pointing at an unreachable loopback port, so a
    /// test that should stay off the network fails fast if it does not
    #[must_use]
    pub fn enrolment_settings() -> EnrolmentSettings {
        EnrolmentSettings {
            api_base_url: "http://127.0.0.1:1".to_string(),
            request_timeout: std::time::Duration::from_secs(2),
        }
    }

    /// Provider settings pointing at an unreachable loopback port
    #[must_use]
    pub fn provider_settings() -> ProviderSettings {
        ProviderSettings {
            base_url: "http://127.0.0.1:1".to_string(),
            publishable_key: "test-anon-key".to_string(),
            request_timeout: std::time::Duration::from_secs(2),
        }
    }

    /// Live session expiring in an hour
    #[must_use]
    pub fn session() -> Session {
        Session {
            access_token: "test-access-token".to_string(),
            expires_at: Some(Utc::now() + Duration::hours(1)),
        }
    }

    /// Session whose expiry has already passed
    #[must_use]
    pub fn expired_session() -> Session {
        Session {
            access_token: "test-access-token".to_string(),
            expires_at: Some(Utc::now() - Duration::minutes(5)),
        }
    }

    /// Credential as packaged by a successful enrolment
    #[must_use]
    pub fn device_credential() -> DeviceCredential {
        DeviceCredential {
            device_id: "abc".to_string(),
            // Standard base64 of the attestation bytes "ABC"
            public_key: "QUJD".to_string(),
        }
    }

    /// Provider user record in `GoTrue` shape
    #[must_use]
    pub fn user_record() -> UserRecord {
        UserRecord {
            id: "11111111-2222-3333-4444-555555555555".to_string(),
            email: Some("user@example.com".to_string()),
            phone: None,
            email_confirmed_at: Some(Utc::now()),
            created_at: Some(Utc::now() - Duration::days(30)),
            last_sign_in_at: Some(Utc::now()),
        }
    }
}
