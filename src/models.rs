use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod auth;

/// Credential produced by one authenticator enrolment
///
/// Created by the enroller, immutable, and consumed exactly once by the
/// registrar; `register` takes it by value so a credential cannot be
/// submitted twice. The two fields cross the HTTP boundary verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeviceCredential {
    /// Identifier assigned by the authenticator
    pub device_id: String,
    /// Base64-encoded attestation object. The field name matches the wire
    /// contract even though the payload is the full attestation object,
    /// not a bare public key. Opaque to this crate.
    pub public_key: String,
}

/// Opaque bearer capability for the enrolment endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub access_token: String,
    /// Expiry reported by the provider; `None` means none was reported
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the reported expiry has passed
    ///
    /// A session without a reported expiry is treated as live; the provider
    /// is the source of truth for token lifetimes.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}

/// Request to deliver a one-time sign-in link
#[derive(Clone, Debug)]
pub struct MagicLinkRequest {
    pub email: String,
    /// Where the link should land the user after redemption; forwarded to
    /// the provider untouched
    pub redirect_to: Option<String>,
}

/// Provider-owned user record returned by token introspection
///
/// Deserialized as-is with no local validation; unknown provider fields
/// are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserRecord {
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}
