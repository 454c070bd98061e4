//! Parameter and result types for credential-creation ceremonies
//!
//! These mirror the options the platform credential API takes, restricted to
//! the subset this crate actually drives: one relying party, one user entity,
//! one allowed algorithm.

use std::time::Duration;

/// Parameters for one credential-creation ceremony
#[derive(Debug, Clone)]
pub struct CredentialCreationOptions {
    /// Fresh random challenge, generated per attempt
    pub challenge: Vec<u8>,
    pub relying_party: RelyingParty,
    pub user: UserEntity,
    /// The single credential algorithm the backend accepts
    pub algorithm: CredentialAlgorithm,
    pub user_verification: UserVerification,
    /// How long the authenticator waits for user interaction
    pub timeout: Duration,
}

/// The service a credential is scoped to
#[derive(Debug, Clone)]
pub struct RelyingParty {
    /// Display name shown in the platform's enrolment prompt
    pub name: String,
}

/// The account a credential is created for
#[derive(Debug, Clone)]
pub struct UserEntity {
    /// Opaque handle; random per attempt, never an account identifier
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

/// Credential algorithms the enrolment endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialAlgorithm {
    /// ECDSA over P-256 with SHA-256
    Es256,
}

impl CredentialAlgorithm {
    /// COSE algorithm identifier, as passed to the platform credential API
    #[must_use]
    pub const fn cose_identifier(self) -> i32 {
        match self {
            CredentialAlgorithm::Es256 => -7,
        }
    }
}

/// How strongly the authenticator should verify the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserVerification {
    Required,
    Preferred,
    Discouraged,
}

impl UserVerification {
    /// Wire value used by the platform credential API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UserVerification::Required => "required",
            UserVerification::Preferred => "preferred",
            UserVerification::Discouraged => "discouraged",
        }
    }
}

/// A credential the authenticator produced
#[derive(Debug, Clone)]
pub struct CreatedCredential {
    /// Identifier assigned by the authenticator
    pub id: String,
    /// Raw attestation object; opaque to this crate
    pub attestation_object: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_es256_cose_identifier() {
        assert_eq!(CredentialAlgorithm::Es256.cose_identifier(), -7);
    }

    #[test]
    fn test_user_verification_wire_values() {
        assert_eq!(UserVerification::Required.as_str(), "required");
        assert_eq!(UserVerification::Preferred.as_str(), "preferred");
        assert_eq!(UserVerification::Discouraged.as_str(), "discouraged");
    }
}
