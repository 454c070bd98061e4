//! Error types for device credential enrolment

use std::fmt;

/// Ways the enrolment ceremony can fail
#[derive(Debug)]
pub enum EnrolError {
    /// The platform exposes no credential-creation capability
    UnsupportedPlatform,

    /// The ceremony ran but produced no credential
    CeremonyFailed(String),
}

impl fmt::Display for EnrolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrolError::UnsupportedPlatform => {
                write!(f, "Biometric authentication is not supported on this platform")
            }
            EnrolError::CeremonyFailed(msg) => write!(f, "Failed to create credential: {msg}"),
        }
    }
}

impl std::error::Error for EnrolError {}

/// Ways binding a credential to the user's account can fail
#[derive(Debug)]
pub enum RegisterError {
    /// No live session; the user must sign in before enrolling a device
    Unauthenticated,

    /// The backend rejected the registration, or the call never completed
    Rejected {
        /// HTTP status, when the request reached the backend
        status: Option<u16>,
        message: String,
    },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Unauthenticated => write!(f, "Not authenticated"),
            RegisterError::Rejected {
                status: Some(code),
                message,
            } => write!(f, "Failed to register biometric (status {code}): {message}"),
            RegisterError::Rejected {
                status: None,
                message,
            } => write!(f, "Failed to register biometric: {message}"),
        }
    }
}

impl std::error::Error for RegisterError {}
