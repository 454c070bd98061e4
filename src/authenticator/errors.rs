//! Error types for authenticator ceremonies

use std::fmt;

/// Outcomes of a failed credential-creation ceremony
///
/// The enroller collapses all of these into a single failure kind; the
/// distinction exists so authenticator implementations can report what the
/// platform told them.
#[derive(Debug)]
pub enum CeremonyError {
    /// The user did not respond before the ceremony timeout
    TimedOut,

    /// The user dismissed the ceremony
    Cancelled,

    /// The platform refused the request
    Rejected(String),
}

impl fmt::Display for CeremonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CeremonyError::TimedOut => write!(f, "ceremony timed out"),
            CeremonyError::Cancelled => write!(f, "ceremony was cancelled"),
            CeremonyError::Rejected(msg) => write!(f, "authenticator rejected the request: {msg}"),
        }
    }
}

impl std::error::Error for CeremonyError {}
