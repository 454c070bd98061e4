//! Authenticator capability for device credential enrolment
//!
//! This module defines the contract between the enrolment flow and the
//! device-local authenticator: the ceremony parameters the flow supplies,
//! the credential the authenticator hands back, and the ways a ceremony
//! can end without one.

mod errors;
pub use errors::CeremonyError;

mod traits;
pub use traits::Authenticator;

mod types;
pub use types::*;
