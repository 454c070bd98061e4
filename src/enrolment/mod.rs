//! Device credential enrolment
//!
//! The hardware-backed path for binding a device to a user's account:
//! the [`DeviceEnroller`] runs the authenticator ceremony, the
//! [`CredentialRegistrar`] submits the result to the enrolment endpoint.

mod errors;
pub use errors::{EnrolError, RegisterError};

mod service;
pub use service::*;
