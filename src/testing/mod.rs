//! Shared testing utilities
//!
//! Test doubles, fixtures, and a loopback HTTP stub used by both the unit
//! tests and the integration suite. Compiled into the library like any
//! other module so integration tests can reach it.
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-built test data (settings, sessions, credentials)
//! - [`mock`] - Scripted authenticator and identity-provider doubles
//! - [`stub`] - One-response HTTP server for wire-level assertions
//!
//! ## Usage
//!
//! ```rust
//! use dompet_auth::enrolment::CredentialRegistrar;
//! use dompet_auth::testing::{MockAuthenticator, MockIdentityProvider, TestFixtures};
//! use dompet_auth::DeviceEnroller;
//!
//! async fn enrol_and_register() {
//!     let enroller = DeviceEnroller::new(MockAuthenticator::approving("abc", b"ABC"));
//!     let credential = enroller.enrol("My Phone").await.unwrap();
//!     assert_eq!(credential, TestFixtures::device_credential());
//!
//!     let registrar = CredentialRegistrar::new(
//!         MockIdentityProvider::signed_in("token"),
//!         TestFixtures::settings().enrolment,
//!     )
//!     .unwrap();
//!     let _outcome = registrar.register(credential).await;
//! }
//! ```

pub mod fixtures;
pub mod mock;
pub mod stub;

pub use fixtures::TestFixtures;
pub use mock::{MockAuthenticator, MockIdentityProvider};
pub use stub::{CapturedRequest, StubServer};
