#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the dompet-auth library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod authenticator;
pub mod crypto;
pub mod enrolment;
pub mod magic_link;
pub mod models;
pub mod provider;
pub mod settings;
pub mod testing;

/// Re-export commonly used items
pub use authenticator::Authenticator;
pub use enrolment::{CredentialRegistrar, DeviceEnroller};
pub use magic_link::MagicLinkService;
pub use models::auth::AuthError;
pub use models::{DeviceCredential, MagicLinkRequest, Session, UserRecord};
pub use provider::{GoTrueClient, IdentityProvider};
pub use settings::AuthSettings;
