//! Magic link sign-in
//!
//! The one-time-token path: [`MagicLinkService::issue`] asks the provider
//! to deliver a sign-in link, [`MagicLinkService::redeem`] exchanges the
//! delivered token for the user record it proves.

mod errors;
pub use errors::MagicLinkError;

mod service;
pub use service::MagicLinkService;
