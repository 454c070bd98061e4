//! Identity-provider client wrapper
//!
//! The leaf dependency of both sign-in paths: a trait capturing the three
//! provider primitives the crate needs, and a `GoTrue`-backed implementation.

mod errors;
pub use errors::ProviderError;

mod gotrue;
pub use gotrue::GoTrueClient;

mod traits;
pub use traits::IdentityProvider;
