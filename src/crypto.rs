// Cryptographic utilities for the enrolment ceremony

use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;

/// Challenge size for a credential-creation ceremony (256 bits)
pub const CHALLENGE_SIZE: usize = 32;

/// User handle size presented to the authenticator (256 bits)
pub const USER_HANDLE_SIZE: usize = 32;

/// Generate a fresh ceremony challenge
///
/// Every enrolment attempt gets its own challenge from the process CSPRNG;
/// challenges are never reused or derived from earlier attempts.
#[must_use]
pub fn generate_challenge() -> Vec<u8> {
    random_bytes(CHALLENGE_SIZE)
}

/// Generate a fresh user handle for a credential-creation ceremony
///
/// The handle is random per attempt rather than derived from the account,
/// so a failed attempt leaks nothing about the user.
#[must_use]
pub fn generate_user_handle() -> Vec<u8> {
    random_bytes(USER_HANDLE_SIZE)
}

/// Encode an attestation object for transport
///
/// Standard-alphabet base64, matching what the enrolment endpoint stores.
/// The bytes are never inspected locally.
#[must_use]
pub fn encode_attestation_object(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

fn random_bytes(length: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; length];
    rand::rng().fill_bytes(&mut buffer);
    buffer
}
