//! `GoTrue`-backed identity provider client
//!
//! Thin REST wrapper over a `GoTrue`-compatible auth service: one-time
//! sign-in delivery, token introspection, and an in-memory session slot the
//! consumer's sign-in layer populates. Nothing here is durable; the
//! provider owns all state.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use super::errors::ProviderError;
use super::traits::IdentityProvider;
use crate::models::{Session, UserRecord};
use crate::settings::ProviderSettings;

/// Request body for the one-time sign-in endpoint
#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    // Magic-link sign-up and sign-in are the same gesture
    create_user: bool,
}

/// Client for a `GoTrue`-compatible auth service
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    publishable_key: String,
    /// Session slot; the only lock in the crate, never held across an await
    session: RwLock<Option<Session>>,
}

impl GoTrueClient {
    /// Create a client from settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| ProviderError::transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self::with_http_client(http, settings))
    }

    /// Create a client around a caller-configured `reqwest` client
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, settings: &ProviderSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            publishable_key: settings.publishable_key.clone(),
            session: RwLock::new(None),
        }
    }

    /// Store the session the consumer's sign-in layer obtained
    pub fn store_session(&self, session: Session) {
        let mut slot = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(session);
    }

    /// Drop the stored session
    pub fn clear_session(&self) {
        let mut slot = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        decode_error_body(status, body)
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn current_session(&self) -> Option<Session> {
        let stored = self
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        stored.filter(|session| !session.is_expired())
    }

    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), ProviderError> {
        let mut request = self
            .http
            .post(self.endpoint("/auth/v1/otp"))
            .header("apikey", &self.publishable_key)
            .json(&OtpRequest {
                email,
                create_user: true,
            });
        if let Some(target) = redirect_to {
            request = request.query(&[("redirect_to", target)]);
        }

        debug!("requesting one-time sign-in link delivery");
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        if response.status().is_success() {
            debug!("provider accepted the sign-in link request");
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn user_from_token(&self, access_token: &str) -> Result<UserRecord, ProviderError> {
        debug!("introspecting one-time token");
        let response = self
            .http
            .get(self.endpoint("/auth/v1/user"))
            .header("apikey", &self.publishable_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<UserRecord>()
            .await
            .map_err(|e| ProviderError::transport(format!("failed to decode user record: {e}")))
    }
}

/// Pull the human-readable message out of a `GoTrue` error body
///
/// `GoTrue` is not consistent about the field name across endpoints and
/// versions; take the first of the known candidates, fall back to the raw
/// body so nothing the provider said is lost.
fn decode_error_body(status: u16, body: String) -> ProviderError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            ["msg", "error_description", "message"]
                .iter()
                .find_map(|key| {
                    value
                        .get(key)
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string)
                })
        })
        .unwrap_or(body);

    if message.is_empty() {
        ProviderError::http(status, format!("provider returned status {status}"))
    } else {
        ProviderError::http(status, message)
    }
}
