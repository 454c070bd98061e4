use std::time::Duration;

/// Configuration for the enrolment and magic link flows
///
/// Constructed in code by the consumer; this crate reads no files and no
/// environment variables. Protocol constants (relying-party name, ceremony
/// timeout, endpoint paths) are fixed in code, not configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthSettings {
    pub enrolment: EnrolmentSettings,
    pub provider: ProviderSettings,
}

/// Settings for the credential registrar
#[derive(Debug, Clone)]
pub struct EnrolmentSettings {
    /// Origin of the backend that stores enrolled credentials
    pub api_base_url: String,
    /// Timeout applied to the enrolment HTTP call
    pub request_timeout: Duration,
}

impl Default for EnrolmentSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Settings for the identity-provider client
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Origin of the `GoTrue`-compatible auth service
    pub base_url: String,
    /// Publishable API key sent with every provider request
    pub publishable_key: String,
    /// Timeout applied to provider HTTP calls
    pub request_timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            // Local Supabase stack default
            base_url: "http://localhost:54321".to_string(),
            publishable_key: String::new(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
