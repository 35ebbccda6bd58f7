//! Shared LLM client wrapper
//!
//! Provides a common interface for Gemini API interactions.

use rig::providers::gemini;

/// Environment variable for the Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Shared LLM client wrapper.
///
/// A missing API key is logged at construction but does not prevent the
/// client from being built; callers observe the absence through
/// [`LlmClient::gemini_client`] returning `None` and fail the individual
/// call instead.
#[derive(Clone)]
pub struct LlmClient {
    client: Option<gemini::Client>,
}

impl LlmClient {
    /// Create a client from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Self {
        let client = std::env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|key| gemini::Client::new(&key));

        if client.is_none() {
            tracing::warn!(
                "Gemini API key not found ({ENV_GEMINI_API_KEY}), analysis calls will fail"
            );
        }

        Self { client }
    }

    /// Check if a credential was available at startup
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Get a reference to the underlying Gemini client, if configured.
    /// Use this to create extractors with custom configuration.
    pub fn gemini_client(&self) -> Option<&gemini::Client> {
        self.client.as_ref()
    }
}
