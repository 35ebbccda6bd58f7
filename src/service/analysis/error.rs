//! Error types for authorship analysis

use thiserror::Error;

use crate::service::llm::ENV_GEMINI_API_KEY;

/// Error type for authorship analysis.
///
/// The configuration failure is a distinguished variant so callers can
/// select the instructive message without inspecting error text. Transport
/// failures and malformed payloads are deliberately not told apart: both
/// surface as [`AnalysisError::ServiceFailed`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Gemini client not configured (missing {ENV_GEMINI_API_KEY})")]
    CredentialMissing,

    #[error("empty response from model")]
    EmptyResponse,

    #[error("analysis request failed: {0}")]
    ServiceFailed(String),
}
