//! Authorship analysis service using LLM
//!
//! Sends the user text to Gemini with a declared output schema and parses
//! the structured verdict. One outbound call per invocation; no retry, no
//! caching.

use async_trait::async_trait;
use rig::extractor::ExtractionError;

use crate::model::AnalysisResult;
use crate::service::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::service::llm::LlmClient;

pub mod error;
pub mod prompts;
pub mod validation;

pub use error::AnalysisError;

/// Seam between the controller and the external service, so the lifecycle
/// can be tested against a mock analyzer.
#[async_trait]
pub trait TextAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Service estimating whether a text was written by an AI or a human
pub struct AnalysisService {
    llm_client: LlmClient,
    model: String,
}

impl AnalysisService {
    /// Creates a new analysis service using a shared LLM client.
    pub fn new(llm_client: LlmClient, model: impl Into<String>) -> Self {
        let model = model.into();

        tracing::info!(
            model = %model,
            configured = llm_client.is_configured(),
            "Authorship analysis service initialized"
        );

        Self { llm_client, model }
    }
}

#[async_trait]
impl TextAnalyzer for AnalysisService {
    /// Run a single analysis round trip.
    ///
    /// The parsed payload is trusted as-is; advisory validation only logs
    /// warnings and never rewrites fields.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let client = self
            .llm_client
            .gemini_client()
            .ok_or(AnalysisError::CredentialMissing)?;

        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            text_chars = text.chars().count(),
            "Initiating Gemini API call for authorship analysis"
        );

        let prompt = build_analysis_prompt(text);
        let prompt_length = prompt.len();

        let extractor = client
            .extractor::<AnalysisResult>(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .build();

        let result = match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "Gemini API call for authorship analysis completed successfully"
                );
                result
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Gemini API call for authorship analysis failed"
                );
                return Err(match e {
                    ExtractionError::NoData => AnalysisError::EmptyResponse,
                    other => AnalysisError::ServiceFailed(other.to_string()),
                });
            }
        };

        // Quality issues are logged, never enforced
        let report = validation::validate_result(&result);
        if !report.is_clean() {
            validation::log_report(&report);
        }

        Ok(result)
    }
}
