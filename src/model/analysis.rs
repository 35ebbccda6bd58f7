use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete authorship analysis returned by the LLM.
///
/// This type doubles as the declared output schema for the extractor, so the
/// field names (camelCase on the wire) and the schemars descriptions are part
/// of the request contract. Nothing here is enforced locally: ranges and list
/// lengths are requested of the model, and the parsed payload is stored
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Estimated probability the text is AI-authored
    #[schemars(description = "Probability the text was written by an AI, 0-100")]
    pub ai_score: f64,

    /// Complementary estimate; not required to sum to 100 with ai_score
    #[schemars(description = "Probability the text was written by a human, 0-100")]
    pub human_score: f64,

    #[schemars(description = "Short verdict label (e.g. 'Likely AI', 'Mixed', 'Human')")]
    pub verdict: String,

    /// "Low", "Medium" or "High" by convention; not type-enforced
    #[schemars(description = "Confidence level of the analysis (Low, Medium, High)")]
    pub confidence: String,

    #[schemars(description = "Detailed 2-3 sentence explanation of the verdict")]
    pub reasoning: String,

    /// Short indicator strings in the order the model reported them
    #[schemars(
        description = "3 to 5 indicators found (e.g. 'Repetitive structure', 'Generic vocabulary')"
    )]
    pub flags: Vec<String>,

    #[schemars(description = "Tonal dimensions of the text (e.g. Formal, Creative, Robotic)")]
    pub tone_analysis: Vec<ToneScore>,
}

/// A single labeled tonal dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToneScore {
    pub label: String,
    #[schemars(description = "Score from 0 to 100")]
    pub score: f64,
}

/// Lifecycle of the one outstanding analysis.
///
/// `Idle` is both the initial state and re-enterable via clear; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Idle,
    Analyzing,
    Completed,
    Error,
}
