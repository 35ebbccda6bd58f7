pub mod analysis;
pub mod llm;

pub use analysis::{AnalysisError, AnalysisService, TextAnalyzer};
pub use llm::LlmClient;
