//! Advisory validation for LLM-returned analysis results
//!
//! The requested schema constrains the request, not the response. These
//! checks surface quality issues in logs without altering the stored result;
//! the payload is rendered exactly as the service returned it.

use crate::model::AnalysisResult;

/// Confidence labels requested of the model
const EXPECTED_CONFIDENCE_LABELS: &[&str] = &["Low", "Medium", "High"];

/// Requested bounds on the number of indicator flags
const EXPECTED_FLAGS_MIN: usize = 3;
const EXPECTED_FLAGS_MAX: usize = 5;

/// Result of advisory validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Quality issues found; never fatal
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate a parsed analysis result against the shape that was requested.
///
/// Checks:
/// 1. Scores are within 0-100
/// 2. Flags list is non-empty and within the requested count
/// 3. Tone scores are within 0-100
/// 4. Confidence uses one of the conventional labels
pub fn validate_result(result: &AnalysisResult) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !(0.0..=100.0).contains(&result.ai_score) {
        report.add_warning(format!("aiScore {} outside 0-100", result.ai_score));
    }
    if !(0.0..=100.0).contains(&result.human_score) {
        report.add_warning(format!("humanScore {} outside 0-100", result.human_score));
    }

    if result.flags.is_empty() {
        report.add_warning("no indicator flags returned".to_string());
    } else if result.flags.len() < EXPECTED_FLAGS_MIN || result.flags.len() > EXPECTED_FLAGS_MAX {
        report.add_warning(format!(
            "{} indicator flags returned, expected {} to {}",
            result.flags.len(),
            EXPECTED_FLAGS_MIN,
            EXPECTED_FLAGS_MAX
        ));
    }

    for tone in &result.tone_analysis {
        if !(0.0..=100.0).contains(&tone.score) {
            report.add_warning(format!(
                "tone '{}' score {} outside 0-100",
                tone.label, tone.score
            ));
        }
    }

    if !EXPECTED_CONFIDENCE_LABELS.contains(&result.confidence.as_str()) {
        report.add_warning(format!(
            "unconventional confidence label '{}'",
            result.confidence
        ));
    }

    report
}

/// Log all warnings from a validation report
pub fn log_report(report: &ValidationReport) {
    for warning in &report.warnings {
        tracing::warn!(warning = %warning, "Analysis payload quality issue");
    }
}
