//! Application controller owning the analysis lifecycle
//!
//! Holds the input text, the four-state status, and the latest result as one
//! explicit state object. All mutation happens through [`AppController::submit`]
//! and [`AppController::clear`]; the presentation layer only reads.

use crate::model::{AnalysisResult, AnalysisStatus};
use crate::service::analysis::{AnalysisError, TextAnalyzer};

/// Minimum trimmed character count accepted for analysis
pub const MIN_TEXT_CHARS: usize = 50;

/// How a failed analysis should be presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credential missing: show the instructive configuration message
    Configuration,
    /// Transport, service, or payload-shape failure: show the generic
    /// retry-later message
    Transient,
}

impl From<&AnalysisError> for FailureKind {
    fn from(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::CredentialMissing => FailureKind::Configuration,
            AnalysisError::EmptyResponse | AnalysisError::ServiceFailed(_) => {
                FailureKind::Transient
            }
        }
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A call is already in flight; precondition failed, nothing changed
    Busy,
    /// Trimmed input was empty; silent no-op
    Ignored,
    /// Trimmed input under the minimum; user-visible rejection, no state
    /// change, no call issued
    TooShort { chars: usize },
    /// Analysis succeeded and the result is stored
    Completed,
    /// Analysis failed; status is `Error`, previous result (if any) is
    /// untouched
    Failed(FailureKind),
}

/// Controller owning the `input_text` / `status` / `result` triple.
pub struct AppController<A: TextAnalyzer> {
    analyzer: A,
    input_text: String,
    status: AnalysisStatus,
    result: Option<AnalysisResult>,
}

impl<A: TextAnalyzer> AppController<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            input_text: String::new(),
            status: AnalysisStatus::Idle,
            result: None,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Append a pasted line to the input buffer
    pub fn append_line(&mut self, line: &str) {
        if !self.input_text.is_empty() {
            self.input_text.push('\n');
        }
        self.input_text.push_str(line);
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    /// Latest successful result. May be stale while `status` is `Error`;
    /// render it only when `status` is `Completed`.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Submit the current input for analysis.
    ///
    /// The only suspension point in the system; at most one call is in
    /// flight, enforced both by the `&mut self` borrow across the await and
    /// by the explicit `Busy` precondition.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.status == AnalysisStatus::Analyzing {
            return SubmitOutcome::Busy;
        }

        let trimmed_chars = self.input_text.trim().chars().count();
        if trimmed_chars == 0 {
            return SubmitOutcome::Ignored;
        }
        if trimmed_chars < MIN_TEXT_CHARS {
            return SubmitOutcome::TooShort {
                chars: trimmed_chars,
            };
        }

        self.status = AnalysisStatus::Analyzing;

        match self.analyzer.analyze(&self.input_text).await {
            Ok(result) => {
                self.result = Some(result);
                self.status = AnalysisStatus::Completed;
                SubmitOutcome::Completed
            }
            Err(e) => {
                let kind = FailureKind::from(&e);
                tracing::error!(error = %e, kind = ?kind, "Analysis failed");
                self.status = AnalysisStatus::Error;
                SubmitOutcome::Failed(kind)
            }
        }
    }

    /// Reset input, result, and status back to `Idle`.
    ///
    /// Returns false without changing anything while a call is in flight or
    /// when there is neither text nor a result to discard.
    pub fn clear(&mut self) -> bool {
        if self.status == AnalysisStatus::Analyzing {
            return false;
        }
        if self.input_text.is_empty() && self.result.is_none() {
            return false;
        }

        self.input_text.clear();
        self.result = None;
        self.status = AnalysisStatus::Idle;
        true
    }

    #[cfg(test)]
    fn set_status(&mut self, status: AnalysisStatus) {
        self.status = status;
    }
}
