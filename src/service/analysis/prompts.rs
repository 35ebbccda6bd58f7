//! Prompts for authorship analysis

/// System prompt for authorship analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a forensic linguistics analyst specializing in detecting prose generated by large language models.

Your role is to estimate the probability that a given text was written by an
AI versus a human, and to explain the signals behind that estimate.

You must:
- Judge only the text provided, not its topic or opinions
- Report concrete indicators, not generic observations
- Score tonal dimensions of the writing (e.g. Formal, Creative, Robotic)

Your output must be structured JSON only and conform to the requested schema."#;

/// Build the analysis prompt embedding the user text verbatim
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and determine the probability that it was
written by an artificial intelligence versus a human.

Text under analysis:
---
{text}
---

Look for:
1. Perplexity and flatness (overly predictable text).
2. Repetitive sentence structures.
3. Absence of deep emotional nuance or genuine anecdotal personal experience.
4. Over-use of perfectly placed logical connectives.

Return the data strictly in the requested JSON format."#
    )
}
