//! Terminal rendering of a completed analysis
//!
//! Pure functions from [`AnalysisResult`] to a string: same result, same
//! output. Band thresholds and colors are presentation policy only; nothing
//! outside this module may branch on them.

use owo_colors::{AnsiColors, OwoColorize};
use std::fmt::Write as _;

use crate::model::AnalysisResult;

/// Options for dashboard rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub enable_color: bool,
    /// Width of gauge and bar fills, in cells
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            bar_width: 40,
        }
    }
}

/// Risk band of the AI-likelihood gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Low,
    Caution,
    Elevated,
    High,
}

/// Band the gauge fill by AI score
pub fn gauge_band(ai_score: f64) -> GaugeBand {
    if ai_score <= 30.0 {
        GaugeBand::Low
    } else if ai_score <= 60.0 {
        GaugeBand::Caution
    } else if ai_score <= 85.0 {
        GaugeBand::Elevated
    } else {
        GaugeBand::High
    }
}

fn band_color(band: GaugeBand) -> AnsiColors {
    match band {
        GaugeBand::Low => AnsiColors::Green,
        GaugeBand::Caution => AnsiColors::Yellow,
        GaugeBand::Elevated => AnsiColors::Red,
        GaugeBand::High => AnsiColors::BrightRed,
    }
}

fn band_label(band: GaugeBand) -> &'static str {
    match band {
        GaugeBand::Low => "low",
        GaugeBand::Caution => "caution",
        GaugeBand::Elevated => "elevated",
        GaugeBand::High => "high",
    }
}

/// Color for a tone bar; scores above 70 are highlighted
pub fn tone_color(score: f64) -> AnsiColors {
    if score > 70.0 {
        AnsiColors::Cyan
    } else {
        AnsiColors::BrightBlack
    }
}

/// Proportional fill at the literal percentage of `width`.
///
/// Display-only saturation for out-of-range scores; the data itself is
/// never clamped.
fn proportional_fill(score: f64, width: usize) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn paint(text: &str, color: AnsiColors, enable_color: bool) -> String {
    if enable_color {
        format!("{}", text.color(color))
    } else {
        text.to_string()
    }
}

/// Render a completed analysis as a text dashboard.
pub fn render_dashboard(result: &AnalysisResult, opts: &RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Verdict: {}  (confidence: {})",
        result.verdict, result.confidence
    );
    let _ = writeln!(out);

    // Gauge: AI likelihood with banded fill color
    let band = gauge_band(result.ai_score);
    let gauge = proportional_fill(result.ai_score, opts.bar_width);
    let _ = writeln!(out, "AI likelihood");
    let _ = writeln!(
        out,
        "  [{}] {:.0}%  {}",
        paint(&gauge, band_color(band), opts.enable_color),
        result.ai_score,
        band_label(band)
    );
    let _ = writeln!(out);

    // Composition: two independent bars at their literal widths
    let _ = writeln!(out, "Composition");
    let ai_bar = proportional_fill(result.ai_score, opts.bar_width);
    let human_bar = proportional_fill(result.human_score, opts.bar_width);
    let _ = writeln!(
        out,
        "  AI     [{}] {:.0}%",
        paint(&ai_bar, AnsiColors::Magenta, opts.enable_color),
        result.ai_score
    );
    let _ = writeln!(
        out,
        "  Human  [{}] {:.0}%",
        paint(&human_bar, AnsiColors::Blue, opts.enable_color),
        result.human_score
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Reasoning");
    let _ = writeln!(out, "  {}", result.reasoning);
    let _ = writeln!(out);

    // Indicators in the order the model reported them
    let _ = writeln!(out, "Indicators");
    for flag in &result.flags {
        let _ = writeln!(out, "  - {}", flag);
    }
    let _ = writeln!(out);

    // Tone chart in given order, no independent sort
    let _ = writeln!(out, "Tone");
    let label_width = result
        .tone_analysis
        .iter()
        .map(|t| t.label.chars().count())
        .max()
        .unwrap_or(0);
    for tone in &result.tone_analysis {
        let bar = proportional_fill(tone.score, opts.bar_width);
        let _ = writeln!(
            out,
            "  {:<width$}  [{}] {:.0}",
            tone.label,
            paint(&bar, tone_color(tone.score), opts.enable_color),
            tone.score,
            width = label_width
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, ToneScore};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            ai_score: 82.0,
            human_score: 18.0,
            verdict: "Likely AI".to_string(),
            confidence: "High".to_string(),
            reasoning: "Uniform rhythm, no anecdotal detail.".to_string(),
            flags: vec![
                "Repetitive structure".to_string(),
                "Generic vocabulary".to_string(),
            ],
            tone_analysis: vec![
                ToneScore {
                    label: "Formal".to_string(),
                    score: 90.0,
                },
                ToneScore {
                    label: "Creative".to_string(),
                    score: 15.0,
                },
            ],
        }
    }

    fn plain_opts() -> RenderOptions {
        RenderOptions {
            enable_color: false,
            bar_width: 40,
        }
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(gauge_band(0.0), GaugeBand::Low);
        assert_eq!(gauge_band(30.0), GaugeBand::Low);
        assert_eq!(gauge_band(31.0), GaugeBand::Caution);
        assert_eq!(gauge_band(60.0), GaugeBand::Caution);
        assert_eq!(gauge_band(61.0), GaugeBand::Elevated);
        assert_eq!(gauge_band(85.0), GaugeBand::Elevated);
        assert_eq!(gauge_band(86.0), GaugeBand::High);
        assert_eq!(gauge_band(100.0), GaugeBand::High);
    }

    #[test]
    fn tone_highlight_threshold() {
        assert_eq!(tone_color(70.0), AnsiColors::BrightBlack);
        assert_eq!(tone_color(71.0), AnsiColors::Cyan);
    }

    #[test]
    fn bars_use_literal_percentages() {
        // 82% of 40 cells rounds to 33, 18% to 7; no normalization to 100
        let ai = proportional_fill(82.0, 40);
        let human = proportional_fill(18.0, 40);
        assert_eq!(ai.matches('█').count(), 33);
        assert_eq!(human.matches('█').count(), 7);
    }

    #[test]
    fn out_of_range_scores_saturate_the_fill_only() {
        assert_eq!(proportional_fill(140.0, 40).matches('█').count(), 40);
        assert_eq!(proportional_fill(-5.0, 40).matches('█').count(), 0);
    }

    #[test]
    fn flags_render_in_given_order() {
        let rendered = render_dashboard(&sample_result(), &plain_opts());
        let first = rendered.find("Repetitive structure").unwrap();
        let second = rendered.find("Generic vocabulary").unwrap();
        assert!(first < second);
    }

    #[test]
    fn tones_render_in_given_order() {
        let rendered = render_dashboard(&sample_result(), &plain_opts());
        let first = rendered.find("Formal").unwrap();
        let second = rendered.find("Creative").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_flags_render_an_empty_section() {
        let mut result = sample_result();
        result.flags.clear();

        let rendered = render_dashboard(&result, &plain_opts());
        assert!(rendered.contains("Indicators"));
        assert!(!rendered.contains("  - "));
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = sample_result();
        let opts = RenderOptions::default();
        assert_eq!(
            render_dashboard(&result, &opts),
            render_dashboard(&result, &opts)
        );
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let rendered = render_dashboard(&sample_result(), &plain_opts());
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn colored_output_differs_from_plain() {
        let result = sample_result();
        let plain = render_dashboard(&result, &plain_opts());
        let colored = render_dashboard(&result, &RenderOptions::default());
        assert_ne!(plain, colored);
        assert!(colored.contains('\u{1b}'));
    }
}
