//! Scoring engine. The public API for analyzing prompt text.
//!
//! Composes the feature extractors into a composite score, a quality
//! tier, a category, and a bounded suggestion list. Fully
//! deterministic: identical input always yields identical output.

pub mod extractors;
pub mod keywords;

use tracing::debug;

use crate::model::{Feedback, PromptAnalysis, PromptCategory, PromptQuality};
use self::extractors::AxisScores;

/// Reference context window (GPT-3.5) for the limit flags.
pub const TOKEN_LIMIT: u32 = 4096;
/// Fraction of the limit that trips `is_near_limit`.
pub const WARNING_THRESHOLD: f64 = 0.8;
/// Fraction of the limit that trips `is_at_limit`.
pub const ERROR_THRESHOLD: f64 = 0.95;

/// Composite weights, in feedback-axis order. Must sum to exactly 1.0.
const WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];

/// Analyze a prompt. Total function — empty or whitespace-only input
/// maps to the fixed empty analysis, never an error.
pub fn analyze(prompt: &str) -> PromptAnalysis {
    let prompt = prompt.trim();

    if prompt.is_empty() {
        return empty_analysis();
    }

    let token_count = extractors::estimate_tokens(prompt);
    let scores = extractors::extract_scores(prompt);
    let category = categorize(prompt);
    let suggestions = suggestions(prompt, &scores);
    let score = composite_score(&scores);
    let feedback = scores.rounded();
    let quality = PromptQuality::from_score(score);

    debug!(score, %category, %quality, token_count, "prompt analyzed");

    PromptAnalysis {
        score,
        token_count,
        is_near_limit: f64::from(token_count) > f64::from(TOKEN_LIMIT) * WARNING_THRESHOLD,
        is_at_limit: f64::from(token_count) > f64::from(TOKEN_LIMIT) * ERROR_THRESHOLD,
        feedback,
        suggestions,
        category,
        quality,
    }
}

/// The reproducible constant returned for empty input.
pub fn empty_analysis() -> PromptAnalysis {
    PromptAnalysis {
        score: 0,
        token_count: 0,
        is_near_limit: false,
        is_at_limit: false,
        feedback: Feedback {
            clarity: 0,
            specificity: 0,
            context: 0,
            structure: 0,
            length: 0,
        },
        suggestions: vec!["Please enter a prompt to analyze".to_string()],
        category: PromptCategory::Conversational,
        quality: PromptQuality::Poor,
    }
}

/// Count keyword hits per category; strict maximum wins. All-zero
/// defaults to conversational; ties resolve to the first category in
/// table order reaching the maximum.
fn categorize(prompt: &str) -> PromptCategory {
    let lower = prompt.to_lowercase();

    let hits: Vec<(PromptCategory, usize)> = keywords::CATEGORY_KEYWORDS
        .iter()
        .map(|(category, words)| {
            let count = words.iter().filter(|w| lower.contains(*w)).count();
            (*category, count)
        })
        .collect();

    let max = hits.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return PromptCategory::Conversational;
    }

    hits.iter()
        .find(|(_, n)| *n == max)
        .map(|(c, _)| *c)
        .unwrap_or(PromptCategory::Conversational)
}

/// `round(Σ weight × sub-score)`, an integer in [0, 100]. Consumes the
/// exact sub-scores — rounding the structure fraction first can drift
/// the composite by a point.
fn composite_score(scores: &AxisScores) -> u8 {
    let weighted = f64::from(scores.clarity) * WEIGHTS[0]
        + f64::from(scores.specificity) * WEIGHTS[1]
        + f64::from(scores.context) * WEIGHTS[2]
        + scores.structure * WEIGHTS[3]
        + f64::from(scores.length) * WEIGHTS[4];

    weighted.round() as u8
}

/// Improvement suggestions, evaluated in fixed order and truncated to
/// the first four.
fn suggestions(prompt: &str, scores: &AxisScores) -> Vec<String> {
    let mut out = Vec::new();

    if scores.clarity < 70 {
        out.push("Be more specific about what you want".to_string());
        out.push("Avoid vague words like 'something' or 'anything'".to_string());
    }

    if scores.specificity < 60 {
        out.push("Include specific examples or formats you prefer".to_string());
        out.push("Add constraints or requirements (length, style, etc.)".to_string());
    }

    if scores.context < 60 {
        out.push("Provide background information or context".to_string());
        out.push("Mention your target audience or use case".to_string());
    }

    if scores.structure < 60.0 {
        out.push("Use proper punctuation and capitalization".to_string());
        out.push("Break complex requests into multiple sentences".to_string());
    }

    if scores.length < 50 {
        if prompt.split_whitespace().count() < 5 {
            out.push("Add more details to your prompt".to_string());
        } else {
            out.push("Consider breaking this into shorter, focused requests".to_string());
        }
    }

    let avg = (f64::from(scores.clarity)
        + f64::from(scores.specificity)
        + f64::from(scores.context)
        + scores.structure
        + f64::from(scores.length))
        / 5.0;
    if avg > 80.0 {
        out.push("Great prompt! This is clear and well-structured.".to_string());
    }

    out.truncate(4);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn composite_uses_the_exact_structure_value() {
        // 67.425 → 67; feeding the rounded 87 instead would give 67.5 → 68.
        let scores = AxisScores {
            clarity: 55,
            specificity: 63,
            context: 61,
            structure: 86.5,
            length: 100,
        };
        assert_eq!(composite_score(&scores), 67);
        assert_eq!(scores.rounded().structure, 87);
    }

    #[test]
    fn tie_break_prefers_table_order() {
        // "design a function": creative hit (design) and technical hit
        // (function) — technical comes first in the table.
        assert_eq!(categorize("design a function"), PromptCategory::Technical);
    }

    #[test]
    fn zero_hits_default_to_conversational() {
        assert_eq!(categorize("hello there"), PromptCategory::Conversational);
    }
}
