//! Feature extractors: five 0–100 sub-scores plus a token estimate.
//!
//! All pure functions of the trimmed input string. Scores clamp into
//! [0, 100] by policy — adversarial input length or content never
//! escapes the range.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{CATEGORY_KEYWORDS, NEGATIVE_INDICATORS, POSITIVE_INDICATORS};
use crate::model::Feedback;

static QUESTION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(what|how|why|when|where|which|who)\b").unwrap());
static FILLER_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(um|uh|like|you know|basically|actually)\b").unwrap());
static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static FORMAT_HINTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)example|format|template|style").unwrap());
static OUTPUT_FORMATS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(json|csv|html|markdown|bullet points|numbered list)\b").unwrap()
});
static REQUIREMENT_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(must|should|need|require|limit|maximum|minimum)\b").unwrap()
});
static VAGUE_QUANTIFIERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(some|many|few|several|various|different|general)\b").unwrap()
});
static PURPOSE_CONNECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(for|to|in order to|because|since|given that|assuming)\b").unwrap()
});
static AUDIENCE_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(audience|reader|user|student|beginner|expert|professional)\b").unwrap()
});
static GOAL_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(goal|purpose|objective|aim|target|result|outcome)\b").unwrap()
});
static BACKGROUND_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(background|context|situation|scenario|case|project)\b").unwrap()
});
static FLOW_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(first|second|then|next|finally|however|therefore|additionally)\b").unwrap()
});
static LIST_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\d+\.|-|\*|•)").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?;:,]").unwrap());

/// Estimate the token count of a prompt.
///
/// `ceil(words × 1.3 + chars × 0.25)` — a cheap proxy for model
/// tokenization, deliberately not a real tokenizer.
pub fn estimate_tokens(prompt: &str) -> u32 {
    let words = prompt.split_whitespace().count() as f64;
    let chars = prompt.chars().count() as f64;
    (words * 1.3 + chars * 0.25).ceil() as u32
}

/// Sub-scores as computed. Clarity, specificity, context, and length
/// are integer arithmetic; structure keeps its capitalization fraction
/// because the weighted composite must see the exact value. Only the
/// reported [`Feedback`] rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScores {
    pub clarity: u8,
    pub specificity: u8,
    pub context: u8,
    pub structure: f64,
    pub length: u8,
}

impl AxisScores {
    /// The rounded view carried on the analysis.
    pub fn rounded(&self) -> Feedback {
        Feedback {
            clarity: self.clarity,
            specificity: self.specificity,
            context: self.context,
            structure: self.structure.round() as u8,
            length: self.length,
        }
    }
}

/// Compute all five sub-scores for a trimmed, non-empty prompt.
pub fn extract_scores(prompt: &str) -> AxisScores {
    let sentences = split_sentences(prompt);
    let word_count = prompt.split_whitespace().count();

    AxisScores {
        clarity: assess_clarity(prompt),
        specificity: assess_specificity(prompt),
        context: assess_context(prompt),
        structure: assess_structure(prompt, &sentences),
        length: assess_length(word_count),
    }
}

/// Sentences are the non-blank substrings between `.`, `!`, `?` runs.
pub fn split_sentences(prompt: &str) -> Vec<&str> {
    prompt
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn clamp_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Base 50; quality indicators, an interrogative word, and filler
/// occurrences move it. Indicators count once each; fillers count per
/// occurrence.
fn assess_clarity(prompt: &str) -> u8 {
    let mut score: i32 = 50;
    let lower = prompt.to_lowercase();

    for indicator in POSITIVE_INDICATORS {
        if lower.contains(indicator) {
            score += 5;
        }
    }
    for indicator in NEGATIVE_INDICATORS {
        if lower.contains(indicator) {
            score -= 10;
        }
    }

    if QUESTION_WORDS.is_match(prompt) {
        score += 10;
    }

    let fillers = FILLER_WORDS.find_iter(prompt).count() as i32;
    score -= fillers * 5;

    clamp_score(score as f64)
}

/// Base 30; digit runs, format/output/requirement mentions add, vague
/// quantifiers subtract per occurrence.
fn assess_specificity(prompt: &str) -> u8 {
    let mut score: i32 = 30;

    let digit_runs = DIGIT_RUNS.find_iter(prompt).count() as i32;
    score += (digit_runs * 8).min(25);

    if FORMAT_HINTS.is_match(prompt) {
        score += 15;
    }
    if OUTPUT_FORMATS.is_match(prompt) {
        score += 10;
    }
    if REQUIREMENT_WORDS.is_match(prompt) {
        score += 10;
    }

    let vague = VAGUE_QUANTIFIERS.find_iter(prompt).count() as i32;
    score -= vague * 3;

    clamp_score(score as f64)
}

/// Base 40; purpose/audience/goal/background mentions add, plus 2 per
/// domain keyword found (each keyword once per category set).
fn assess_context(prompt: &str) -> u8 {
    let mut score: i32 = 40;
    let lower = prompt.to_lowercase();

    if PURPOSE_CONNECTIVES.is_match(prompt) {
        score += 15;
    }
    if AUDIENCE_TERMS.is_match(prompt) {
        score += 10;
    }
    if GOAL_TERMS.is_match(prompt) {
        score += 10;
    }
    if BACKGROUND_TERMS.is_match(prompt) {
        score += 8;
    }

    for (_, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords {
            if lower.contains(keyword) {
                score += 2;
            }
        }
    }

    clamp_score(score as f64)
}

/// Base 50; sentence count, punctuation density, leading capitals,
/// list markers, and flow connectives all add. The capitalization term
/// is a fraction of sentences, so the result can be fractional and is
/// returned unrounded.
fn assess_structure(prompt: &str, sentences: &[&str]) -> f64 {
    let mut score: f64 = 50.0;

    if sentences.len() > 1 {
        score += 10.0;
    }
    if sentences.len() > 3 {
        score += 5.0;
    }

    let punctuation = PUNCTUATION.find_iter(prompt).count() as f64;
    score += (punctuation * 2.0).min(15.0);

    if !sentences.is_empty() {
        let capitalized = sentences
            .iter()
            .filter(|s| {
                s.trim()
                    .chars()
                    .next()
                    .is_some_and(|c| !c.is_lowercase())
            })
            .count() as f64;
        score += capitalized / sentences.len() as f64 * 10.0;
    }

    if LIST_MARKERS.is_match(prompt) {
        score += 10.0;
    }
    if FLOW_WORDS.is_match(prompt) {
        score += 8.0;
    }

    score.clamp(0.0, 100.0)
}

/// Function of word count only. 10–50 words is the sweet spot; very
/// long prompts decay 2 points per word past 150 down to a floor of 20.
fn assess_length(word_count: usize) -> u8 {
    match word_count {
        10..=50 => 100,
        5..=80 => 80,
        3..=100 => 60,
        1..=150 => 40,
        0 => 20,
        n => (100i64 - 2 * (n as i64 - 150)).max(20) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_estimate_rounds_up() {
        // 3 words, 13 chars: 3.9 + 3.25 = 7.15 → 8
        assert_eq!(estimate_tokens("Write a story"), 8);
        assert_eq!(estimate_tokens("short"), 3);
    }

    #[test]
    fn length_bands() {
        assert_eq!(assess_length(0), 20);
        assert_eq!(assess_length(1), 40);
        assert_eq!(assess_length(3), 60);
        assert_eq!(assess_length(5), 80);
        assert_eq!(assess_length(10), 100);
        assert_eq!(assess_length(50), 100);
        assert_eq!(assess_length(51), 80);
        assert_eq!(assess_length(80), 80);
        assert_eq!(assess_length(81), 60);
        assert_eq!(assess_length(100), 60);
        assert_eq!(assess_length(101), 40);
        assert_eq!(assess_length(150), 40);
        assert_eq!(assess_length(151), 98);
        assert_eq!(assess_length(160), 80);
        assert_eq!(assess_length(200), 20);
        assert_eq!(assess_length(10_000), 20);
    }

    #[test]
    fn filler_words_count_per_occurrence() {
        // Four filler hits: um, like, like, basically → 50 - 20 = 30
        let clarity = assess_clarity("um I like want it like basically done");
        assert_eq!(clarity, 30);
    }

    #[test]
    fn structure_keeps_the_capitalization_fraction() {
        // 4 sentences, 3 capitalized: 50 + 10 + 5 + 8 + 3/4×10 = 80.5
        let prompt = "Aa bb. Cc dd. Ee ff. gg hh.";
        let raw = assess_structure(prompt, &split_sentences(prompt));
        assert_eq!(raw, 80.5);

        let scores = extract_scores(prompt);
        assert_eq!(scores.structure, 80.5);
        assert_eq!(scores.rounded().structure, 81);
    }

    #[test]
    fn digit_runs_cap_at_25() {
        // 4 digit runs × 8 = 32, capped at 25 → 30 + 25 = 55
        assert_eq!(assess_specificity("1 2 3 4"), 55);
    }

    #[test]
    fn sentences_split_on_terminators_only() {
        let s = split_sentences("One. Two! Three? ");
        assert_eq!(s.len(), 3);
        assert!(split_sentences("no terminator").len() == 1);
        assert!(split_sentences("...").is_empty());
    }
}
