//! Analysis span helpers.
//!
//! Provides span creation and outcome recording for prompts flowing
//! through the scoring and progression engines.

use tracing::Span;

/// Start a span covering one analyze → advance cycle.
///
/// The `prompt.score` field is declared empty and can be filled via
/// [`record_outcome`].
pub fn start_analysis_span(username: &str) -> Span {
    tracing::info_span!(
        "prompt.analyze",
        "prompt.user" = username,
        "prompt.score" = tracing::field::Empty,
        "prompt.category" = tracing::field::Empty,
    )
}

/// Record the scoring outcome on the analysis span.
pub fn record_outcome(span: &Span, score: u8, category: &str) {
    span.record("prompt.score", u64::from(score));
    span.record("prompt.category", category);
}
