//! Metric instrument factories for promptlab.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"promptlab"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for promptlab instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("promptlab")
}

/// Counter: number of prompts analyzed.
/// Labels: `category`, `quality`.
pub fn prompts_analyzed() -> Counter<u64> {
    meter()
        .u64_counter("promptlab.prompts.analyzed")
        .with_description("Number of prompts analyzed")
        .build()
}

/// Counter: achievements unlocked.
/// Labels: `achievement_id`, `rarity`.
pub fn achievements_unlocked() -> Counter<u64> {
    meter()
        .u64_counter("promptlab.achievements.unlocked")
        .with_description("Number of achievements unlocked")
        .build()
}

/// Counter: XP awarded to registered identities.
pub fn xp_awarded() -> Counter<u64> {
    meter()
        .u64_counter("promptlab.xp.awarded")
        .with_description("Experience points awarded")
        .build()
}

/// Histogram: composite prompt scores.
pub fn prompt_score() -> Histogram<f64> {
    meter()
        .f64_histogram("promptlab.prompt.score")
        .with_description("Composite prompt score distribution")
        .build()
}
