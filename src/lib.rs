//! # promptlab
//!
//! Deterministic prompt-quality scoring and gamified progression.
//!
//! The scoring engine ([`scoring::analyze`]) turns free text into a
//! reproducible [`model::PromptAnalysis`]; the progression engine
//! ([`progress::Progression`]) folds a sequence of analyses into XP,
//! levels, streaks, and achievements for one identity.

pub mod clock;
pub mod config;
pub mod error;
pub mod exemplars;
pub mod model;
pub mod progress;
pub mod scoring;
pub mod store;
pub mod telemetry;
